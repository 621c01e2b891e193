//! Sample data store
//!
//! Hard-coded listings, market figures and testimonials. Everything here is
//! built once at start-up and never mutated.

use crate::error::Error;
use crate::models::{
    Category, MarketStat, MarketTrendPoint, Property, Testimonial, Trend, TypeDistribution,
};
use crate::result::Result;

const UNSPLASH: &str = "https://images.unsplash.com/photo-";
const UNSPLASH_PARAMS: &str = "?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80";

fn unsplash(photo: &str) -> String {
    format!("{UNSPLASH}{photo}{UNSPLASH_PARAMS}")
}

/// Hero background image
#[must_use]
pub fn hero_image() -> String {
    format!(
        "{UNSPLASH}1560518883-ce09059eeffa?ixlib=rb-1.2.1&auto=format&fit=crop&w=1950&q=80"
    )
}

/// Properties shown in the listing
#[must_use]
pub fn properties() -> Vec<Property> {
    vec![
        Property::new(1, "Villa contemporaine avec vue panoramique", Category::House)
            .with_price(850_000)
            .with_address("12 Chemin des Hauteurs, 75016 Paris")
            .with_layout(220.0, 7, 3, 4)
            .with_description(
                "Magnifique villa moderne avec vue imprenable sur la ville. Prestations haut de gamme, espace de vie lumineux et terrasse spacieuse.",
            )
            .with_features(["Piscine", "Jardin", "Terrasse", "Garage double", "Domotique"])
            .with_image(unsplash("1613977257363-707ba9348227")),
        Property::new(2, "Appartement de standing en centre-ville", Category::Apartment)
            .with_price(495_000)
            .with_address("25 Rue des Lilas, 69003 Lyon")
            .with_layout(95.0, 4, 2, 2)
            .with_description(
                "Bel appartement rénové avec matériaux de qualité. Emplacement idéal à proximité des commerces et transports.",
            )
            .with_features(["Balcon", "Ascenseur", "Parking", "Cave", "Cuisine équipée"])
            .with_image(unsplash("1560448204-e02f11c3d0e2")),
        Property::new(3, "Loft industriel dans quartier branché", Category::Loft)
            .with_price(620_000)
            .with_address("8 Place de la République, 33000 Bordeaux")
            .with_layout(150.0, 3, 2, 2)
            .with_description(
                "Ancien atelier réhabilité en loft. Volumes exceptionnels, luminosité maximale et design contemporain.",
            )
            .with_features([
                "Hauteur sous plafond",
                "Verrière",
                "Terrasse sur toit",
                "Stationnement",
            ])
            .with_image(unsplash("1574362848149-11496d93a7c7")),
        Property::new(4, "Maison de caractère avec jardin", Category::House)
            .with_price(545_000)
            .with_address("15 Avenue du Parc, 44000 Nantes")
            .with_layout(180.0, 6, 2, 4)
            .with_description(
                "Charmante maison dans quartier calme et résidentiel. Rénovée avec goût, elle offre un cadre de vie idéal pour une famille.",
            )
            .with_features(["Jardin arboré", "Véranda", "Dépendance", "Cave à vin"])
            .with_image(unsplash("1602343168117-bb8ffe3e2e9f")),
        Property::new(5, "Penthouse avec vue mer", Category::Apartment)
            .with_price(980_000)
            .with_address("3 Boulevard de la Mer, 06400 Cannes")
            .with_layout(135.0, 5, 3, 3)
            .with_description(
                "Somptueux penthouse offrant une vue imprenable sur la mer. Finitions luxueuses et terrasse panoramique de 50m².",
            )
            .with_features(["Vue panoramique", "Terrasse", "Jacuzzi", "Domotique", "Sécurité"])
            .with_image(unsplash("1562182384-08115de5ee97")),
        Property::new(6, "Maison d'architecte contemporaine", Category::House)
            .with_price(780_000)
            .with_address("42 Route des Pins, 31000 Toulouse")
            .with_layout(210.0, 6, 3, 4)
            .with_description(
                "Création originale d'un architecte renommé. Lignes épurées, matériaux nobles et intégration parfaite dans l'environnement.",
            )
            .with_features([
                "Piscine à débordement",
                "Jardin paysager",
                "Domotique complète",
                "Panneaux solaires",
            ])
            .with_image(unsplash("1600607687644-c7171b46277f")),
    ]
}

/// Twelve months of average price per square metre
#[must_use]
pub fn market_trends() -> Vec<MarketTrendPoint> {
    const MONTHS: [&str; 12] = [
        "Jan", "Fév", "Mar", "Avr", "Mai", "Juin", "Juil", "Août", "Sep", "Oct", "Nov", "Déc",
    ];
    (0_u32..)
        .zip(MONTHS)
        .map(|(i, month)| MarketTrendPoint::new(month, 4500 + i * 50))
        .collect()
}

/// Share of each listed category in the local market.
///
/// # Errors
///
/// Propagates [`Error::DistributionOverflow`]; the shipped figures sum to 100.
pub fn type_distribution() -> Result<TypeDistribution> {
    TypeDistribution::new([
        (Category::Apartment, 35),
        (Category::House, 45),
        (Category::Villa, 12),
        (Category::Loft, 8),
    ])
}

/// Headline figures shown under the market charts
#[must_use]
pub fn market_stats() -> Vec<MarketStat> {
    vec![
        MarketStat::new("Nouveaux biens", "+15%", Trend::Up),
        MarketStat::new("Délai de vente", "45 jours", Trend::Down),
        MarketStat::new("Taux de négociation", "-5.2%", Trend::Down),
        MarketStat::new("Rentabilité locative", "4.3%", Trend::Stable),
    ]
}

/// Client testimonials, in carousel order
#[must_use]
pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial::new(1, "Marie Dupont", "Propriétaire")
            .with_content("Service exceptionnel ! L'équipe a su répondre à toutes mes attentes et a trouvé rapidement des acquéreurs sérieux.")
            .with_avatar("https://randomuser.me/api/portraits/women/44.jpg"),
        Testimonial::new(2, "Thomas Bernard", "Acquéreur")
            .with_content("L'outil d'estimation m'a permis d'avoir une idée précise du marché avant de me lancer. Très simple d'utilisation !")
            .with_avatar("https://randomuser.me/api/portraits/men/32.jpg"),
        Testimonial::new(3, "Sophie Martin", "Investisseur")
            .with_content("Je recommande vivement cette agence pour son professionnalisme et sa connaissance approfondie du marché immobilier.")
            .with_avatar("https://randomuser.me/api/portraits/women/68.jpg"),
    ]
}

/// Dataset bundle handed to the view layer
#[derive(Debug, Clone)]
pub struct SampleData {
    pub properties: Vec<Property>,
    pub market_trends: Vec<MarketTrendPoint>,
    pub distribution: TypeDistribution,
    pub market_stats: Vec<MarketStat>,
    pub testimonials: Vec<Testimonial>,
}

impl SampleData {
    /// Load every sample collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the shipped distribution is inconsistent.
    pub fn load() -> Result<Self> {
        let data = Self {
            properties: properties(),
            market_trends: market_trends(),
            distribution: type_distribution()?,
            market_stats: market_stats(),
            testimonials: testimonials(),
        };
        if data.testimonials.is_empty() {
            return Err(Error::EmptyCarousel);
        }
        tracing::debug!(
            properties = data.properties.len(),
            testimonials = data.testimonials.len(),
            "sample data loaded"
        );
        Ok(data)
    }
}
