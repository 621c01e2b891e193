//! Static site copy: navigation, selling points, footer and contact details

pub const AGENCY_NAME: &str = "ImmoPrestige";
pub const AGENCY_TAGLINE: &str =
    "Votre partenaire immobilier de confiance depuis 2005. Notre expertise au service de vos projets.";

/// Anchor target of a page section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Top,
    Features,
    Properties,
    Estimator,
    Trends,
    Services,
    Testimonials,
    Blog,
    Contact,
}

impl Section {
    /// DOM id of the section element, empty for the page top
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Top => "",
            Self::Features => "features",
            Self::Properties => "properties",
            Self::Estimator => "estimator",
            Self::Trends => "trends",
            Self::Services => "services",
            Self::Testimonials => "testimonials",
            Self::Blog => "blog",
            Self::Contact => "contact",
        }
    }

    /// In-page link to the section
    #[must_use]
    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

/// Header navigation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub icon: Icon,
    pub target: Section,
}

/// Icon identifiers rendered by the view layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Home,
    Building,
    Search,
    Info,
    Blog,
    UserPlus,
    ChartLine,
    ChartPie,
    Star,
    MapMarker,
    Phone,
    Envelope,
    Facebook,
    Twitter,
    Instagram,
    LinkedIn,
}

/// Header navigation, in display order
#[must_use]
pub const fn nav_items() -> [NavItem; 6] {
    [
        NavItem { label: "Accueil", icon: Icon::Home, target: Section::Top },
        NavItem { label: "Nos Biens", icon: Icon::Building, target: Section::Properties },
        NavItem { label: "Estimateur", icon: Icon::Search, target: Section::Estimator },
        NavItem { label: "Nos Services", icon: Icon::Info, target: Section::Services },
        NavItem { label: "Blog", icon: Icon::Blog, target: Section::Blog },
        NavItem { label: "Contact", icon: Icon::UserPlus, target: Section::Contact },
    ]
}

/// "Why choose us" card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

#[must_use]
pub const fn features() -> [Feature; 4] {
    [
        Feature {
            icon: Icon::Home,
            title: "Expertise immobilière",
            description: "Notre équipe vous accompagne dans tous vos projets immobiliers avec une connaissance approfondie du marché local.",
        },
        Feature {
            icon: Icon::ChartLine,
            title: "Estimations précises",
            description: "Un outil d'estimation innovant basé sur les données réelles du marché pour connaître la valeur exacte de votre bien.",
        },
        Feature {
            icon: Icon::Star,
            title: "Service personnalisé",
            description: "Une approche sur mesure pour chaque client, avec un conseiller dédié qui vous accompagne à chaque étape.",
        },
        Feature {
            icon: Icon::MapMarker,
            title: "Couverture nationale",
            description: "Une présence dans toute la France pour vous aider à trouver le bien idéal, où que vous soyez.",
        },
    ]
}

/// Footer link column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterSection {
    pub title: &'static str,
    pub links: [&'static str; 4],
}

#[must_use]
pub const fn footer_sections() -> [FooterSection; 3] {
    [
        FooterSection {
            title: "À propos",
            links: ["Notre histoire", "Notre équipe", "Carrières", "Témoignages"],
        },
        FooterSection {
            title: "Services",
            links: ["Acheter", "Vendre", "Estimer", "Investir"],
        },
        FooterSection {
            title: "Assistance",
            links: ["FAQ", "Contact", "Mentions légales", "Politique de confidentialité"],
        },
    ]
}

#[must_use]
pub const fn social_icons() -> [Icon; 4] {
    [Icon::Facebook, Icon::Twitter, Icon::Instagram, Icon::LinkedIn]
}

/// Agency contact block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactDetails {
    pub street: &'static str,
    pub city: &'static str,
    pub phones: [&'static str; 2],
    pub emails: [&'static str; 2],
    pub hours: [&'static str; 3],
}

#[must_use]
pub const fn contact_details() -> ContactDetails {
    ContactDetails {
        street: "123 Avenue des Champs-Élysées",
        city: "75008 Paris, France",
        phones: ["+33 1 23 45 67 89", "+33 1 98 76 54 32"],
        emails: ["contact@immoprestige.fr", "info@immoprestige.fr"],
        hours: [
            "Lundi - Vendredi: 9h00 - 18h30",
            "Samedi: 10h00 - 17h00",
            "Dimanche: Fermé",
        ],
    }
}

/// Copyright line for the footer
#[must_use]
pub fn copyright(year: i32) -> String {
    format!("© {year} {AGENCY_NAME}. Tous droits réservés.")
}
