//! Estimator form state and field updates

use serde::{Deserialize, Serialize};

use crate::models::Category;

/// Construction period buckets offered by the third step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstructionEra {
    Before1950,
    From1950To1980,
    From1980To2000,
    After2000,
    New,
}

impl ConstructionEra {
    pub const ALL: [Self; 5] = [
        Self::Before1950,
        Self::From1950To1980,
        Self::From1980To2000,
        Self::After2000,
        Self::New,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Before1950 => "Avant 1950",
            Self::From1950To1980 => "1950-1980",
            Self::From1980To2000 => "1980-2000",
            Self::After2000 => "Après 2000",
            Self::New => "Neuf",
        }
    }

    /// Parse a display label; the empty "Sélectionner" option yields `None`.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.label() == label)
    }
}

/// Condition buckets offered by the third step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    ToRenovate,
    Fair,
    Good,
    VeryGood,
    Excellent,
}

impl Condition {
    pub const ALL: [Self; 5] = [
        Self::ToRenovate,
        Self::Fair,
        Self::Good,
        Self::VeryGood,
        Self::Excellent,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ToRenovate => "À rénover",
            Self::Fair => "Correct",
            Self::Good => "Bon état",
            Self::VeryGood => "Très bon état",
            Self::Excellent => "Excellent état",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

/// Names of the form's inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Category,
    Address,
    Surface,
    Rooms,
    Construction,
    Condition,
}

impl FormField {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Address => "address",
            Self::Surface => "surface",
            Self::Rooms => "rooms",
            Self::Construction => "construction",
            Self::Condition => "condition",
        }
    }
}

/// A single edit to the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldUpdate {
    Category(Option<Category>),
    Address(String),
    Surface(String),
    Rooms(String),
    Construction(Option<ConstructionEra>),
    Condition(Option<Condition>),
}

/// Values entered so far.
///
/// Text inputs keep exactly what the visitor typed; interpretation happens
/// at submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimatorForm {
    category: Option<Category>,
    address: String,
    surface: String,
    rooms: String,
    construction: Option<ConstructionEra>,
    condition: Option<Condition>,
}

impl EstimatorForm {
    pub(crate) fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Category(v) => self.category = v,
            FieldUpdate::Address(v) => self.address = v,
            FieldUpdate::Surface(v) => self.surface = v,
            FieldUpdate::Rooms(v) => self.rooms = v,
            FieldUpdate::Construction(v) => self.construction = v,
            FieldUpdate::Condition(v) => self.condition = v,
        }
    }

    /// Whether a field holds a value (text must be non-blank)
    #[must_use]
    pub fn is_filled(&self, field: FormField) -> bool {
        match field {
            FormField::Category => self.category.is_some(),
            FormField::Address => !self.address.trim().is_empty(),
            FormField::Surface => !self.surface.trim().is_empty(),
            FormField::Rooms => !self.rooms.trim().is_empty(),
            FormField::Construction => self.construction.is_some(),
            FormField::Condition => self.condition.is_some(),
        }
    }

    /// Unfilled fields among `fields`, in the given order
    #[must_use]
    pub fn missing(&self, fields: &[FormField]) -> Vec<FormField> {
        fields
            .iter()
            .copied()
            .filter(|f| !self.is_filled(*f))
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    #[must_use]
    pub const fn category(&self) -> Option<Category> {
        self.category
    }

    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    #[must_use]
    pub fn surface(&self) -> &str {
        &self.surface
    }

    #[must_use]
    pub fn rooms(&self) -> &str {
        &self.rooms
    }

    #[must_use]
    pub const fn construction(&self) -> Option<ConstructionEra> {
        self.construction
    }

    #[must_use]
    pub const fn condition(&self) -> Option<Condition> {
        self.condition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_is_empty() {
        let form = EstimatorForm::default();
        assert!(form.is_empty());
        assert_eq!(
            form.missing(&[FormField::Category, FormField::Address]),
            vec![FormField::Category, FormField::Address]
        );
    }

    #[test]
    fn test_blank_text_counts_as_missing() {
        let mut form = EstimatorForm::default();
        form.apply(FieldUpdate::Address("   ".into()));
        assert!(!form.is_filled(FormField::Address));
        form.apply(FieldUpdate::Address("1 rue de Rivoli".into()));
        assert!(form.is_filled(FormField::Address));
    }

    #[test]
    fn test_select_can_be_cleared() {
        let mut form = EstimatorForm::default();
        form.apply(FieldUpdate::Condition(Some(Condition::Good)));
        assert!(form.is_filled(FormField::Condition));
        form.apply(FieldUpdate::Condition(None));
        assert!(!form.is_filled(FormField::Condition));
    }

    #[test]
    fn test_labels_round_trip() {
        for era in ConstructionEra::ALL {
            assert_eq!(ConstructionEra::from_label(era.label()), Some(era));
        }
        for condition in Condition::ALL {
            assert_eq!(Condition::from_label(condition.label()), Some(condition));
        }
        assert_eq!(Condition::from_label(""), None);
    }
}
