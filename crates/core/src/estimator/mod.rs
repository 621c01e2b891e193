//! Property value estimator: form, wizard state machine and valuation.

pub mod estimate;
pub mod form;
pub mod wizard;

pub use estimate::{parse_leading_int, Estimate, EstimateInput, Estimator, NoDelay, Sleep};
pub use form::{Condition, ConstructionEra, EstimatorForm, FieldUpdate, FormField};
pub use wizard::{EstimatorWizard, WizardPhase, WizardStep};
