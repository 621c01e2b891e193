//! Three-step estimator wizard.
//!
//! ```text
//! Step 1 --next--> Step 2 --next--> Step 3 --submit--> Estimating --complete--> Result
//!        <--prev--        <--prev--                                             |
//!   ^------------------------------- reset (form cleared) ----------------------+
//! ```
//!
//! Every method either applies its transition or returns a [`WizardError`]
//! and leaves the wizard exactly as it was.

use serde::{Deserialize, Serialize};

use super::estimate::{Estimate, EstimateInput, Estimator, Sleep};
use super::form::{EstimatorForm, FieldUpdate, FormField};
use crate::error::WizardError;

/// One of the three input steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WizardStep {
    /// Category selection
    Property,
    /// Address, surface and rooms
    Location,
    /// Construction era and condition
    Details,
}

impl WizardStep {
    pub const ALL: [Self; 3] = [Self::Property, Self::Location, Self::Details];

    /// 1-based position
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Property => 1,
            Self::Location => 2,
            Self::Details => 3,
        }
    }

    /// Fields that must be filled before leaving this step forward
    #[must_use]
    pub const fn required_fields(self) -> &'static [FormField] {
        match self {
            Self::Property => &[FormField::Category],
            Self::Location => &[FormField::Address, FormField::Surface, FormField::Rooms],
            Self::Details => &[FormField::Construction, FormField::Condition],
        }
    }

    const fn following(self) -> Option<Self> {
        match self {
            Self::Property => Some(Self::Location),
            Self::Location => Some(Self::Details),
            Self::Details => None,
        }
    }

    const fn preceding(self) -> Option<Self> {
        match self {
            Self::Property => None,
            Self::Location => Some(Self::Property),
            Self::Details => Some(Self::Location),
        }
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Where the wizard currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardPhase {
    Step(WizardStep),
    Estimating,
    Result(Estimate),
}

impl WizardPhase {
    const fn describe(self) -> &'static str {
        match self {
            Self::Step(WizardStep::Property) => "on step 1",
            Self::Step(WizardStep::Location) => "on step 2",
            Self::Step(WizardStep::Details) => "on step 3",
            Self::Estimating => "estimating",
            Self::Result(_) => "showing a result",
        }
    }
}

/// Estimator session: phase plus the form being filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimatorWizard {
    phase: WizardPhase,
    form: EstimatorForm,
}

impl Default for EstimatorWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl EstimatorWizard {
    /// Fresh session on step 1 with an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: WizardPhase::Step(WizardStep::Property),
            form: EstimatorForm::default(),
        }
    }

    #[must_use]
    pub const fn phase(&self) -> WizardPhase {
        self.phase
    }

    #[must_use]
    pub const fn form(&self) -> &EstimatorForm {
        &self.form
    }

    /// Step shown by the progress indicator; stays on 3 while estimating and
    /// on the result screen.
    #[must_use]
    pub const fn progress_step(&self) -> WizardStep {
        match self.phase {
            WizardPhase::Step(step) => step,
            WizardPhase::Estimating | WizardPhase::Result(_) => WizardStep::Details,
        }
    }

    #[must_use]
    pub const fn result(&self) -> Option<Estimate> {
        match self.phase {
            WizardPhase::Result(estimate) => Some(estimate),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_estimating(&self) -> bool {
        matches!(self.phase, WizardPhase::Estimating)
    }

    fn current_step(&self, action: &'static str) -> Result<WizardStep, WizardError> {
        match self.phase {
            WizardPhase::Step(step) => Ok(step),
            other => Err(WizardError::not_allowed(action, other.describe())),
        }
    }

    fn ensure_complete(&self, step: WizardStep) -> Result<(), WizardError> {
        let missing = self.form.missing(step.required_fields());
        if missing.is_empty() {
            Ok(())
        } else {
            Err(WizardError::StepIncomplete { step, missing })
        }
    }

    /// Edit one field. Only accepted while on an input step.
    ///
    /// # Errors
    ///
    /// [`WizardError::NotAllowed`] while estimating or showing a result.
    pub fn update(&mut self, update: FieldUpdate) -> Result<(), WizardError> {
        self.current_step("update")?;
        self.form.apply(update);
        Ok(())
    }

    /// Advance to the next input step.
    ///
    /// # Errors
    ///
    /// [`WizardError::StepIncomplete`] if the current step has blank fields;
    /// [`WizardError::NotAllowed`] on step 3 (use [`Self::submit`]) or
    /// outside the input steps.
    pub fn next(&mut self) -> Result<WizardStep, WizardError> {
        let step = self.current_step("next")?;
        let target = step
            .following()
            .ok_or_else(|| WizardError::not_allowed("next", self.phase.describe()))?;
        self.ensure_complete(step)?;
        self.phase = WizardPhase::Step(target);
        tracing::debug!(from = %step, to = %target, "wizard advanced");
        Ok(target)
    }

    /// Go back one input step. Entered values are kept.
    ///
    /// # Errors
    ///
    /// [`WizardError::NotAllowed`] on step 1 or outside the input steps.
    pub fn previous(&mut self) -> Result<WizardStep, WizardError> {
        let step = self.current_step("previous")?;
        let target = step
            .preceding()
            .ok_or_else(|| WizardError::not_allowed("previous", self.phase.describe()))?;
        self.phase = WizardPhase::Step(target);
        tracing::debug!(from = %step, to = %target, "wizard went back");
        Ok(target)
    }

    /// Submit from step 3 and enter the estimating phase.
    ///
    /// Returns the interpreted inputs for the estimator.
    ///
    /// # Errors
    ///
    /// [`WizardError::StepIncomplete`] if any step's fields are blank;
    /// [`WizardError::NotAllowed`] anywhere but step 3.
    pub fn submit(&mut self) -> Result<EstimateInput, WizardError> {
        let step = self.current_step("submit")?;
        if step != WizardStep::Details {
            return Err(WizardError::not_allowed("submit", self.phase.describe()));
        }
        for s in WizardStep::ALL {
            self.ensure_complete(s)?;
        }
        let input = EstimateInput::from_form(&self.form)
            .ok_or_else(|| WizardError::not_allowed("submit", "selections are missing"))?;
        self.phase = WizardPhase::Estimating;
        tracing::info!(category = %input.category, surface = input.surface_m2, rooms = input.rooms, "estimation requested");
        Ok(input)
    }

    /// Record the estimate once the delay has elapsed.
    ///
    /// # Errors
    ///
    /// [`WizardError::NotAllowed`] unless estimating.
    pub fn complete(&mut self, estimate: Estimate) -> Result<Estimate, WizardError> {
        if !self.is_estimating() {
            return Err(WizardError::not_allowed("complete", self.phase.describe()));
        }
        self.phase = WizardPhase::Result(estimate);
        tracing::info!(euros = estimate.euros(), "estimation completed");
        Ok(estimate)
    }

    /// Start a new estimate: back to step 1 with a cleared form.
    ///
    /// # Errors
    ///
    /// [`WizardError::NotAllowed`] unless a result is shown.
    pub fn reset(&mut self) -> Result<(), WizardError> {
        if self.result().is_none() {
            return Err(WizardError::not_allowed("reset", self.phase.describe()));
        }
        *self = Self::new();
        tracing::debug!("wizard reset");
        Ok(())
    }

    /// Submit, wait for the estimator and record the result.
    ///
    /// Holds `&mut self` across the delay. A reactive front end that must
    /// stay responsive, or abort the delay on teardown, calls
    /// [`Self::submit`], [`Estimator::run`] and [`Self::complete`] separately.
    ///
    /// # Errors
    ///
    /// Any error from [`Self::submit`]; the wizard is unchanged in that case.
    pub async fn submit_and_estimate<S: Sleep + ?Sized>(
        &mut self,
        estimator: &Estimator,
        sleeper: &S,
    ) -> Result<Estimate, WizardError> {
        let input = self.submit()?;
        let estimate = estimator.run(sleeper, input).await;
        self.complete(estimate)
    }
}
