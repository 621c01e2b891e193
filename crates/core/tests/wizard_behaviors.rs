//! Behavioral tests for the estimator wizard

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::cell::RefCell;
use std::time::Duration;

use async_trait::async_trait;
use immo_core::config::EstimatorConfig;
use immo_core::estimator::{
    Condition, ConstructionEra, Estimator, FieldUpdate, FormField, NoDelay, Sleep,
};
use immo_core::models::Category;
use immo_core::{Estimate, EstimatorWizard, WizardError, WizardPhase, WizardStep};

/// Records every requested delay instead of waiting.
#[derive(Default)]
struct RecordingSleep {
    calls: RefCell<Vec<Duration>>,
}

#[async_trait(?Send)]
impl Sleep for RecordingSleep {
    async fn sleep(&self, duration: Duration) {
        self.calls.borrow_mut().push(duration);
    }
}

fn fill(wizard: &mut EstimatorWizard, updates: Vec<FieldUpdate>) {
    for update in updates {
        wizard.update(update).expect("updates accepted on input steps");
    }
}

fn house_on_step_three() -> EstimatorWizard {
    let mut wizard = EstimatorWizard::new();
    fill(&mut wizard, vec![FieldUpdate::Category(Some(Category::House))]);
    wizard.next().expect("step 1 complete");
    fill(
        &mut wizard,
        vec![
            FieldUpdate::Address("4 rue du Port, Nantes".into()),
            FieldUpdate::Surface("100".into()),
            FieldUpdate::Rooms("5".into()),
        ],
    );
    wizard.next().expect("step 2 complete");
    fill(
        &mut wizard,
        vec![
            FieldUpdate::Construction(Some(ConstructionEra::New)),
            FieldUpdate::Condition(Some(Condition::Excellent)),
        ],
    );
    wizard
}

// ============================================================================
// NAVIGATION BEHAVIORS
// ============================================================================

#[test]
fn given_no_category_when_next_then_stays_on_step_one() {
    // Given
    let mut wizard = EstimatorWizard::new();

    // When
    let result = wizard.next();

    // Then
    assert!(matches!(result, Err(WizardError::StepIncomplete { step: WizardStep::Property, .. })));
    assert_eq!(wizard.phase(), WizardPhase::Step(WizardStep::Property));
}

#[test]
fn given_blank_address_when_next_then_stays_on_step_two() {
    // Given
    let mut wizard = EstimatorWizard::new();
    fill(&mut wizard, vec![FieldUpdate::Category(Some(Category::Studio))]);
    wizard.next().unwrap();
    fill(
        &mut wizard,
        vec![
            FieldUpdate::Address("   ".into()),
            FieldUpdate::Surface("30".into()),
            FieldUpdate::Rooms("1".into()),
        ],
    );

    // When
    let result = wizard.next();

    // Then
    assert_eq!(result.unwrap_err().missing_fields(), &[FormField::Address]);
    assert_eq!(wizard.progress_step(), WizardStep::Location);
}

#[test]
fn given_blank_surface_and_rooms_when_next_then_stays_on_step_two() {
    // Given
    let mut wizard = EstimatorWizard::new();
    fill(&mut wizard, vec![FieldUpdate::Category(Some(Category::Apartment))]);
    wizard.next().unwrap();
    fill(
        &mut wizard,
        vec![
            FieldUpdate::Address("25 Rue des Lilas, Lyon".into()),
            FieldUpdate::Surface(" ".into()),
            FieldUpdate::Rooms(String::new()),
        ],
    );

    // When
    let result = wizard.next();

    // Then
    assert_eq!(
        result.unwrap_err().missing_fields(),
        &[FormField::Surface, FormField::Rooms]
    );
    assert_eq!(wizard.phase(), WizardPhase::Step(WizardStep::Location));
}

#[test]
fn given_step_three_when_previous_twice_then_back_on_step_one_with_values() {
    // Given
    let mut wizard = house_on_step_three();

    // When
    wizard.previous().unwrap();
    wizard.previous().unwrap();

    // Then
    assert_eq!(wizard.phase(), WizardPhase::Step(WizardStep::Property));
    assert_eq!(wizard.form().category(), Some(Category::House));
    assert_eq!(wizard.form().rooms(), "5");
}

// ============================================================================
// ESTIMATION BEHAVIORS
// ============================================================================

#[tokio::test]
async fn given_reference_house_when_estimated_then_value_is_437500() {
    // Given
    let mut wizard = house_on_step_three();
    let estimator = Estimator::default();

    // When
    let estimate = wizard.submit_and_estimate(&estimator, &NoDelay).await.unwrap();

    // Then
    assert_eq!(estimate, Estimate::new(437_500));
    assert_eq!(wizard.result(), Some(Estimate::new(437_500)));
    assert_eq!(estimate.to_string(), "437 500 €");
}

#[tokio::test]
async fn given_surface_too_long_for_i64_when_estimated_then_value_saturates_instead_of_zero() {
    // Given
    let mut wizard = EstimatorWizard::new();
    fill(&mut wizard, vec![FieldUpdate::Category(Some(Category::Loft))]);
    wizard.next().unwrap();
    fill(
        &mut wizard,
        vec![
            FieldUpdate::Address("8 Place de la République, Bordeaux".into()),
            FieldUpdate::Surface("12345678901234567890".into()),
            FieldUpdate::Rooms("2".into()),
        ],
    );
    wizard.next().unwrap();
    fill(
        &mut wizard,
        vec![
            FieldUpdate::Construction(Some(ConstructionEra::Before1950)),
            FieldUpdate::Condition(Some(Condition::Good)),
        ],
    );

    // When
    let estimate = wizard
        .submit_and_estimate(&Estimator::default(), &NoDelay)
        .await
        .unwrap();

    // Then
    assert_eq!(estimate, Estimate::new(i64::MAX));
}

#[tokio::test]
async fn given_configured_delay_when_estimating_then_sleeps_exactly_once() {
    // Given
    let mut wizard = house_on_step_three();
    let estimator = Estimator::new(EstimatorConfig::default().with_delay(Duration::from_millis(1500)));
    let sleeper = RecordingSleep::default();

    // When
    wizard.submit_and_estimate(&estimator, &sleeper).await.unwrap();

    // Then
    assert_eq!(*sleeper.calls.borrow(), vec![Duration::from_millis(1500)]);
}

#[test]
fn given_estimating_when_next_then_refused_without_change() {
    // Given
    let mut wizard = house_on_step_three();
    wizard.submit().unwrap();
    let before = wizard.clone();

    // When
    let result = wizard.next();

    // Then
    assert!(matches!(result, Err(WizardError::NotAllowed { .. })));
    assert_eq!(wizard, before);
}

#[test]
fn given_decimal_and_text_inputs_when_submitted_then_parsed_leniently() {
    // Given
    let mut wizard = EstimatorWizard::new();
    fill(&mut wizard, vec![FieldUpdate::Category(Some(Category::Loft))]);
    wizard.next().unwrap();
    fill(
        &mut wizard,
        vec![
            FieldUpdate::Address("Bordeaux".into()),
            FieldUpdate::Surface("80.5".into()),
            FieldUpdate::Rooms("trois".into()),
        ],
    );
    wizard.next().unwrap();
    fill(
        &mut wizard,
        vec![
            FieldUpdate::Construction(Some(ConstructionEra::Before1950)),
            FieldUpdate::Condition(Some(Condition::ToRenovate)),
        ],
    );

    // When
    let input = wizard.submit().unwrap();

    // Then
    assert_eq!(input.surface_m2, 80);
    assert_eq!(input.rooms, 1);
    assert_eq!(Estimator::default().estimate(&input), Estimate::new(294_000));
}

// ============================================================================
// RESET BEHAVIORS
// ============================================================================

#[tokio::test]
async fn given_result_when_new_estimate_then_step_one_and_form_cleared() {
    // Given
    let mut wizard = house_on_step_three();
    wizard
        .submit_and_estimate(&Estimator::default(), &NoDelay)
        .await
        .unwrap();

    // When
    wizard.reset().unwrap();

    // Then
    assert_eq!(wizard.phase(), WizardPhase::Step(WizardStep::Property));
    assert!(wizard.form().is_empty());
    assert_eq!(wizard.result(), None);
}

#[test]
fn given_wizard_when_serialized_then_form_and_phase_survive() {
    // Given
    let wizard = house_on_step_three();

    // When
    let json = serde_json::to_string(&wizard).unwrap();
    let restored: EstimatorWizard = serde_json::from_str(&json).unwrap();

    // Then
    assert_eq!(restored, wizard);
}
