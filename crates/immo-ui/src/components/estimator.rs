//! Online estimator section.
//!
//! The [`EstimatorWizard`] lives in a signal; every button and input maps to
//! one wizard method. Refused transitions are logged at debug level and
//! otherwise ignored, so an incomplete step simply does not move.

use std::time::Duration;

use futures::future::{AbortHandle, Abortable};
use immo_core::content::Section;
use immo_core::estimator::{Condition, ConstructionEra, Estimator, FieldUpdate};
use immo_core::models::Category;
use immo_core::motion::{self, BadgeState, StepPhase};
use immo_core::{Estimate, EstimatorWizard, ResultExt, WizardPhase, WizardStep};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::browser::BrowserSleep;
use crate::components::RevealOnScroll;
use crate::state::use_site;

const STEP_ENTER_DELAY: Duration = Duration::from_millis(20);

#[component]
pub fn EstimatorSection() -> impl IntoView {
    view! {
        <section id=Section::Estimator.id() class="section estimator-section">
            <div class="container narrow">
                <RevealOnScroll class="section-heading">
                    <h2>"Estimez votre bien en ligne"</h2>
                    <p>
                        "Un outil simple et précis pour connaître la valeur de votre propriété en quelques clics"
                    </p>
                </RevealOnScroll>
                <RevealOnScroll>
                    <EstimatorPanel />
                </RevealOnScroll>
            </div>
        </section>
    }
}

#[component]
fn EstimatorPanel() -> impl IntoView {
    let site = use_site();
    let estimator = Estimator::new(site.config.estimator);
    let wizard = RwSignal::new(EstimatorWizard::new());
    let phase = Memo::new(move |_| wizard.with(EstimatorWizard::phase));
    let progress = Memo::new(move |_| wizard.with(EstimatorWizard::progress_step));

    // Pending estimation, aborted if the panel goes away mid-delay.
    let pending = StoredValue::new(None::<AbortHandle>);
    on_cleanup(move || {
        if let Some(handle) = pending.get_value() {
            handle.abort();
        }
    });

    // Slide the new step in from the right whenever the step changes.
    let step_phase = RwSignal::new(StepPhase::Animate);
    Effect::new(move |previous: Option<WizardStep>| {
        let step = progress.get();
        if previous.is_some_and(|p| p != step) {
            step_phase.set(StepPhase::Initial);
            set_timeout(move || step_phase.set(StepPhase::Animate), STEP_ENTER_DELAY);
        }
        step
    });

    let update = move |field: FieldUpdate| {
        wizard.update(|w| {
            w.update(field).ok_logged("field update refused");
        });
    };
    let next = move |_| {
        wizard.update(|w| {
            w.next().ok_logged("next refused");
        });
    };
    let previous = move |_| {
        wizard.update(|w| {
            w.previous().ok_logged("previous refused");
        });
    };
    let reset = move |_| {
        wizard.update(|w| {
            w.reset().ok_logged("reset refused");
        });
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(input) = wizard
            .try_update(EstimatorWizard::submit)
            .and_then(|r| r.ok_logged("submit refused"))
        else {
            return;
        };
        // Not `submit_and_estimate`: the wizard signal must not be held across
        // the delay, and the delay has to be abortable.
        let (handle, registration) = AbortHandle::new_pair();
        pending.set_value(Some(handle));
        spawn_local(async move {
            let run = Abortable::new(estimator.run(&BrowserSleep, input), registration);
            match run.await {
                Ok(estimate) => {
                    wizard.try_update(|w| w.complete(estimate).ok_logged("late estimate dropped"));
                    pending.set_value(None);
                }
                Err(_) => tracing::debug!("estimation aborted"),
            }
        });
    };

    let step_style = move || motion::wizard_step(step_phase.get()).to_css();

    view! {
        <div class="estimator-card">
            <p class="estimator-lead">
                "Obtenez une estimation précise de la valeur de votre propriété en quelques clics"
            </p>
            <ProgressIndicator current=progress />
            <form on:submit=on_submit>
                {move || match phase.get() {
                    WizardPhase::Step(WizardStep::Property) => view! {
                        <div class="wizard-step" style=step_style>
                            <CategoryStep wizard=wizard on_change=update />
                            <button type="button" class="button primary wide" on:click=next>
                                "Suivant"
                            </button>
                        </div>
                    }
                    .into_any(),
                    WizardPhase::Step(WizardStep::Location) => view! {
                        <div class="wizard-step" style=step_style>
                            <LocationStep wizard=wizard on_change=update />
                            <div class="wizard-actions">
                                <button type="button" class="button" on:click=previous>
                                    "Précédent"
                                </button>
                                <button type="button" class="button primary" on:click=next>
                                    "Suivant"
                                </button>
                            </div>
                        </div>
                    }
                    .into_any(),
                    WizardPhase::Step(WizardStep::Details) => view! {
                        <div class="wizard-step" style=step_style>
                            <DetailsStep wizard=wizard on_change=update />
                            <div class="wizard-actions">
                                <button type="button" class="button" on:click=previous>
                                    "Précédent"
                                </button>
                                <button type="submit" class="button primary">
                                    "Estimer"
                                </button>
                            </div>
                        </div>
                    }
                    .into_any(),
                    WizardPhase::Estimating => view! {
                        <div class="wizard-estimating">
                            <div class="spinner"></div>
                            <h3>"Calcul en cours..."</h3>
                            <p>"Nous analysons le marché immobilier dans votre secteur"</p>
                        </div>
                    }
                    .into_any(),
                    WizardPhase::Result(estimate) => view! {
                        <ResultView estimate=estimate on_reset=reset />
                    }
                    .into_any(),
                }}
            </form>
        </div>
    }
}

/// Step badges and the progress bar
#[component]
fn ProgressIndicator(current: Memo<WizardStep>) -> impl IntoView {
    view! {
        <div class="wizard-progress">
            <div class="wizard-badges">
                {WizardStep::ALL
                    .into_iter()
                    .map(|badge| {
                        let state = move || BadgeState::of(badge, current.get());
                        view! {
                            <div
                                class="step-badge"
                                class:upcoming=move || state() == BadgeState::Upcoming
                                style=move || motion::step_badge(state()).to_css()
                            >
                                {move || match state() {
                                    BadgeState::Done => "✓".to_string(),
                                    _ => badge.to_string(),
                                }}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="progress-track">
                <div
                    class="progress-fill"
                    style=move || format!("width: {}%;", motion::progress_percent(current.get()))
                ></div>
            </div>
        </div>
    }
}

#[component]
fn CategoryStep<F>(wizard: RwSignal<EstimatorWizard>, on_change: F) -> impl IntoView
where
    F: Fn(FieldUpdate) + Copy + Send + Sync + 'static,
{
    view! {
        <fieldset class="field">
            <legend>"⌂ Type de bien"</legend>
            <div class="choice-grid">
                {Category::ESTIMABLE
                    .into_iter()
                    .map(|category| {
                        let id = format!("estimate-{}", category.key());
                        view! {
                            <div class="choice">
                                <input
                                    type="radio"
                                    id=id.clone()
                                    name="category"
                                    value=category.key()
                                    prop:checked=move || {
                                        wizard.with(|w| w.form().category() == Some(category))
                                    }
                                    on:change=move |_| on_change(FieldUpdate::Category(Some(category)))
                                />
                                <label for=id>{category.label()}</label>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </fieldset>
    }
}

#[component]
fn LocationStep<F>(wizard: RwSignal<EstimatorWizard>, on_change: F) -> impl IntoView
where
    F: Fn(FieldUpdate) + Copy + Send + Sync + 'static,
{
    view! {
        <div class="field">
            <label for="estimate-address">"⌖ Adresse"</label>
            <input
                id="estimate-address"
                type="text"
                placeholder="Adresse complète"
                prop:value=move || wizard.with(|w| w.form().address().to_string())
                on:input=move |ev| on_change(FieldUpdate::Address(event_target_value(&ev)))
            />
        </div>
        <div class="field-row">
            <div class="field">
                <label for="estimate-surface">"📐 Surface (m²)"</label>
                <input
                    id="estimate-surface"
                    type="number"
                    min="0"
                    placeholder="Surface"
                    prop:value=move || wizard.with(|w| w.form().surface().to_string())
                    on:input=move |ev| on_change(FieldUpdate::Surface(event_target_value(&ev)))
                />
            </div>
            <div class="field">
                <label for="estimate-rooms">"🛏 Nombre de pièces"</label>
                <input
                    id="estimate-rooms"
                    type="number"
                    min="0"
                    placeholder="Pièces"
                    prop:value=move || wizard.with(|w| w.form().rooms().to_string())
                    on:input=move |ev| on_change(FieldUpdate::Rooms(event_target_value(&ev)))
                />
            </div>
        </div>
    }
}

#[component]
fn DetailsStep<F>(wizard: RwSignal<EstimatorWizard>, on_change: F) -> impl IntoView
where
    F: Fn(FieldUpdate) + Copy + Send + Sync + 'static,
{
    view! {
        <div class="field">
            <label for="estimate-construction">"Année de construction"</label>
            <select
                id="estimate-construction"
                prop:value=move || {
                    wizard.with(|w| w.form().construction().map_or("", ConstructionEra::label).to_string())
                }
                on:change=move |ev| {
                    let era = ConstructionEra::from_label(&event_target_value(&ev));
                    on_change(FieldUpdate::Construction(era));
                }
            >
                <option value="">"Sélectionner"</option>
                {ConstructionEra::ALL
                    .into_iter()
                    .map(|era| view! { <option value=era.label()>{era.label()}</option> })
                    .collect_view()}
            </select>
        </div>
        <div class="field">
            <label for="estimate-condition">"État du bien"</label>
            <select
                id="estimate-condition"
                prop:value=move || {
                    wizard.with(|w| w.form().condition().map_or("", Condition::label).to_string())
                }
                on:change=move |ev| {
                    let condition = Condition::from_label(&event_target_value(&ev));
                    on_change(FieldUpdate::Condition(condition));
                }
            >
                <option value="">"Sélectionner"</option>
                {Condition::ALL
                    .into_iter()
                    .map(|c| view! { <option value=c.label()>{c.label()}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}

#[component]
fn ResultView<F>(estimate: Estimate, on_reset: F) -> impl IntoView
where
    F: Fn(leptos::ev::MouseEvent) + Copy + Send + Sync + 'static,
{
    view! {
        <div class="wizard-result">
            <div class="result-check">"✓"</div>
            <h3>"Estimation terminée !"</h3>
            <p>"La valeur estimée de votre bien est :"</p>
            <div class="result-value">
                <p class="amount">{estimate.to_string()}</p>
                <p class="hint">"Estimation approximative"</p>
            </div>
            <p class="result-note">
                "Cette estimation est basée sur les données du marché immobilier actuel et les caractéristiques de votre bien."
            </p>
            <div class="wizard-actions center">
                <button type="button" class="button primary" on:click=on_reset>
                    "Nouvelle estimation"
                </button>
                <a class="button dark" href=Section::Contact.href()>"Contacter un expert"</a>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimator_section_component_exists() {
        let _component = EstimatorSection;
    }
}
