//! View-state to inline style mapping.
//!
//! Components keep a small phase value in a signal and render
//! `style=motion::...(phase).to_css()`; CSS transitions interpolate between
//! the resulting styles.

use std::fmt::Write as _;

use crate::carousel::Direction;
use crate::config::HeroConfig;
use crate::estimator::WizardStep;

/// Brand accent used for active states
pub const ACCENT: &str = "#4A90E2";
/// Neutral fill for inactive step badges
pub const INACTIVE: &str = "#e5e7eb";

/// A resolved set of animatable properties.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionStyle {
    pub opacity: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
    pub background: Option<&'static str>,
    pub transition_ms: u32,
}

impl Default for MotionStyle {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
            scale: 1.0,
            background: None,
            transition_ms: 0,
        }
    }
}

impl MotionStyle {
    #[must_use]
    pub const fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    #[must_use]
    pub const fn with_translate(mut self, x: f64, y: f64) -> Self {
        self.translate_x = x;
        self.translate_y = y;
        self
    }

    #[must_use]
    pub const fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub const fn with_background(mut self, background: &'static str) -> Self {
        self.background = Some(background);
        self
    }

    #[must_use]
    pub const fn with_transition_ms(mut self, ms: u32) -> Self {
        self.transition_ms = ms;
        self
    }

    /// Render as an inline `style` attribute value.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut css = format!(
            "opacity: {}; transform: translate({}px, {}px) scale({});",
            self.opacity, self.translate_x, self.translate_y, self.scale
        );
        if let Some(background) = self.background {
            let _ = write!(css, " background-color: {background};");
        }
        if self.transition_ms > 0 {
            let _ = write!(
                css,
                " transition: opacity {ms}ms ease-out, transform {ms}ms ease-out, background-color {ms}ms ease-out;",
                ms = self.transition_ms
            );
        }
        css
    }
}

/// Scroll-into-view reveal of a section or item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reveal {
    #[default]
    Hidden,
    Visible,
}

/// Fade up by 20 px.
#[must_use]
pub fn reveal(phase: Reveal) -> MotionStyle {
    match phase {
        Reveal::Hidden => MotionStyle::default()
            .with_opacity(0.0)
            .with_translate(0.0, 20.0)
            .with_transition_ms(500),
        Reveal::Visible => MotionStyle::default().with_transition_ms(500),
    }
}

/// Property cards rise further than section items.
#[must_use]
pub fn card_reveal(phase: Reveal) -> MotionStyle {
    match phase {
        Reveal::Hidden => MotionStyle::default()
            .with_opacity(0.0)
            .with_translate(0.0, 50.0)
            .with_transition_ms(500),
        Reveal::Visible => MotionStyle::default().with_transition_ms(500),
    }
}

/// Stagger delay for the n-th child of a revealed container.
#[must_use]
pub fn stagger_delay_ms(index: usize) -> u64 {
    u64::try_from(index).map_or(u64::MAX, |i| i.saturating_mul(100))
}

/// Testimonial slide life cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlidePhase {
    Enter,
    Center,
    Exit,
}

/// Slides enter from the side of travel and leave towards the other.
#[must_use]
pub fn slide(phase: SlidePhase, direction: Direction) -> MotionStyle {
    let offset = 300.0 * direction.sign();
    match phase {
        SlidePhase::Enter => MotionStyle::default()
            .with_opacity(0.0)
            .with_translate(offset, 0.0)
            .with_scale(0.9),
        SlidePhase::Center => MotionStyle::default().with_transition_ms(600),
        SlidePhase::Exit => MotionStyle::default()
            .with_opacity(0.0)
            .with_translate(-offset, 0.0)
            .with_scale(0.9)
            .with_transition_ms(400),
    }
}

/// Carousel dot: the current one is enlarged.
#[must_use]
pub fn dot(active: bool) -> MotionStyle {
    let base = MotionStyle::default().with_transition_ms(300);
    if active {
        base.with_scale(1.2).with_background(ACCENT)
    } else {
        base
    }
}

/// Wizard step panel life cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepPhase {
    Initial,
    Animate,
    Exit,
}

#[must_use]
pub fn wizard_step(phase: StepPhase) -> MotionStyle {
    match phase {
        StepPhase::Initial => MotionStyle::default()
            .with_opacity(0.0)
            .with_translate(50.0, 0.0),
        StepPhase::Animate => MotionStyle::default().with_transition_ms(500),
        StepPhase::Exit => MotionStyle::default()
            .with_opacity(0.0)
            .with_translate(-50.0, 0.0)
            .with_transition_ms(300),
    }
}

/// How a progress badge should look relative to the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeState {
    Done,
    Current,
    Upcoming,
}

impl BadgeState {
    #[must_use]
    pub fn of(badge: WizardStep, current: WizardStep) -> Self {
        match badge.cmp(&current) {
            std::cmp::Ordering::Less => Self::Done,
            std::cmp::Ordering::Equal => Self::Current,
            std::cmp::Ordering::Greater => Self::Upcoming,
        }
    }
}

#[must_use]
pub fn step_badge(state: BadgeState) -> MotionStyle {
    let base = MotionStyle::default().with_transition_ms(300);
    match state {
        BadgeState::Done => base.with_background(ACCENT),
        BadgeState::Current => base.with_scale(1.1).with_background(ACCENT),
        BadgeState::Upcoming => base.with_background(INACTIVE),
    }
}

/// Progress bar fill, in percent.
#[must_use]
pub fn progress_percent(step: WizardStep) -> f64 {
    f64::from(step.number()) / 3.0 * 100.0
}

/// Hover lift used by cards and buttons.
#[must_use]
pub fn hover_lift(hovered: bool) -> MotionStyle {
    let base = MotionStyle::default().with_transition_ms(300);
    if hovered {
        base.with_translate(0.0, -10.0)
    } else {
        base
    }
}

/// Hero background offsets for a given scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    pub translate_y: f64,
    pub position_y_percent: f64,
}

impl Parallax {
    #[must_use]
    pub fn to_css(self) -> String {
        format!(
            "transform: translateY({}px); background-position: center {}%;",
            self.translate_y, self.position_y_percent
        )
    }
}

#[must_use]
pub fn parallax(scroll_y: f64, config: &HeroConfig) -> Parallax {
    Parallax {
        translate_y: scroll_y * config.translate_factor,
        position_y_percent: 50.0 + scroll_y * config.position_factor,
    }
}

/// Whether the header switches to its opaque look.
#[must_use]
pub fn header_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Header background for the scrolled and unscrolled looks.
#[must_use]
pub const fn header_css(scrolled: bool) -> &'static str {
    if scrolled {
        "background-color: rgba(125, 125, 125, 0.95); box-shadow: 0px 5px 20px rgba(0, 0, 0, 0.1); transition: all 300ms;"
    } else {
        "background-color: rgba(125, 125, 125, 0); box-shadow: none; transition: all 300ms;"
    }
}
