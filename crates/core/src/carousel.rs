//! Testimonial carousel controller.
//!
//! A cyclic index over `len` slides with an auto-advance countdown. Time is
//! supplied by the caller through [`Carousel::elapse`], so the browser timer
//! and the tests drive the same logic.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::result::Result;

/// Direction of the most recent index change, used to pick the slide animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    /// +1 for forward, -1 for backward
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Carousel {
    len: usize,
    index: usize,
    direction: Direction,
    interval: Duration,
    idle: Duration,
}

impl Carousel {
    /// Start on the first slide.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCarousel`] when `len` is zero.
    pub fn new(len: usize, interval: Duration) -> Result<Self> {
        if len == 0 {
            return Err(Error::EmptyCarousel);
        }
        Ok(Self {
            len,
            index: 0,
            direction: Direction::Forward,
            interval,
            idle: Duration::ZERO,
        })
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always false; an empty carousel cannot be built.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Remaining time before the next automatic advance.
    #[must_use]
    pub fn time_until_advance(&self) -> Duration {
        self.interval.saturating_sub(self.idle)
    }

    fn move_to(&mut self, index: usize, direction: Direction) {
        self.index = index;
        self.direction = direction;
        self.idle = Duration::ZERO;
    }

    /// Show the following slide, wrapping to the first.
    pub fn next(&mut self) -> usize {
        let index = (self.index + 1) % self.len;
        self.move_to(index, Direction::Forward);
        tracing::debug!(index, "carousel next");
        index
    }

    /// Show the preceding slide, wrapping to the last.
    pub fn previous(&mut self) -> usize {
        let index = (self.index + self.len - 1) % self.len;
        self.move_to(index, Direction::Backward);
        tracing::debug!(index, "carousel previous");
        index
    }

    /// Jump to a slide. Selecting the current slide changes nothing and
    /// keeps the countdown running.
    ///
    /// # Errors
    ///
    /// [`Error::SlideOutOfRange`] when `index >= len`.
    pub fn select(&mut self, index: usize) -> Result<usize> {
        if index >= self.len {
            return Err(Error::SlideOutOfRange {
                index,
                len: self.len,
            });
        }
        if index != self.index {
            let direction = if index > self.index {
                Direction::Forward
            } else {
                Direction::Backward
            };
            self.move_to(index, direction);
            tracing::debug!(index, "carousel select");
        }
        Ok(index)
    }

    /// Let `dt` pass. Returns how many automatic advances fired, saturating
    /// at `u32::MAX`.
    ///
    /// Idle time saturates at `Duration::MAX`, so any `dt` is accepted.
    pub fn elapse(&mut self, dt: Duration) -> u32 {
        let interval = self.interval.as_nanos();
        if interval == 0 {
            return 0;
        }
        let idle = self.idle.saturating_add(dt);
        let cycles = idle.as_nanos() / interval;
        if cycles == 0 {
            self.idle = idle;
            return 0;
        }
        let steps = usize::try_from(cycles % self.len as u128).unwrap_or(0);
        let index = (self.index + steps) % self.len;
        self.move_to(index, Direction::Forward);
        self.idle = nanos_to_duration(idle.as_nanos() % interval);
        let fired = u32::try_from(cycles).unwrap_or(u32::MAX);
        tracing::debug!(index, fired, "carousel auto-advance");
        fired
    }
}

/// Rebuild a duration from a nanosecond count below some `Duration`.
fn nanos_to_duration(nanos: u128) -> Duration {
    const NANOS_PER_SEC: u128 = 1_000_000_000;
    let secs = u64::try_from(nanos / NANOS_PER_SEC).unwrap_or(u64::MAX);
    let subsec = u32::try_from(nanos % NANOS_PER_SEC).unwrap_or(0);
    Duration::new(secs, subsec)
}
