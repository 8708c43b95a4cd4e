//! Blink timing and the resting/closed opacities of the animated icon parts.

use rand::Rng;
use std::time::Duration;

/// Eyelid opacity while the eye is open (the lid is invisible).
pub const EYELID_OPEN: f64 = 0.0;
/// Eyelid opacity while the eye is shut.
pub const EYELID_CLOSED: f64 = 1.0;
/// Lens brightness factor at rest.
pub const LENS_BRIGHT: f64 = 1.0;
/// Lens brightness factor mid-blink.
pub const LENS_DIMMED: f64 = 0.2;

pub const DEFAULT_PERIOD_MS: u32 = 2_000;
pub const DEFAULT_CLOSED_MIN_MS: u32 = 160;
pub const DEFAULT_CLOSED_MAX_MS: u32 = 220;

/// Which icon part a blink animates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlinkTarget {
    /// The eyelid over the eye icon, used while the password is masked.
    Eyelid,
    /// Both binocular lenses, used while the password is shown.
    Lenses,
}

/// Timing of the blink cycle. The closed window is half-open: `[min, max)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlinkTiming {
    period_ms: u32,
    closed_min_ms: u32,
    closed_max_ms: u32,
}

impl Default for BlinkTiming {
    fn default() -> Self {
        Self {
            period_ms: DEFAULT_PERIOD_MS,
            closed_min_ms: DEFAULT_CLOSED_MIN_MS,
            closed_max_ms: DEFAULT_CLOSED_MAX_MS,
        }
    }
}

impl BlinkTiming {
    /// Builds a timing, returning `None` for a zero period or an empty closed window.
    #[must_use]
    pub fn new(period_ms: u32, closed_min_ms: u32, closed_max_ms: u32) -> Option<Self> {
        if period_ms == 0 || closed_min_ms >= closed_max_ms {
            return None;
        }
        Some(Self {
            period_ms,
            closed_min_ms,
            closed_max_ms,
        })
    }

    /// Delay between the end of one blink and the start of the next.
    #[must_use]
    pub fn period(&self) -> Duration {
        Duration::from_millis(u64::from(self.period_ms))
    }

    #[must_use]
    pub fn closed_min_ms(&self) -> u32 {
        self.closed_min_ms
    }

    #[must_use]
    pub fn closed_max_ms(&self) -> u32 {
        self.closed_max_ms
    }

    /// Samples how long the next blink keeps the icon closed.
    pub fn sample_closed<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let millis = rng.gen_range(self.closed_min_ms..self.closed_max_ms);
        Duration::from_millis(u64::from(millis))
    }
}
