//! Interrupt-driven color override.
//!
//! A button press temporarily replaces the humidity-driven color with a
//! fixed override color. The state is written only from interrupt context
//! (`try_activate`) and read-and-expired only from the main loop (`poll`);
//! both sides go through a short critical section, so a handler firing
//! between any two main-loop instructions always sees a consistent slot.

use core::cell::RefCell;

use critical_section::Mutex;
use embassy_time::{Duration, Instant};

use crate::color::{COLOR_CYAN, COLOR_PINK, Color};

/// How long an accepted press keeps its override color on the display.
pub const OVERRIDE_DURATION: Duration = Duration::from_millis(2000);

/// Which override color a button requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverrideColor {
    /// Right switch.
    Cyan,
    /// Left switch.
    Pink,
}

impl OverrideColor {
    /// Display color for this override.
    pub const fn color(self) -> Color {
        match self {
            Self::Cyan => COLOR_CYAN,
            Self::Pink => COLOR_PINK,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cyan => "cyan",
            Self::Pink => "pink",
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct ActiveOverride {
    color: OverrideColor,
    started_at: Instant,
}

/// Shared override slot: `None` while inactive.
///
/// Inactive state carries no color or timestamp at all, so stale values
/// can never be read. `const fn` constructible for `static` placement.
pub struct ColorOverride {
    duration: Duration,
    state: Mutex<RefCell<Option<ActiveOverride>>>,
}

impl ColorOverride {
    /// Create an inactive override slot with the default 2000 ms duration.
    pub const fn new() -> Self {
        Self::with_duration(OVERRIDE_DURATION)
    }

    /// Create an inactive override slot with a custom duration.
    pub const fn with_duration(duration: Duration) -> Self {
        Self {
            duration,
            state: Mutex::new(RefCell::new(None)),
        }
    }

    /// Activate the override from interrupt context.
    ///
    /// Only takes effect while inactive; a press while an override is
    /// already running is ignored, whichever button it came from
    /// (first press wins until expiry). Returns whether activation
    /// happened.
    pub fn try_activate(&self, color: OverrideColor, now: Instant) -> bool {
        critical_section::with(|cs| {
            let mut state = self.state.borrow(cs).borrow_mut();
            if state.is_some() {
                return false;
            }
            *state = Some(ActiveOverride {
                color,
                started_at: now,
            });
            true
        })
    }

    /// Poll the override from the main loop.
    ///
    /// Returns the color to render while active, `None` otherwise.
    /// The call that first observes the elapsed time reaching the
    /// override duration clears the slot but still returns the color,
    /// so the final frame shows the override one last time.
    ///
    /// A handler can activate between the main loop sampling `now` and
    /// this call, leaving `started_at` newer than `now`; such an
    /// override counts as zero elapsed time.
    pub fn poll(&self, now: Instant) -> Option<Color> {
        critical_section::with(|cs| {
            let mut state = self.state.borrow(cs).borrow_mut();
            let active = (*state)?;
            let elapsed = now.checked_duration_since(active.started_at);
            if elapsed.is_some_and(|elapsed| elapsed >= self.duration) {
                *state = None;
                #[cfg(feature = "esp32-log")]
                esp_println::println!("override ended");
            }
            Some(active.color.color())
        })
    }

    /// Whether an override is currently running.
    pub fn is_active(&self) -> bool {
        critical_section::with(|cs| self.state.borrow(cs).borrow().is_some())
    }
}

impl Default for ColorOverride {
    fn default() -> Self {
        Self::new()
    }
}
