//! Debounced edge source for push-button interrupts.
//!
//! Converts noisy falling-edge interrupts into clean activation events,
//! at most one per debounce window. State is guarded by `critical-section`
//! so an interrupt handler and the main loop observe it atomically.

use core::cell::RefCell;

use critical_section::Mutex;
use embassy_time::{Duration, Instant};

/// Minimum time between accepted edges on one button.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(200);

/// Filters raw falling edges down to accepted activation events.
///
/// Each physical button gets its own filter; filters share no state.
/// `const fn` constructible, so a filter can live in a `static` and be
/// called from interrupt context.
pub struct EdgeFilter {
    window: Duration,
    last_accepted: Mutex<RefCell<Option<Instant>>>,
}

impl EdgeFilter {
    /// Create a filter with the default 200 ms window.
    pub const fn new() -> Self {
        Self::with_window(DEBOUNCE_WINDOW)
    }

    /// Create a filter with a custom debounce window.
    pub const fn with_window(window: Duration) -> Self {
        Self {
            window,
            last_accepted: Mutex::new(RefCell::new(None)),
        }
    }

    /// Feed a raw falling edge observed at `now`.
    ///
    /// Returns `true` when the edge is accepted. The very first edge is
    /// always accepted; afterwards an edge passes only when at least the
    /// debounce window has elapsed since the last accepted edge.
    /// Rejected edges leave the filter untouched.
    pub fn accept(&self, now: Instant) -> bool {
        critical_section::with(|cs| {
            let mut last = self.last_accepted.borrow(cs).borrow_mut();
            match *last {
                Some(prev) if now.duration_since(prev) < self.window => false,
                _ => {
                    *last = Some(now);
                    true
                }
            }
        })
    }
}

impl Default for EdgeFilter {
    fn default() -> Self {
        Self::new()
    }
}
