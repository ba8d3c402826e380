//! Wraparound-safe monotonic clock adapter.
//!
//! Many platforms expose milliseconds as a wrapping 32-bit counter.
//! [`WrappingClock`] extends such a counter into the 64-bit [`Instant`]
//! domain by detecting wrap inside a critical section, so interrupt
//! handlers and the main loop share one monotonic timeline and the
//! difference of two instants is always correct across counter overflow.

use core::cell::RefCell;

use critical_section::Mutex;
use embassy_time::Instant;

#[derive(Debug, Clone, Copy, Default)]
struct ExtendState {
    last_raw: u32,
    wraps: u32,
}

/// Extends a wrapping 32-bit millisecond counter into [`Instant`]s.
pub struct WrappingClock<F: Fn() -> u32> {
    raw: F,
    state: Mutex<RefCell<ExtendState>>,
}

impl<F: Fn() -> u32> WrappingClock<F> {
    /// Create a clock over a raw counter read.
    ///
    /// `raw` must be callable from both interrupt and thread context.
    /// The counter must be sampled at least once per wrap period
    /// (~49.7 days at millisecond resolution) for wrap detection to
    /// hold; the control loop's cadence satisfies this by many orders
    /// of magnitude.
    pub const fn new(raw: F) -> Self {
        Self {
            raw,
            state: Mutex::new(RefCell::new(ExtendState {
                last_raw: 0,
                wraps: 0,
            })),
        }
    }

    /// Current time as a monotonic instant.
    pub fn now(&self) -> Instant {
        critical_section::with(|cs| {
            let raw = (self.raw)();
            let mut state = self.state.borrow(cs).borrow_mut();
            if raw < state.last_raw {
                // Counter wrapped since the previous sample.
                state.wraps += 1;
            }
            state.last_raw = raw;
            Instant::from_millis((u64::from(state.wraps) << 32) | u64::from(raw))
        })
    }
}
