//! Button binding: debounced edge source wired to the override slot.

use embassy_time::Instant;

use crate::debounce::EdgeFilter;
use crate::override_state::{ColorOverride, OverrideColor};

/// One push button: a debounce filter plus the override it activates.
///
/// Register [`Button::on_falling_edge`] as the pin's falling-edge
/// interrupt handler body. `const fn` constructible so both buttons can
/// live in `static`s next to the shared [`ColorOverride`].
pub struct Button<'a> {
    filter: EdgeFilter,
    target: &'a ColorOverride,
    color: OverrideColor,
}

impl<'a> Button<'a> {
    pub const fn new(color: OverrideColor, target: &'a ColorOverride) -> Self {
        Self {
            filter: EdgeFilter::new(),
            target,
            color,
        }
    }

    /// Handle a raw falling edge observed at `now` (interrupt context).
    ///
    /// Returns `true` when the edge survived debouncing. An accepted
    /// edge tries to activate the override; if one is already running
    /// the activation is silently dropped.
    pub fn on_falling_edge(&self, now: Instant) -> bool {
        if !self.filter.accept(now) {
            return false;
        }
        let _activated = self.target.try_activate(self.color, now);
        #[cfg(feature = "esp32-log")]
        if _activated {
            esp_println::println!("switch pressed ({})", self.color.as_str());
        }
        true
    }
}
