//! Indicator color palette.
//!
//! Channel values are 10-bit PWM duty cycles (0–1023), one per primary.

use smart_leds::RGB16;

/// Indicator color: three independent 10-bit intensity channels.
pub type Color = RGB16;

/// Maximum duty value of a single channel.
pub const DUTY_MAX: u16 = 1023;

pub const COLOR_OFF: Color = Color { r: 0, g: 0, b: 0 };
pub const COLOR_WHITE: Color = Color {
    r: 1023,
    g: 1023,
    b: 1023,
};
pub const COLOR_BLUE: Color = Color { r: 0, g: 0, b: 1023 };
pub const COLOR_GREEN: Color = Color { r: 0, g: 1023, b: 0 };
pub const COLOR_YELLOW: Color = Color {
    r: 1023,
    g: 1023,
    b: 0,
};
pub const COLOR_ORANGE: Color = Color { r: 1023, g: 600, b: 0 };
pub const COLOR_RED: Color = Color { r: 1023, g: 0, b: 0 };
pub const COLOR_PURPLE: Color = Color { r: 600, g: 0, b: 600 };
pub const COLOR_CYAN: Color = Color {
    r: 0,
    g: 1023,
    b: 1023,
};
pub const COLOR_PINK: Color = Color {
    r: 1023,
    g: 0,
    b: 1023,
};
