//! Humidity-to-color mapping.
//!
//! A small ordered band table maps relative humidity to a display color.
//! The mapping is a pure total function; identical input always yields
//! the identical color.

use crate::color::{
    COLOR_BLUE, COLOR_GREEN, COLOR_OFF, COLOR_ORANGE, COLOR_PURPLE, COLOR_RED, COLOR_WHITE,
    COLOR_YELLOW, Color,
};

/// A humidity range mapped to one display color.
///
/// The upper bound is exclusive; bands are evaluated in ascending order.
#[derive(Debug, Clone, Copy)]
pub struct HumidityBand {
    /// Exclusive upper bound in percent relative humidity.
    pub upper_bound: f32,
    /// Color shown while humidity is below the bound.
    pub color: Color,
}

/// Color shown when no band matches (humidity >= 90 %).
pub const CATCH_ALL_COLOR: Color = COLOR_PURPLE;

/// Band table with strictly increasing bounds, covering [0, 90).
pub const BANDS: [HumidityBand; 7] = [
    HumidityBand {
        upper_bound: 30.0,
        color: COLOR_OFF,
    },
    HumidityBand {
        upper_bound: 40.0,
        color: COLOR_WHITE,
    },
    HumidityBand {
        upper_bound: 50.0,
        color: COLOR_BLUE,
    },
    HumidityBand {
        upper_bound: 60.0,
        color: COLOR_GREEN,
    },
    HumidityBand {
        upper_bound: 70.0,
        color: COLOR_YELLOW,
    },
    HumidityBand {
        upper_bound: 80.0,
        color: COLOR_ORANGE,
    },
    HumidityBand {
        upper_bound: 90.0,
        color: COLOR_RED,
    },
];

/// Map relative humidity (percent) to its display color.
pub fn color_for_humidity(humidity: f32) -> Color {
    for band in &BANDS {
        if humidity < band.upper_bound {
            return band.color;
        }
    }
    CATCH_ALL_COLOR
}
