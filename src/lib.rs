#![no_std]

pub mod button;
pub mod clock;
pub mod color;
pub mod controller;
pub mod debounce;
pub mod display;
pub mod override_state;
pub mod policy;
pub mod sensor;

pub use button::Button;
pub use clock::WrappingClock;
pub use color::{Color, DUTY_MAX};
pub use controller::{Controller, ControllerConfig, CycleOutcome};
pub use debounce::{DEBOUNCE_WINDOW, EdgeFilter};
pub use display::{BUZZER_ON_DUTY, Buzzer, Display, PwmOutput, RgbOutput, SETTLE_PAUSE};
pub use override_state::{ColorOverride, OVERRIDE_DURATION, OverrideColor};
pub use policy::{HumidityBand, color_for_humidity};
pub use sensor::{HumiditySensor, Reading, SensorError};

pub use embassy_time::{Duration, Instant};
