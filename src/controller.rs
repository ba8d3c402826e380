//! Main control loop body.
//!
//! One [`Controller::tick`] call is one loop iteration: read the sensor,
//! resolve the display color (an active override wins over the
//! humidity-driven color), drive the indicator and buzzer. The caller is
//! responsible for sleeping between ticks.

use embassy_time::{Duration, Instant};
use embedded_hal::delay::DelayNs;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::Color;
use crate::display::{Buzzer, Display, PwmOutput, RgbOutput};
use crate::override_state::ColorOverride;
use crate::policy::color_for_humidity;
use crate::sensor::HumiditySensor;

/// Humidity at or above which the buzzer sounds.
pub const ALERT_THRESHOLD: f32 = 80.0;

/// Sleep between loop iterations.
pub const CYCLE_INTERVAL: Duration = Duration::from_millis(2000);

/// Control loop configuration.
#[derive(Debug, Clone, Copy)]
pub struct ControllerConfig {
    /// Buzzer threshold in percent relative humidity (inclusive).
    pub alert_threshold: f32,
    /// Fixed inter-cycle sleep, applied whether or not the read succeeded.
    pub cycle_interval: Duration,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            alert_threshold: ALERT_THRESHOLD,
            cycle_interval: CYCLE_INTERVAL,
        }
    }
}

/// Result of one loop iteration.
#[derive(Debug, Clone, Copy)]
pub struct CycleOutcome {
    /// Color driven to the indicator, `None` when the sensor read failed.
    pub rendered: Option<Color>,
    /// Buzzer decision for this cycle, `None` when the sensor read failed
    /// (the buzzer keeps its previous state).
    pub alert: Option<bool>,
    /// How long to sleep before the next tick.
    pub sleep_duration: Duration,
}

/// The humidity indicator control loop.
///
/// Owns the hardware collaborators (sensor, display, buzzer) and borrows
/// the override slot shared with the button interrupt handlers. There is
/// no global state inside the crate; everything is injected at startup.
///
/// # Usage
///
/// ```ignore
/// static OVERRIDE: ColorOverride = ColorOverride::new();
///
/// let mut controller = Controller::new(sensor, display, buzzer, &OVERRIDE);
///
/// loop {
///     let outcome = controller.tick(clock.now());
///     delay.delay_ms(outcome.sleep_duration.as_millis() as u32);
/// }
/// ```
pub struct Controller<'a, S, O, P, D>
where
    S: HumiditySensor,
    O: RgbOutput,
    P: PwmOutput,
    D: DelayNs,
{
    sensor: S,
    display: Display<O, D>,
    buzzer: Buzzer<P>,
    overrides: &'a ColorOverride,
    config: ControllerConfig,
}

impl<'a, S, O, P, D> Controller<'a, S, O, P, D>
where
    S: HumiditySensor,
    O: RgbOutput,
    P: PwmOutput,
    D: DelayNs,
{
    /// Create a controller with default thresholds and timing.
    pub fn new(
        sensor: S,
        display: Display<O, D>,
        buzzer: Buzzer<P>,
        overrides: &'a ColorOverride,
    ) -> Self {
        Self::with_config(sensor, display, buzzer, overrides, ControllerConfig::default())
    }

    /// Create a controller with custom configuration.
    pub fn with_config(
        sensor: S,
        display: Display<O, D>,
        buzzer: Buzzer<P>,
        overrides: &'a ColorOverride,
        config: ControllerConfig,
    ) -> Self {
        Self {
            sensor,
            display,
            buzzer,
            overrides,
            config,
        }
    }

    /// Run one loop iteration at time `now`.
    ///
    /// A failed sensor read skips the render and buzzer update for this
    /// cycle only; the loop retries at its natural cadence, without
    /// backoff. The outcome always carries the fixed inter-cycle sleep.
    pub fn tick(&mut self, now: Instant) -> CycleOutcome {
        match self.sensor.measure() {
            Ok(reading) => {
                let color = self
                    .overrides
                    .poll(now)
                    .unwrap_or_else(|| color_for_humidity(reading.humidity));
                self.display.render(color);

                let alert = reading.humidity >= self.config.alert_threshold;
                self.buzzer.set_active(alert);

                #[cfg(feature = "esp32-log")]
                if alert {
                    println!("humidity threshold exceeded: {:.1}%", reading.humidity);
                } else {
                    println!(
                        "humidity {:.1}% | temperature {:.1}C",
                        reading.humidity, reading.temperature
                    );
                }

                CycleOutcome {
                    rendered: Some(color),
                    alert: Some(alert),
                    sleep_duration: self.config.cycle_interval,
                }
            }
            Err(_err) => {
                #[cfg(feature = "esp32-log")]
                println!("sensor read failed: {}", _err);

                CycleOutcome {
                    rendered: None,
                    alert: None,
                    sleep_duration: self.config.cycle_interval,
                }
            }
        }
    }

    /// Run the control loop forever.
    ///
    /// Ticks at the configured cadence until power-down or reset; there
    /// is no graceful shutdown.
    pub fn run<F: Fn() -> u32>(
        &mut self,
        clock: &crate::clock::WrappingClock<F>,
        delay: &mut impl DelayNs,
    ) -> ! {
        loop {
            let outcome = self.tick(clock.now());
            let millis = outcome.sleep_duration.as_millis();
            delay.delay_ms(u32::try_from(millis).unwrap_or(u32::MAX));
        }
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }
}
