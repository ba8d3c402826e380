//! Indicator light and buzzer drivers.
//!
//! Both drive PWM duty channels and treat the hardware write as
//! fire-and-forget; errors are handled inside the output implementation.

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

use crate::color::Color;

/// Pause after each indicator write, to avoid visually jarring flicker.
///
/// This blocks the calling loop iteration for the full pause and thereby
/// caps the maximum loop frequency.
pub const SETTLE_PAUSE: Duration = Duration::from_millis(500);

/// Duty driven on the buzzer channel while the alert is on.
pub const BUZZER_ON_DUTY: u16 = 512;

/// Abstract tri-channel indicator output.
///
/// Implement this for your hardware: three independent 0–1023 intensity
/// channels, one per primary. The write cannot fail.
pub trait RgbOutput {
    /// Drive all three channels to the components of `color`.
    fn set_channels(&mut self, color: Color);
}

/// Abstract single PWM duty channel.
pub trait PwmOutput {
    fn set_duty(&mut self, duty: u16);
}

/// Indicator light driver: writes a color, then holds for the settle pause.
pub struct Display<O: RgbOutput, D: DelayNs> {
    output: O,
    delay: D,
    settle: Duration,
}

impl<O: RgbOutput, D: DelayNs> Display<O, D> {
    /// Create a display with the default settle pause.
    pub fn new(output: O, delay: D) -> Self {
        Self::with_settle_pause(output, delay, SETTLE_PAUSE)
    }

    /// Create a display with a custom settle pause.
    ///
    /// The pause stays a bounded, fixed blocking wait; it is not a yield
    /// point.
    pub fn with_settle_pause(output: O, delay: D, settle: Duration) -> Self {
        Self {
            output,
            delay,
            settle,
        }
    }

    /// Render a color, blocking for the settle pause afterwards.
    pub fn render(&mut self, color: Color) {
        self.output.set_channels(color);
        let millis = self.settle.as_millis();
        if millis > 0 {
            self.delay.delay_ms(u32::try_from(millis).unwrap_or(u32::MAX));
        }
    }
}

/// Buzzer driver over one PWM channel.
pub struct Buzzer<P: PwmOutput> {
    output: P,
}

impl<P: PwmOutput> Buzzer<P> {
    pub fn new(output: P) -> Self {
        Self { output }
    }

    /// Drive the buzzer: fixed on-duty while active, zero otherwise.
    pub fn set_active(&mut self, on: bool) {
        self.output.set_duty(if on { BUZZER_ON_DUTY } else { 0 });
    }
}
