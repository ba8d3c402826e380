//! Humidity/temperature sensor boundary.

/// One sensor sample. Lives only for the loop iteration that read it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    /// Relative humidity in percent, 0–100.
    pub humidity: f32,
    /// Temperature in degrees Celsius.
    pub temperature: f32,
}

/// Transient sensor read failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// The sensor did not answer within the bus timeout.
    BusTimeout,
    /// The response arrived but its checksum did not match.
    ChecksumMismatch,
}

impl core::fmt::Display for SensorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SensorError::BusTimeout => write!(f, "sensor bus timeout"),
            SensorError::ChecksumMismatch => write!(f, "sensor checksum mismatch"),
        }
    }
}

/// Abstract humidity/temperature sensor.
///
/// Implement this for your sensor hardware (DHT22, SHT3x, ...).
/// Failures are transient; the control loop skips the cycle and retries
/// on its next scheduled iteration.
pub trait HumiditySensor {
    /// Take one measurement.
    fn measure(&mut self) -> Result<Reading, SensorError>;
}
