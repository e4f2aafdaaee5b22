//! Linear ADC temperature sensor
//!
//! Maps the full 12-bit ADC range linearly onto 0.0 to 100.0°C. Suits
//! conditioned probes with a linear voltage output.

use washer_core::traits::{SensorError, TemperatureSensor};

/// Largest 12-bit ADC sample
pub const ADC_MAX: u16 = 4095;

/// Temperature at full scale (°C x10)
const FULL_SCALE_X10: u32 = 1000;

/// ADC reading trait for platform abstraction
pub trait AdcReader {
    /// Read ADC value (12-bit, 0-4095)
    #[allow(clippy::result_unit_err)]
    fn read(&mut self) -> Result<u16, ()>;
}

/// Linear temperature sensor on an ADC channel
pub struct LinearAdcSensor<ADC> {
    adc: ADC,
}

impl<ADC> LinearAdcSensor<ADC> {
    /// Create a new sensor
    pub fn new(adc: ADC) -> Self {
        Self { adc }
    }

    /// Convert a raw sample to temperature (°C x10)
    pub fn sample_to_x10(raw: u16) -> Result<i16, SensorError> {
        if raw > ADC_MAX {
            return Err(SensorError::OutOfRange);
        }
        Ok((raw as u32 * FULL_SCALE_X10 / ADC_MAX as u32) as i16)
    }
}

impl<ADC: AdcReader> TemperatureSensor for LinearAdcSensor<ADC> {
    fn read_celsius_x10(&mut self) -> Result<i16, SensorError> {
        let raw = self.adc.read().map_err(|_| SensorError::ConversionError)?;
        Self::sample_to_x10(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Dummy ADC returning a fixed result
    struct DummyAdc(Result<u16, ()>);

    impl AdcReader for DummyAdc {
        fn read(&mut self) -> Result<u16, ()> {
            self.0
        }
    }

    #[test]
    fn test_scale_endpoints() {
        assert_eq!(LinearAdcSensor::<DummyAdc>::sample_to_x10(0), Ok(0));
        assert_eq!(LinearAdcSensor::<DummyAdc>::sample_to_x10(4095), Ok(1000));
        // Midpoint rounds down
        assert_eq!(LinearAdcSensor::<DummyAdc>::sample_to_x10(2048), Ok(500));
    }

    #[test]
    fn test_valve_thresholds_reachable() {
        // 25.0°C and 35.0°C sit at 1023.75 and 1433.25 counts
        assert_eq!(LinearAdcSensor::<DummyAdc>::sample_to_x10(1023), Ok(249));
        assert_eq!(LinearAdcSensor::<DummyAdc>::sample_to_x10(1024), Ok(250));
        assert_eq!(LinearAdcSensor::<DummyAdc>::sample_to_x10(1434), Ok(350));
        assert_eq!(LinearAdcSensor::<DummyAdc>::sample_to_x10(1438), Ok(351));
    }

    #[test]
    fn test_errors() {
        let mut sensor = LinearAdcSensor::new(DummyAdc(Ok(4096)));
        assert_eq!(sensor.read_celsius_x10(), Err(SensorError::OutOfRange));

        let mut sensor = LinearAdcSensor::new(DummyAdc(Err(())));
        assert_eq!(sensor.read_celsius_x10(), Err(SensorError::ConversionError));
    }

    #[test]
    fn test_read() {
        let mut sensor = LinearAdcSensor::new(DummyAdc(Ok(1228)));
        assert_eq!(sensor.read_celsius_x10(), Ok(299));
    }
}
