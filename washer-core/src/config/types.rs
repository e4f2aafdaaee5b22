//! Configuration type definitions
//!
//! These types represent the machine configuration. Defaults match the
//! stock machine; `washer.toml` overrides individual values.

use crate::traits::TimeOfDay;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Highest program index the machine supports
pub const PROGRAM_LIMIT: u8 = 29;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Hot threshold above cold threshold
    ThresholdsCrossed,
    /// Control loop period of zero
    ZeroLoopPeriod,
    /// Button poll interval of zero
    ZeroPollInterval,
    /// Program maximum beyond `PROGRAM_LIMIT`
    ProgramLimit,
}

/// Engine timing and valve policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EngineConfig {
    /// Minimum time spent in FillWater before moving on (ms)
    pub fill_dwell_ms: u32,
    /// Below this temperature only the hot valve opens (°C x10)
    pub hot_below_x10: i16,
    /// Above this temperature only the cold valve opens (°C x10)
    pub cold_above_x10: i16,
    /// Highest selectable program index
    pub max_program: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fill_dwell_ms: 10_000,
            hot_below_x10: 250,
            cold_above_x10: 350,
            max_program: 29,
        }
    }
}

/// Front panel button settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InputConfig {
    /// Time a level must be stable before it counts (ms)
    pub debounce_ms: u32,
    /// Button polling interval (ms)
    pub poll_interval_ms: u32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 30,
            poll_interval_ms: 10,
        }
    }
}

/// Output stage settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OutputConfig {
    /// Outputs energise on a high level (false for active-low relay boards)
    pub active_high: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { active_high: true }
    }
}

/// Wall clock settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClockConfig {
    /// Time of day shown at power-up
    pub start: TimeOfDay,
}

/// Complete machine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MachineConfig {
    pub engine: EngineConfig,
    pub input: InputConfig,
    pub outputs: OutputConfig,
    pub clock: ClockConfig,
    /// Control loop period (ms)
    pub loop_period_ms: u32,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            input: InputConfig::default(),
            outputs: OutputConfig::default(),
            clock: ClockConfig::default(),
            loop_period_ms: 100,
        }
    }
}

impl MachineConfig {
    /// Create a configuration with stock values
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the configuration for inconsistent values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.engine.hot_below_x10 > self.engine.cold_above_x10 {
            return Err(ConfigError::ThresholdsCrossed);
        }
        if self.loop_period_ms == 0 {
            return Err(ConfigError::ZeroLoopPeriod);
        }
        if self.input.poll_interval_ms == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }
        if self.engine.max_program > PROGRAM_LIMIT {
            return Err(ConfigError::ProgramLimit);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MachineConfig::new();
        assert_eq!(config.engine.fill_dwell_ms, 10_000);
        assert_eq!(config.engine.hot_below_x10, 250);
        assert_eq!(config.engine.cold_above_x10, 350);
        assert_eq!(config.engine.max_program, 29);
        assert_eq!(config.loop_period_ms, 100);
        assert!(config.outputs.active_high);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_validate_thresholds() {
        let mut config = MachineConfig::new();
        config.engine.hot_below_x10 = 400;
        assert_eq!(config.validate(), Err(ConfigError::ThresholdsCrossed));

        // Equal thresholds leave an empty blend band, which is allowed
        config.engine.hot_below_x10 = 350;
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_validate_periods_and_limit() {
        let mut config = MachineConfig::new();
        config.loop_period_ms = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroLoopPeriod));

        let mut config = MachineConfig::new();
        config.input.poll_interval_ms = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroPollInterval));

        let mut config = MachineConfig::new();
        config.engine.max_program = 30;
        assert_eq!(config.validate(), Err(ConfigError::ProgramLimit));
        config.engine.max_program = 29;
        assert_eq!(config.validate(), Ok(()));
        config.engine.max_program = 0;
        assert_eq!(config.validate(), Ok(()));
    }
}
