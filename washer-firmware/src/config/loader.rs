//! Configuration loading
//!
//! Parses the embedded `washer.toml`. Falls back to built-in defaults if
//! the file does not parse or fails validation.

use defmt::*;

use washer_core::config::{parse_config, MachineConfig};

/// Load the machine configuration from TOML text
pub fn load_config(toml: &str) -> MachineConfig {
    info!("Loading configuration ({} bytes)...", toml.len());

    let config = match parse_config(toml) {
        Ok(config) => config,
        Err(e) => {
            error!("washer.toml parse error: {:?}, using defaults", e);
            return MachineConfig::default();
        }
    };

    if let Err(e) = config.validate() {
        error!("washer.toml invalid: {:?}, using defaults", e);
        return MachineConfig::default();
    }

    log_config_summary(&config);
    config
}

fn log_config_summary(config: &MachineConfig) {
    info!(
        "Engine: fill dwell {}ms, hot below {}, cold above {}, programs 0-{}",
        config.engine.fill_dwell_ms,
        config.engine.hot_below_x10,
        config.engine.cold_above_x10,
        config.engine.max_program
    );
    info!(
        "Input: debounce {}ms, poll {}ms; outputs active_high={}; loop {}ms",
        config.input.debounce_ms,
        config.input.poll_interval_ms,
        config.outputs.active_high,
        config.loop_period_ms
    );
}
