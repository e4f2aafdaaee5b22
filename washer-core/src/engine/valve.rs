//! Temperature-to-valve policy
//!
//! Cold inlet water below the hot threshold gets hot water only, warm water
//! above the cold threshold gets cold water only, and everything in between
//! (thresholds included) gets a blend.

use crate::config::EngineConfig;
use crate::traits::ValveMix;

/// Select the valve mix for a water temperature (°C x10)
pub fn select_mix(temp_x10: i16, config: &EngineConfig) -> ValveMix {
    if temp_x10 < config.hot_below_x10 {
        ValveMix::HOT_ONLY
    } else if temp_x10 > config.cold_above_x10 {
        ValveMix::COLD_ONLY
    } else {
        ValveMix::BLEND
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_edges() {
        let config = EngineConfig::default();

        assert_eq!(select_mix(249, &config), ValveMix::HOT_ONLY);
        assert_eq!(select_mix(250, &config), ValveMix::BLEND);
        assert_eq!(select_mix(350, &config), ValveMix::BLEND);
        assert_eq!(select_mix(351, &config), ValveMix::COLD_ONLY);
    }

    #[test]
    fn test_extremes() {
        let config = EngineConfig::default();

        assert_eq!(select_mix(i16::MIN, &config), ValveMix::HOT_ONLY);
        assert_eq!(select_mix(0, &config), ValveMix::HOT_ONLY);
        assert_eq!(select_mix(1000, &config), ValveMix::COLD_ONLY);
        assert_eq!(select_mix(i16::MAX, &config), ValveMix::COLD_ONLY);
    }

    #[test]
    fn test_custom_thresholds() {
        let config = EngineConfig {
            hot_below_x10: 300,
            cold_above_x10: 300,
            ..EngineConfig::default()
        };

        assert_eq!(select_mix(299, &config), ValveMix::HOT_ONLY);
        assert_eq!(select_mix(300, &config), ValveMix::BLEND);
        assert_eq!(select_mix(301, &config), ValveMix::COLD_ONLY);
    }
}
