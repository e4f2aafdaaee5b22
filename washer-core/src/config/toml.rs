//! Simple TOML parser for machine configuration
//!
//! This is a minimal TOML parser that handles only the subset needed for
//! `washer.toml`. It does NOT support the full TOML language and never
//! allocates.
//!
//! Supported features:
//! - Key = value pairs (string, integer, boolean)
//! - [section] headers
//! - Comments (# ...), including trailing comments
//!
//! Unknown keys inside a known section are ignored so older firmware can
//! read newer files.

use crate::traits::TimeOfDay;

use super::types::MachineConfig;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Invalid section header
    InvalidSection,
    /// Invalid value type
    InvalidValue,
    /// Line is neither a header nor a key = value pair
    InvalidLine,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Engine,
    Input,
    Outputs,
    Clock,
}

/// Parse TOML configuration into MachineConfig
///
/// Values not present in the input keep their defaults. The result is not
/// validated; call [`MachineConfig::validate`] afterwards.
pub fn parse_config(input: &str) -> Result<MachineConfig, ParseError> {
    let mut config = MachineConfig::new();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') {
            let header = strip_comment(line);
            if !header.ends_with(']') {
                return Err(ParseError::InvalidSection);
            }
            section = parse_section_header(&header[1..header.len() - 1])?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidLine)?;
        apply_value(section, key, value, &mut config)?;
    }

    Ok(config)
}

/// Parse a section header like "engine"
fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "engine" => Ok(Section::Engine),
        "input" => Ok(Section::Input),
        "outputs" => Ok(Section::Outputs),
        "clock" => Ok(Section::Clock),
        _ => Err(ParseError::InvalidSection),
    }
}

fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut MachineConfig,
) -> Result<(), ParseError> {
    match (section, key) {
        (Section::Root, "loop_period_ms") => config.loop_period_ms = parse_int(value)?,
        (Section::Engine, "fill_dwell_ms") => config.engine.fill_dwell_ms = parse_int(value)?,
        (Section::Engine, "hot_below_x10") => config.engine.hot_below_x10 = parse_int(value)?,
        (Section::Engine, "cold_above_x10") => config.engine.cold_above_x10 = parse_int(value)?,
        (Section::Engine, "max_program") => config.engine.max_program = parse_int(value)?,
        (Section::Input, "debounce_ms") => config.input.debounce_ms = parse_int(value)?,
        (Section::Input, "poll_interval_ms") => config.input.poll_interval_ms = parse_int(value)?,
        (Section::Outputs, "active_high") => config.outputs.active_high = parse_bool(value)?,
        (Section::Clock, "start") => config.clock.start = parse_time(value)?,
        _ => {}
    }
    Ok(())
}

/// Drop a trailing comment that is not inside a string
fn strip_comment(s: &str) -> &str {
    match s.find('#') {
        Some(pos) if s[..pos].matches('"').count() % 2 == 0 => s[..pos].trim(),
        _ => s,
    }
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = strip_comment(line[eq_pos + 1..].trim());

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse a string value (removes quotes)
fn parse_string(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

/// Parse an integer value, allowing `_` digit separators
fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ParseError> {
    let mut digits = heapless::String::<16>::new();
    for c in value.chars().filter(|c| *c != '_') {
        digits.push(c).map_err(|_| ParseError::InvalidValue)?;
    }
    digits.parse().map_err(|_| ParseError::InvalidValue)
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidValue),
    }
}

/// Parse a time string like "08:30:00"
fn parse_time(value: &str) -> Result<TimeOfDay, ParseError> {
    let mut parts = parse_string(value).split(':');
    let mut field = || -> Result<u8, ParseError> {
        parts
            .next()
            .ok_or(ParseError::InvalidValue)?
            .parse()
            .map_err(|_| ParseError::InvalidValue)
    };

    let hours = field()?;
    let minutes = field()?;
    let seconds = field()?;
    if parts.next().is_some() {
        return Err(ParseError::InvalidValue);
    }

    TimeOfDay::new(hours, minutes, seconds).ok_or(ParseError::InvalidValue)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
# Stock washer
loop_period_ms = 100

[engine]
fill_dwell_ms = 12_000   # slower inlet
hot_below_x10 = 200
cold_above_x10 = 400
max_program = 9

[input]
debounce_ms = 20
poll_interval_ms = 5

[outputs]
active_high = false

[clock]
start = "08:30:00"
"#;

    #[test]
    fn test_parse_sample() {
        let config = parse_config(SAMPLE).unwrap();
        assert_eq!(config.loop_period_ms, 100);
        assert_eq!(config.engine.fill_dwell_ms, 12_000);
        assert_eq!(config.engine.hot_below_x10, 200);
        assert_eq!(config.engine.cold_above_x10, 400);
        assert_eq!(config.engine.max_program, 9);
        assert_eq!(config.input.debounce_ms, 20);
        assert_eq!(config.input.poll_interval_ms, 5);
        assert!(!config.outputs.active_high);
        assert_eq!(config.clock.start, TimeOfDay::new(8, 30, 0).unwrap());
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_empty_input_is_default() {
        assert_eq!(parse_config("").unwrap(), MachineConfig::default());
        assert_eq!(
            parse_config("# only a comment\n\n").unwrap(),
            MachineConfig::default()
        );
    }

    #[test]
    fn test_unknown_key_ignored() {
        let config = parse_config("[engine]\nspin_rpm = 1200\n").unwrap();
        assert_eq!(config, MachineConfig::default());
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            parse_config("[dryer]\n"),
            Err(ParseError::InvalidSection)
        );
        assert_eq!(parse_config("[engine\n"), Err(ParseError::InvalidSection));
        assert_eq!(
            parse_config("[engine]\nmax_program = lots\n"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[engine]\nmax_program = 300\n"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[outputs]\nactive_high = yes\n"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(parse_config("garbage\n"), Err(ParseError::InvalidLine));
    }

    #[test]
    fn test_program_maximum_capped() {
        use crate::config::ConfigError;

        let config = parse_config("[engine]\nmax_program = 30\n").unwrap();
        assert_eq!(config.validate(), Err(ConfigError::ProgramLimit));

        let config = parse_config("[engine]\nmax_program = 50\n").unwrap();
        assert_eq!(config.validate(), Err(ConfigError::ProgramLimit));

        let config = parse_config("[engine]\nmax_program = 29\n").unwrap();
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_parse_time() {
        assert_eq!(
            parse_time("\"23:59:59\"").unwrap(),
            TimeOfDay::new(23, 59, 59).unwrap()
        );
        assert_eq!(parse_time("7:05:00").unwrap(), TimeOfDay::new(7, 5, 0).unwrap());
        assert!(parse_time("24:00:00").is_err());
        assert!(parse_time("12:00").is_err());
        assert!(parse_time("12:00:00:00").is_err());
    }

    #[test]
    fn test_comment_inside_string_kept() {
        assert_eq!(strip_comment("\"a#b\""), "\"a#b\"");
        assert_eq!(strip_comment("5 # five"), "5");
    }
}
