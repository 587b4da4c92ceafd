//! Configuration validation.
//!
//! Every key is optional; present keys must hold a usable value.

use crate::domain::error::GainTrackerError;
use crate::domain::settings::{MAX_CURRENCY_SYMBOL_CHARS, parse_level};
use crate::ports::config_port::ConfigPort;

const BOOL_KEYS: [(&str, &str); 2] = [("overview", "weight_by_units"), ("form", "reject_negative")];

pub fn validate_config(config: &dyn ConfigPort) -> Result<(), GainTrackerError> {
    validate_currency_symbol(config)?;
    validate_bools(config)?;
    validate_log_level(config)?;
    Ok(())
}

pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" => Some(true),
        "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

fn validate_currency_symbol(config: &dyn ConfigPort) -> Result<(), GainTrackerError> {
    let Some(symbol) = config.get_string("display", "currency_symbol") else {
        return Ok(());
    };
    let chars = symbol.trim().chars().count();
    if chars == 0 || chars > MAX_CURRENCY_SYMBOL_CHARS {
        return Err(GainTrackerError::ConfigInvalid {
            section: "display".to_string(),
            key: "currency_symbol".to_string(),
            reason: format!(
                "currency_symbol must be 1 to {} characters",
                MAX_CURRENCY_SYMBOL_CHARS
            ),
        });
    }
    Ok(())
}

fn validate_bools(config: &dyn ConfigPort) -> Result<(), GainTrackerError> {
    for (section, key) in BOOL_KEYS {
        if let Some(value) = config.get_string(section, key) {
            if parse_bool(&value).is_none() {
                return Err(GainTrackerError::ConfigInvalid {
                    section: section.to_string(),
                    key: key.to_string(),
                    reason: format!("expected true/false, found '{}'", value),
                });
            }
        }
    }
    Ok(())
}

fn validate_log_level(config: &dyn ConfigPort) -> Result<(), GainTrackerError> {
    match config.get_string("log", "level") {
        Some(level) if parse_level(&level).is_none() => Err(GainTrackerError::ConfigInvalid {
            section: "log".to_string(),
            key: "level".to_string(),
            reason: format!(
                "unknown level '{}', expected off, error, warn, info, debug or trace",
                level
            ),
        }),
        _ => Ok(()),
    }
}
