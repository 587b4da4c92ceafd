//! Resolved runtime settings.

use log::LevelFilter;

use super::form::FormPolicy;
use super::overview::OverviewFormula;

pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";
pub const MAX_CURRENCY_SYMBOL_CHARS: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub currency_symbol: String,
    pub overview_formula: OverviewFormula,
    pub form_policy: FormPolicy,
    pub log_level: LevelFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            overview_formula: OverviewFormula::default(),
            form_policy: FormPolicy::default(),
            log_level: LevelFilter::Warn,
        }
    }
}

/// `off`, `error`, `warn`, `info`, `debug` or `trace`, any case.
pub fn parse_level(value: &str) -> Option<LevelFilter> {
    value.trim().parse::<LevelFilter>().ok()
}

/// Raise `base` by `steps` levels, saturating at `Trace`.
pub fn raise_level(base: LevelFilter, steps: u8) -> LevelFilter {
    const ORDER: [LevelFilter; 6] = [
        LevelFilter::Off,
        LevelFilter::Error,
        LevelFilter::Warn,
        LevelFilter::Info,
        LevelFilter::Debug,
        LevelFilter::Trace,
    ];
    let idx = ORDER.iter().position(|&l| l == base).unwrap_or(0);
    ORDER[(idx + steps as usize).min(ORDER.len() - 1)]
}
