//! Domain error types.

use super::form::Field;

/// A parse error with position information for session command parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("parse error at position {position}: {message}")]
pub struct ParseError {
    pub message: String,
    pub position: usize,
}

impl ParseError {
    /// Format the error with a caret pointing at the error position in the input.
    ///
    /// `position` is a byte offset; the caret column counts characters.
    pub fn display_with_context(&self, input: &str) -> String {
        let column = input
            .get(..self.position)
            .map_or(self.position, |prefix| prefix.chars().count());
        let caret = " ".repeat(column) + "^";
        format!(
            "{input}\n{caret}\n{err}",
            input = input,
            caret = caret,
            err = self
        )
    }
}

/// Top-level error type for gaintracker.
#[derive(Debug, thiserror::Error)]
pub enum GainTrackerError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error(transparent)]
    CommandParse(#[from] ParseError),

    #[error("invalid number for {field}: {value:?}")]
    InvalidNumber { field: Field, value: String },

    #[error("draft is incomplete, missing: {}", join_fields(missing))]
    IncompleteDraft { missing: Vec<Field> },

    #[error("negative value not allowed for {field}")]
    NegativeValue { field: Field },

    #[error("no record at row {row} (list has {len} rows)")]
    NoSuchRow { row: usize, len: usize },

    #[error("trade source error: {reason}")]
    TradeSource { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<&GainTrackerError> for std::process::ExitCode {
    fn from(err: &GainTrackerError) -> Self {
        let code: u8 = match err {
            GainTrackerError::Io(_) => 1,
            GainTrackerError::ConfigParse { .. } | GainTrackerError::ConfigInvalid { .. } => 2,
            GainTrackerError::TradeSource { .. } => 3,
            GainTrackerError::CommandParse(_)
            | GainTrackerError::InvalidNumber { .. }
            | GainTrackerError::IncompleteDraft { .. }
            | GainTrackerError::NegativeValue { .. }
            | GainTrackerError::NoSuchRow { .. } => 4,
        };
        std::process::ExitCode::from(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_points_at_position() {
        let err = ParseError {
            message: "unknown field 'price'".into(),
            position: 4,
        };
        let rendered = err.display_with_context("set price 5");
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "set price 5");
        assert_eq!(lines[1], "    ^");
        assert_eq!(
            lines[2],
            "parse error at position 4: unknown field 'price'"
        );
    }

    #[test]
    fn caret_counts_characters_not_bytes() {
        let input = "set tické x";
        let err = ParseError {
            message: "unexpected 'x'".to_string(),
            position: input.find('x').unwrap(),
        };
        let rendered = err.display_with_context(input);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[1], "          ^");
        assert_eq!(lines[1].chars().count(), input.chars().position(|c| c == 'x').unwrap() + 1);
    }

    #[test]
    fn incomplete_draft_lists_missing_fields() {
        let err = GainTrackerError::IncompleteDraft {
            missing: vec![Field::Ticker, Field::BuyPrice],
        };
        assert_eq!(
            err.to_string(),
            "draft is incomplete, missing: ticker, buy-price"
        );
    }

    #[test]
    fn invalid_number_quotes_value() {
        let err = GainTrackerError::InvalidNumber {
            field: Field::SellPrice,
            value: "abc".into(),
        };
        assert_eq!(err.to_string(), "invalid number for sell-price: \"abc\"");
    }
}
