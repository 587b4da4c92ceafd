//! One display row per stored record.

use super::error::GainTrackerError;
use super::trade_record::TradeRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordRow {
    /// 1-based position in the list, used as the removal handle.
    pub row: usize,
    pub ticker: String,
    pub buy_price: f64,
    pub sell_price: f64,
    pub gain_pct: f64,
}

impl RecordRow {
    pub fn from_record(row: usize, record: &TradeRecord) -> Self {
        RecordRow {
            row,
            ticker: record.ticker.clone(),
            buy_price: record.buy_price,
            sell_price: record.sell_price,
            gain_pct: record.capital_gain_pct(),
        }
    }
}

pub fn build_rows(records: &[TradeRecord]) -> Vec<RecordRow> {
    records
        .iter()
        .enumerate()
        .map(|(i, r)| RecordRow::from_record(i + 1, r))
        .collect()
}

/// Resolve a 1-based row number to the record value displayed there.
pub fn record_at(records: &[TradeRecord], row: usize) -> Result<&TradeRecord, GainTrackerError> {
    row.checked_sub(1)
        .and_then(|i| records.get(i))
        .ok_or(GainTrackerError::NoSuchRow {
            row,
            len: records.len(),
        })
}
