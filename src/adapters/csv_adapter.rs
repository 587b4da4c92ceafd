//! CSV trade file adapter.
//!
//! Columns: `ticker,units_bought,buy_price,units_sold,sell_price`, header
//! required. Empty numeric cells read as zero.

use crate::domain::error::GainTrackerError;
use crate::domain::format::plain_number;
use crate::domain::trade_record::TradeRecord;
use crate::ports::trade_source_port::TradeSourcePort;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub const HEADER: [&str; 5] = [
    "ticker",
    "units_bought",
    "buy_price",
    "units_sold",
    "sell_price",
];

pub struct CsvAdapter {
    path: PathBuf,
}

impl CsvAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl TradeSourcePort for CsvAdapter {
    fn load_trades(&self) -> Result<Vec<TradeRecord>, GainTrackerError> {
        let content = fs::read_to_string(&self.path).map_err(|e| GainTrackerError::TradeSource {
            reason: format!("failed to read {}: {}", self.path.display(), e),
        })?;
        parse_trades(&content)
    }
}

pub fn parse_trades(content: &str) -> Result<Vec<TradeRecord>, GainTrackerError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = rdr.headers().map_err(|e| GainTrackerError::TradeSource {
        reason: format!("CSV header error: {}", e),
    })?;
    let found: Vec<String> = headers.iter().map(|h| h.to_lowercase()).collect();
    if found != HEADER {
        return Err(GainTrackerError::TradeSource {
            reason: format!(
                "unexpected header '{}', expected '{}'",
                found.join(","),
                HEADER.join(",")
            ),
        });
    }

    let mut trades = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|e| GainTrackerError::TradeSource {
            reason: format!("CSV parse error: {}", e),
        })?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let ticker = record.get(0).unwrap_or_default().to_string();
        let units_bought = number_column(&record, 1, line)?;
        let buy_price = number_column(&record, 2, line)?;
        let units_sold = number_column(&record, 3, line)?;
        let sell_price = number_column(&record, 4, line)?;

        trades.push(TradeRecord::new(
            ticker,
            units_bought,
            buy_price,
            units_sold,
            sell_price,
        ));
    }
    Ok(trades)
}

fn number_column(record: &csv::StringRecord, idx: usize, line: u64) -> Result<f64, GainTrackerError> {
    let raw = record.get(idx).ok_or_else(|| GainTrackerError::TradeSource {
        reason: format!("line {}: missing {} column", line, HEADER[idx]),
    })?;
    if raw.is_empty() {
        return Ok(0.0);
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(GainTrackerError::TradeSource {
            reason: format!("line {}: invalid {} value '{}'", line, HEADER[idx], raw),
        }),
    }
}

pub fn write_trades<W: Write>(records: &[TradeRecord], out: W) -> Result<(), GainTrackerError> {
    let mut wtr = csv::Writer::from_writer(out);
    let to_err = |e: csv::Error| GainTrackerError::TradeSource {
        reason: format!("CSV write error: {}", e),
    };

    wtr.write_record(HEADER).map_err(to_err)?;
    for r in records {
        wtr.write_record([
            r.ticker.clone(),
            plain_number(r.units_bought),
            plain_number(r.buy_price),
            plain_number(r.units_sold),
            plain_number(r.sell_price),
        ])
        .map_err(to_err)?;
    }
    wtr.flush()?;
    Ok(())
}
