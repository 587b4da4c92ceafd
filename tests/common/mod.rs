#![allow(dead_code)]

use gaintracker::domain::error::GainTrackerError;
use gaintracker::domain::settings::Settings;
use gaintracker::domain::trade_record::TradeRecord;
use gaintracker::ports::observer_port::RecordObserver;
use gaintracker::ports::trade_source_port::TradeSourcePort;
use gaintracker::session::Session;
use std::cell::RefCell;
use std::rc::Rc;

pub const EMPTY_OVERVIEW: &str = "\
Portfolio Overview
Total Investments: $0.00
Total Gains: $0.00
Overall Portfolio Performance: 0.00%
";

pub struct MockTradeSource {
    pub trades: Vec<TradeRecord>,
    pub error: Option<String>,
}

impl MockTradeSource {
    pub fn new() -> Self {
        Self {
            trades: Vec::new(),
            error: None,
        }
    }

    pub fn with_trade(mut self, trade: TradeRecord) -> Self {
        self.trades.push(trade);
        self
    }

    pub fn with_error(mut self, reason: &str) -> Self {
        self.error = Some(reason.to_string());
        self
    }
}

impl TradeSourcePort for MockTradeSource {
    fn load_trades(&self) -> Result<Vec<TradeRecord>, GainTrackerError> {
        if let Some(reason) = &self.error {
            return Err(GainTrackerError::TradeSource {
                reason: reason.clone(),
            });
        }
        Ok(self.trades.clone())
    }
}

/// Appends `(name, tickers)` to a shared log on every notification.
pub struct RecordingObserver {
    pub name: &'static str,
    pub log: Rc<RefCell<Vec<(&'static str, Vec<String>)>>>,
}

impl RecordingObserver {
    pub fn new(name: &'static str, log: Rc<RefCell<Vec<(&'static str, Vec<String>)>>>) -> Self {
        Self { name, log }
    }
}

impl RecordObserver for RecordingObserver {
    fn records_changed(&self, records: &[TradeRecord]) {
        self.log.borrow_mut().push((
            self.name,
            records.iter().map(|r| r.ticker.clone()).collect(),
        ));
    }
}

pub fn make_record(
    ticker: &str,
    units_bought: f64,
    buy_price: f64,
    units_sold: f64,
    sell_price: f64,
) -> TradeRecord {
    TradeRecord::new(ticker, units_bought, buy_price, units_sold, sell_price)
}

/// `{AAA, 10 @ 5 -> 10 @ 6}`: +20% per record.
pub fn aaa() -> TradeRecord {
    make_record("AAA", 10.0, 5.0, 10.0, 6.0)
}

/// Run `script` through a fresh session and return everything it printed.
pub fn run_script(script: &str, settings: &Settings) -> String {
    let mut session = Session::new(Vec::new(), settings);
    session.run(script.as_bytes(), false).unwrap();
    String::from_utf8(session.into_output().unwrap()).unwrap()
}

pub const ENTER_AAA: &str = "\
set ticker AAA
set units-bought 10
set buy-price 5
set units-sold 10
set sell-price 6
";
