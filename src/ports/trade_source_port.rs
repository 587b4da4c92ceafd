//! Batch trade input port.

use crate::domain::error::GainTrackerError;
use crate::domain::trade_record::TradeRecord;

pub trait TradeSourcePort {
    /// Records in source order. Admission rules are applied by the caller.
    fn load_trades(&self) -> Result<Vec<TradeRecord>, GainTrackerError>;
}
