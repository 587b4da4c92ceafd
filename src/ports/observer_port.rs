//! Store change notification port.

use crate::domain::trade_record::TradeRecord;

/// A view that re-derives its output whenever the portfolio store changes.
///
/// Called synchronously after every completed `add_record` / `remove_record`
/// with the full record sequence in insertion order.
pub trait RecordObserver {
    fn records_changed(&self, records: &[TradeRecord]);
}
