//! Portfolio store: the single owner of confirmed trade records.

use std::fmt;
use std::rc::Rc;

use super::trade_record::TradeRecord;
use crate::ports::observer_port::RecordObserver;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

#[derive(Default)]
pub struct PortfolioStore {
    records: Vec<TradeRecord>,
    observers: Vec<(ObserverId, Rc<dyn RecordObserver>)>,
    next_observer: u64,
}

impl fmt::Debug for PortfolioStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PortfolioStore")
            .field("records", &self.records)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl PortfolioStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[TradeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a record. No validation happens here.
    pub fn add_record(&mut self, record: TradeRecord) {
        log::debug!("adding record for {}", record.ticker);
        self.records.push(record);
        self.notify();
    }

    /// Drop every record equal to `record`, returning how many were dropped.
    ///
    /// Observers are notified even when nothing matched.
    pub fn remove_record(&mut self, record: &TradeRecord) -> usize {
        let before = self.records.len();
        self.records.retain(|r| r != record);
        let removed = before - self.records.len();
        log::debug!("removed {} record(s) for {}", removed, record.ticker);
        self.notify();
        removed
    }

    pub fn subscribe(&mut self, observer: Rc<dyn RecordObserver>) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, observer));
        id
    }

    /// Returns false if `id` was not registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }

    fn notify(&self) {
        for (_, observer) in &self.observers {
            observer.records_changed(&self.records);
        }
    }
}
