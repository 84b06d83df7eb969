//! # Calculation History
//!
//! Append-only log of saved calculations, persisted as a single JSON array
//! under the `voltaic_history` key of an injected [`KeyValueStorage`].
//! Records are immutable once saved; the only mutations are delete-one and
//! clear-all. The newest record is always first.
//!
//! Writes are whole-log read-modify-write, matching the single-user
//! deployment model; subscribers are notified synchronously after each
//! successful write, in write order.
//!
//! ## Example
//!
//! ```rust
//! use volt_core::calculators::Calculator;
//! use volt_core::history::{HistoryStore, RecordDraft};
//! use volt_core::storage::MemoryStorage;
//!
//! let mut store = HistoryStore::new(MemoryStorage::new());
//! let id = store
//!     .save(
//!         RecordDraft::new(Calculator::Ohm, "V = 12 V, I = 2 A", "R = 6.00 Ω")
//!             .formula("R = V / I")
//!             .step("R = 12 / 2 = 6.00 Ω"),
//!     )
//!     .unwrap();
//!
//! assert_eq!(store.records()[0].id, id);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculators::Calculator;
use crate::errors::VoltResult;
use crate::storage::KeyValueStorage;

/// Storage key holding the serialized history log.
pub const HISTORY_KEY: &str = "voltaic_history";

/// One saved calculation. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRecord {
    /// Unique identifier, assigned at save time
    pub id: Uuid,

    /// When the record was saved
    pub date: DateTime<Utc>,

    /// Display name of the calculator that produced this record
    pub calculator: String,

    /// Optional human-readable formula label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,

    /// Human-readable summary of the inputs and units used
    pub inputs: String,

    /// Human-readable summary of the computed output
    pub result: String,

    /// Ordered derivation steps for report display; may be empty
    #[serde(default)]
    pub steps: Vec<String>,
}

/// Builder for a record about to be saved. Id and timestamp are assigned
/// by [`HistoryStore::save`].
#[derive(Debug, Clone)]
pub struct RecordDraft {
    calculator: Calculator,
    formula: Option<String>,
    inputs: String,
    result: String,
    steps: Vec<String>,
}

impl RecordDraft {
    /// Start a draft from the producing calculator and the two summaries.
    pub fn new(
        calculator: Calculator,
        inputs: impl Into<String>,
        result: impl Into<String>,
    ) -> Self {
        RecordDraft {
            calculator,
            formula: None,
            inputs: inputs.into(),
            result: result.into(),
            steps: Vec::new(),
        }
    }

    /// Attach a formula label
    pub fn formula(mut self, formula: impl Into<String>) -> Self {
        self.formula = Some(formula.into());
        self
    }

    /// Append one derivation step
    pub fn step(mut self, step: impl Into<String>) -> Self {
        self.steps.push(step.into());
        self
    }

    /// Append several derivation steps
    pub fn steps<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.steps.extend(steps.into_iter().map(Into::into));
        self
    }
}

/// Change notification delivered to subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryEvent {
    /// A record was saved (newest-first prepend)
    Saved(Uuid),
    /// A record was deleted by id
    Deleted(Uuid),
    /// The whole log was cleared
    Cleared,
}

/// Handle returned by [`HistoryStore::subscribe`].
pub type SubscriberId = usize;

type Subscriber = Box<dyn Fn(&HistoryEvent)>;

/// The history log over an injected storage backend.
pub struct HistoryStore<S: KeyValueStorage> {
    storage: S,
    subscribers: Vec<(SubscriberId, Subscriber)>,
    next_subscriber: SubscriberId,
}

impl<S: KeyValueStorage> HistoryStore<S> {
    /// Create a store over the given backend.
    pub fn new(storage: S) -> Self {
        HistoryStore {
            storage,
            subscribers: Vec::new(),
            next_subscriber: 0,
        }
    }

    /// All records, newest first.
    ///
    /// Missing or corrupt persisted data reads as the empty log.
    pub fn records(&self) -> Vec<CalculationRecord> {
        self.storage
            .get(HISTORY_KEY)
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default()
    }

    /// Number of saved records.
    pub fn len(&self) -> usize {
        self.records().len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }

    /// Save a draft as a new record at the head of the log.
    ///
    /// Assigns the id and timestamp, persists the whole log, then notifies
    /// subscribers. Returns the assigned id.
    pub fn save(&mut self, draft: RecordDraft) -> VoltResult<Uuid> {
        let record = CalculationRecord {
            id: Uuid::new_v4(),
            date: Utc::now(),
            calculator: draft.calculator.display_name().to_string(),
            formula: draft.formula,
            inputs: draft.inputs,
            result: draft.result,
            steps: draft.steps,
        };
        let id = record.id;

        let mut records = self.records();
        records.insert(0, record);
        self.write(&records)?;
        self.notify(HistoryEvent::Saved(id));
        Ok(id)
    }

    /// Delete one record by id. Returns whether a record was removed;
    /// the relative order of the remaining records is unchanged.
    pub fn delete(&mut self, id: &Uuid) -> VoltResult<bool> {
        let mut records = self.records();
        let before = records.len();
        records.retain(|r| r.id != *id);
        if records.len() == before {
            return Ok(false);
        }

        self.write(&records)?;
        self.notify(HistoryEvent::Deleted(*id));
        Ok(true)
    }

    /// Wipe the entire log.
    pub fn clear(&mut self) -> VoltResult<()> {
        self.write(&[])?;
        self.notify(HistoryEvent::Cleared);
        Ok(())
    }

    /// Register a change callback. Callbacks run synchronously after each
    /// successful write, in registration order.
    pub fn subscribe(&mut self, callback: impl Fn(&HistoryEvent) + 'static) -> SubscriberId {
        let id = self.next_subscriber;
        self.next_subscriber += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a previously registered callback. Returns whether it existed.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    fn write(&mut self, records: &[CalculationRecord]) -> VoltResult<()> {
        let json = serde_json::to_string(records)?;
        self.storage.set(HISTORY_KEY, &json)
    }

    fn notify(&self, event: HistoryEvent) {
        for (_, callback) in &self.subscribers {
            callback(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn draft(n: usize) -> RecordDraft {
        RecordDraft::new(Calculator::Ohm, format!("input {n}"), format!("result {n}"))
    }

    #[test]
    fn test_newest_first_ordering() {
        let mut store = HistoryStore::new(MemoryStorage::new());
        for n in 0..5 {
            store.save(draft(n)).unwrap();
        }

        let records = store.records();
        assert_eq!(records.len(), 5);
        // last saved comes first
        assert_eq!(records[0].inputs, "input 4");
        assert_eq!(records[4].inputs, "input 0");
    }

    #[test]
    fn test_record_contents() {
        let mut store = HistoryStore::new(MemoryStorage::new());
        let id = store
            .save(
                RecordDraft::new(Calculator::VoltageDrop, "I = 20 A", "13.76 V")
                    .formula("ΔV = L·ρ·I/A")
                    .steps(["L = 100 m", "ΔV = 13.76 V"]),
            )
            .unwrap();

        let record = &store.records()[0];
        assert_eq!(record.id, id);
        assert_eq!(record.calculator, "Voltage Drop");
        assert_eq!(record.formula.as_deref(), Some("ΔV = L·ρ·I/A"));
        assert_eq!(record.steps.len(), 2);
    }

    #[test]
    fn test_delete_one_preserves_order() {
        let mut store = HistoryStore::new(MemoryStorage::new());
        let mut ids = Vec::new();
        for n in 0..4 {
            ids.push(store.save(draft(n)).unwrap());
        }

        assert!(store.delete(&ids[2]).unwrap());
        let records = store.records();
        assert_eq!(records.len(), 3);
        // remaining relative order unchanged (newest first: 3, 1, 0)
        assert_eq!(records[0].inputs, "input 3");
        assert_eq!(records[1].inputs, "input 1");
        assert_eq!(records[2].inputs, "input 0");

        // deleting an unknown id is a no-op
        assert!(!store.delete(&Uuid::new_v4()).unwrap());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_clear_all() {
        let mut store = HistoryStore::new(MemoryStorage::new());
        for n in 0..3 {
            store.save(draft(n)).unwrap();
        }
        store.clear().unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_corrupt_storage_reads_empty() {
        let mut storage = MemoryStorage::new();
        storage.set(HISTORY_KEY, "this is not json").unwrap();
        let store = HistoryStore::new(storage);
        assert!(store.records().is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let mut store = HistoryStore::new(MemoryStorage::new());
        let mut ids = std::collections::HashSet::new();
        for n in 0..20 {
            assert!(ids.insert(store.save(draft(n)).unwrap()));
        }
    }

    #[test]
    fn test_subscribers() {
        let mut store = HistoryStore::new(MemoryStorage::new());
        let events: Rc<RefCell<Vec<HistoryEvent>>> = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&events);
        let sub = store.subscribe(move |event| sink.borrow_mut().push(*event));

        let id = store.save(draft(0)).unwrap();
        store.delete(&id).unwrap();
        store.clear().unwrap();

        {
            let seen = events.borrow();
            assert_eq!(
                *seen,
                vec![
                    HistoryEvent::Saved(id),
                    HistoryEvent::Deleted(id),
                    HistoryEvent::Cleared
                ]
            );
        }

        assert!(store.unsubscribe(sub));
        assert!(!store.unsubscribe(sub));
        store.save(draft(1)).unwrap();
        // no further events after unsubscribe
        assert_eq!(events.borrow().len(), 3);
    }

    #[test]
    fn test_persisted_format_roundtrip() {
        let mut store = HistoryStore::new(MemoryStorage::new());
        store.save(draft(0)).unwrap();

        let records = store.records();
        let json = serde_json::to_string(&records).unwrap();
        let roundtrip: Vec<CalculationRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(records, roundtrip);
    }
}
