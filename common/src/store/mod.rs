//! The record store and its persistence port.
//!
//! `RecordStore` owns the authoritative in-memory list of debtors. Every
//! mutating operation rewrites the whole serialized collection through a
//! [`PersistencePort`], so the snapshot under the storage key always reflects
//! the list the user sees. The browser adapter lives in the frontend crate;
//! [`MemoryPort`] backs the tests and exercises the same JSON round trip.

use std::cell::RefCell;
use std::rc::Rc;

use crate::model::debtor::{Debtor, DebtorFields};

/// Key under which the whole collection is persisted.
pub const STORAGE_KEY: &str = "debtors";

/// Load/save interface hiding the concrete storage mechanism.
///
/// `load` is best-effort: a missing or corrupt snapshot yields an empty list.
/// `save` replaces the whole stored value atomically, which is what browser
/// local storage gives us for a single key.
pub trait PersistencePort {
    fn load(&self) -> Vec<Debtor>;
    fn save(&self, debtors: &[Debtor]);
}

/// Port keeping the serialized snapshot in memory.
///
/// Clones share the same snapshot cell, so a test can hold one clone, hand
/// another to the store, and observe what got persisted.
#[derive(Clone, Default)]
pub struct MemoryPort {
    snapshot: Rc<RefCell<Option<String>>>,
}

impl MemoryPort {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing serialized snapshot, as if a previous session
    /// had written it.
    pub fn seeded(text: &str) -> Self {
        Self {
            snapshot: Rc::new(RefCell::new(Some(text.to_string()))),
        }
    }

    /// The raw persisted snapshot, if any mutation has happened yet.
    pub fn snapshot(&self) -> Option<String> {
        self.snapshot.borrow().clone()
    }
}

impl PersistencePort for MemoryPort {
    fn load(&self) -> Vec<Debtor> {
        match self.snapshot.borrow().as_deref() {
            Some(text) => serde_json::from_str(text).unwrap_or_default(),
            None => Vec::new(),
        }
    }

    fn save(&self, debtors: &[Debtor]) {
        if let Ok(text) = serde_json::to_string(debtors) {
            *self.snapshot.borrow_mut() = Some(text);
        }
    }
}

/// Creation instant captured by the caller.
///
/// `epoch_millis` seeds the record id and `local_text` becomes the immutable
/// `date` field. The frontend builds this from `js_sys::Date`; tests build it
/// directly.
#[derive(Debug, Clone)]
pub struct Moment {
    pub epoch_millis: i64,
    pub local_text: String,
}

/// Authoritative ordered list of debtor records.
pub struct RecordStore {
    debtors: Vec<Debtor>,
    port: Box<dyn PersistencePort>,
}

impl RecordStore {
    /// Opens the store, seeding it from the persisted snapshot if present.
    pub fn open(port: Box<dyn PersistencePort>) -> Self {
        let debtors = port.load();
        Self { debtors, port }
    }

    pub fn all(&self) -> &[Debtor] {
        &self.debtors
    }

    pub fn get(&self, id: i64) -> Option<&Debtor> {
        self.debtors.iter().find(|d| d.id == id)
    }

    pub fn len(&self) -> usize {
        self.debtors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.debtors.is_empty()
    }

    /// Appends a new record.
    ///
    /// Returns `false` without touching the list when the address is empty or
    /// house/apartament are zero. The id starts from the creation instant and
    /// is bumped past any collision, so two creates inside the same
    /// millisecond still get distinct ids.
    pub fn add(&mut self, fields: DebtorFields, moment: Moment) -> bool {
        if fields.address.is_empty() || fields.house == 0 || fields.apartament == 0 {
            return false;
        }

        let mut id = moment.epoch_millis;
        while self.debtors.iter().any(|d| d.id == id) {
            id += 1;
        }

        let mut debtor = Debtor {
            id,
            date: moment.local_text,
            ..Debtor::default()
        };
        debtor.apply(fields);
        self.debtors.push(debtor);
        self.persist();
        true
    }

    /// Replaces the mutable fields of the record with this id, keeping its
    /// `id` and `date`. Returns `false` when the id is not present.
    pub fn update(&mut self, id: i64, fields: DebtorFields) -> bool {
        let Some(debtor) = self.debtors.iter_mut().find(|d| d.id == id) else {
            return false;
        };
        debtor.apply(fields);
        self.persist();
        true
    }

    /// Drops the record with this id. Returns `false` when the id is not
    /// present.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.debtors.len();
        self.debtors.retain(|d| d.id != id);
        if self.debtors.len() == before {
            return false;
        }
        self.persist();
        true
    }

    /// Wholesale replacement of the list, used by file import.
    pub fn replace_all(&mut self, debtors: Vec<Debtor>) {
        self.debtors = debtors;
        self.persist();
    }

    fn persist(&self) {
        self.port.save(&self.debtors);
    }
}
