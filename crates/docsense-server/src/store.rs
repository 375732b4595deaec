//! In-memory document store

use parking_lot::RwLock;
use std::collections::HashMap;

use crate::document::DocumentRecord;

/// Analyzed documents keyed by id
///
/// Records live for the lifetime of the process.
#[derive(Debug, Default)]
pub struct DocumentStore {
    records: RwLock<HashMap<String, DocumentRecord>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, record: DocumentRecord) {
        self.records.write().insert(record.id.clone(), record);
    }

    pub fn get(&self, id: &str) -> Option<DocumentRecord> {
        self.records.read().get(id).cloned()
    }

    /// Snapshot of every stored record
    pub fn all(&self) -> HashMap<String, DocumentRecord> {
        self.records.read().clone()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}
