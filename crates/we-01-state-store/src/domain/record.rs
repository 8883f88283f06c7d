//! Records and the buckets that group them by address.

use std::collections::HashMap;

use shared_types::WePayload;

/// Consumption readings recorded under one name (typically a date and hour).
///
/// `id_list[i]` is the participant whose reading is `consumption_list[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub id_list: Vec<u64>,
    pub consumption_list: Vec<u64>,
}

impl Record {
    pub fn new(name: impl Into<String>, id_list: Vec<u64>, consumption_list: Vec<u64>) -> Self {
        Self {
            name: name.into(),
            id_list,
            consumption_list,
        }
    }
}

impl From<&WePayload> for Record {
    fn from(payload: &WePayload) -> Self {
        Record::new(
            payload.name.clone(),
            payload.id_list.clone(),
            payload.consumption_list.clone(),
        )
    }
}

/// All records stored at one address, keyed by name.
///
/// Iteration order is unspecified; `RecordCodec::encode` is responsible for
/// producing a canonical byte form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bucket {
    records: HashMap<String, Record>,
}

impl Bucket {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Insert under `name`, replacing any previous record in full.
    pub fn insert(&mut self, name: impl Into<String>, record: Record) -> Option<Record> {
        self.records.insert(name.into(), record)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Record)> {
        self.records.iter()
    }
}

impl FromIterator<Record> for Bucket {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut bucket = Bucket::new();
        for record in iter {
            bucket.insert(record.name.clone(), record);
        }
        bucket
    }
}
