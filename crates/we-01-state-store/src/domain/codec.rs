//! # Bucket Encoding
//!
//! A bucket is stored as UTF-8 text: one `name-idListCsv-consumptionListCsv`
//! entry per record, entries joined by `|`.
//!
//! ## Canonical Form
//!
//! Entries are sorted lexicographically before joining. Two processes that
//! apply the same updates in a different order must write identical bytes,
//! otherwise their state roots diverge.
//!
//! Entries are split from the right because names such as `2024-01-01T00`
//! contain the field delimiter while the integer lists never do.

use shared_types::int_list::{decode_int_list, encode_int_list};
use shared_types::{FIELD_DELIMITER, RECORD_DELIMITER};

use super::{Bucket, Record, StateError};

/// Fields per stored record entry.
const ENTRY_FIELDS: usize = 3;

/// Encoder/decoder for stored buckets.
pub struct RecordCodec;

impl RecordCodec {
    pub fn encode(bucket: &Bucket) -> Vec<u8> {
        let field_delimiter = FIELD_DELIMITER.to_string();
        let record_delimiter = RECORD_DELIMITER.to_string();

        let mut entries: Vec<String> = bucket
            .iter()
            .map(|(name, record)| {
                [
                    name.clone(),
                    encode_int_list(&record.id_list),
                    encode_int_list(&record.consumption_list),
                ]
                .join(field_delimiter.as_str())
            })
            .collect();
        entries.sort();

        entries.join(record_delimiter.as_str()).into_bytes()
    }

    /// Decode stored bytes. Empty input is an empty bucket.
    pub fn decode(data: &[u8]) -> Result<Bucket, StateError> {
        if data.is_empty() {
            return Ok(Bucket::new());
        }
        let text = std::str::from_utf8(data)
            .map_err(|e| StateError::Deserialization(format!("invalid UTF-8: {}", e)))?;

        let mut bucket = Bucket::new();
        for entry in text.split(RECORD_DELIMITER) {
            let record = Self::decode_entry(entry)?;
            bucket.insert(record.name.clone(), record);
        }
        Ok(bucket)
    }

    fn decode_entry(entry: &str) -> Result<Record, StateError> {
        let fields: Vec<&str> = entry.rsplitn(ENTRY_FIELDS, FIELD_DELIMITER).collect();
        let [consumption_list, id_list, name] = fields[..] else {
            return Err(StateError::Deserialization(format!(
                "entry {:?} does not have {} fields",
                entry, ENTRY_FIELDS
            )));
        };
        if name.is_empty() {
            return Err(StateError::Deserialization(format!(
                "entry {:?} has an empty name",
                entry
            )));
        }

        let parse = |field: &str| {
            decode_int_list(field).map_err(|e| {
                StateError::Deserialization(format!("entry {:?}: {}", entry, e))
            })
        };
        Ok(Record::new(name, parse(id_list)?, parse(consumption_list)?))
    }
}
