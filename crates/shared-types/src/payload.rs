//! # Transaction Payload
//!
//! Wire format: UTF-8 `name-action-idListCsv-consumptionListCsv`.
//!
//! Record names are typically timestamps such as `2024-01-01T00`, so the
//! name may itself contain `-`. The three trailing fields never do (the
//! integers are unsigned), which is why payloads are split from the right.
//! `|` is reserved for separating stored records and may not appear in a name.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::int_list::{decode_int_list, encode_int_list};
use crate::{FIELD_DELIMITER, RECORD_DELIMITER};

/// Number of `-` separated fields in a payload.
pub const PAYLOAD_FIELDS: usize = 4;

/// Payload validation failures. Every variant rejects the transaction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    #[error("Invalid payload serialization")]
    Serialization,

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Invalid action: {0}")]
    InvalidAction(String),

    #[error("Invalid integer in {field}: {value}")]
    InvalidInteger { field: &'static str, value: String },

    #[error("ID list has {ids} entries but consumption list has {consumptions}")]
    LengthMismatch { ids: usize, consumptions: usize },

    #[error("Name {name:?} contains reserved character {reserved:?}")]
    ReservedCharacter { name: String, reserved: char },
}

/// Actions understood by the `we` family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Create or fully overwrite a record.
    Set,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Set => "set",
        }
    }
}

impl FromStr for Action {
    type Err = PayloadError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "set" => Ok(Action::Set),
            other => Err(PayloadError::InvalidAction(other.to_string())),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decoded transaction payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WePayload {
    pub name: String,
    pub action: Action,
    pub id_list: Vec<u64>,
    pub consumption_list: Vec<u64>,
}

impl WePayload {
    /// Build a validated `set` payload.
    pub fn set(
        name: impl Into<String>,
        id_list: Vec<u64>,
        consumption_list: Vec<u64>,
    ) -> Result<Self, PayloadError> {
        let payload = Self {
            name: name.into(),
            action: Action::Set,
            id_list,
            consumption_list,
        };
        payload.validate()?;
        Ok(payload)
    }

    /// Encode to the delimited wire string.
    pub fn to_bytes(&self) -> Vec<u8> {
        let delimiter = FIELD_DELIMITER.to_string();
        let id_list = encode_int_list(&self.id_list);
        let consumption_list = encode_int_list(&self.consumption_list);
        [
            self.name.as_str(),
            self.action.as_str(),
            id_list.as_str(),
            consumption_list.as_str(),
        ]
        .join(delimiter.as_str())
        .into_bytes()
    }

    /// Decode and validate a payload received in a transaction.
    pub fn from_bytes(payload: &[u8]) -> Result<Self, PayloadError> {
        let text = std::str::from_utf8(payload).map_err(|_| PayloadError::Serialization)?;
        let fields: Vec<&str> = text.rsplitn(PAYLOAD_FIELDS, FIELD_DELIMITER).collect();
        let [consumption_list, id_list, action, name] = fields[..] else {
            return Err(PayloadError::Serialization);
        };

        if name.is_empty() {
            return Err(PayloadError::MissingField("Name"));
        }
        if action.is_empty() {
            return Err(PayloadError::MissingField("Action"));
        }
        if id_list.is_empty() {
            return Err(PayloadError::MissingField("The ID list"));
        }
        if consumption_list.is_empty() {
            return Err(PayloadError::MissingField("The consumption list"));
        }
        let action: Action = action.parse()?;

        let payload = Self {
            name: name.to_string(),
            action,
            id_list: parse_list("ID list", id_list)?,
            consumption_list: parse_list("consumption list", consumption_list)?,
        };
        payload.validate()?;
        Ok(payload)
    }

    fn validate(&self) -> Result<(), PayloadError> {
        if self.name.is_empty() {
            return Err(PayloadError::MissingField("Name"));
        }
        if self.name.contains(RECORD_DELIMITER) {
            return Err(PayloadError::ReservedCharacter {
                name: self.name.clone(),
                reserved: RECORD_DELIMITER,
            });
        }
        if self.id_list.is_empty() {
            return Err(PayloadError::MissingField("The ID list"));
        }
        if self.consumption_list.is_empty() {
            return Err(PayloadError::MissingField("The consumption list"));
        }
        if self.id_list.len() != self.consumption_list.len() {
            return Err(PayloadError::LengthMismatch {
                ids: self.id_list.len(),
                consumptions: self.consumption_list.len(),
            });
        }
        Ok(())
    }
}

fn parse_list(field: &'static str, value: &str) -> Result<Vec<u64>, PayloadError> {
    decode_int_list(value).map_err(|_| PayloadError::InvalidInteger {
        field,
        value: value.to_string(),
    })
}
