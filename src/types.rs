//! Core types for the board.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Unique identifier for a record.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordId(pub u64);

impl fmt::Debug for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecordId({})", self.0)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Microseconds since Unix epoch.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// Current time. Clocks set before the epoch read as zero.
    pub fn now() -> Self {
        let micros = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_micros() as i64)
            .unwrap_or(0);
        Timestamp(micros)
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({})", self.0)
    }
}

/// Lifecycle state of a record. Also the category a view selects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    #[default]
    Active,
    Finished,
}

impl RecordStatus {
    /// Lowercase name used in element ids.
    pub fn as_str(self) -> &'static str {
        match self {
            RecordStatus::Active => "active",
            RecordStatus::Finished => "finished",
        }
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single submitted unit of work.
///
/// Everything except `status` is fixed once the store has accepted it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Unique identifier (assigned by store).
    pub id: RecordId,

    pub title: String,

    pub description: String,

    /// Number of people the record calls for.
    pub capacity: u32,

    pub status: RecordStatus,

    /// When the store accepted the record.
    pub created: Timestamp,
}

/// Input that passed validation and is ready to be committed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedInput {
    pub title: String,
    pub description: String,
    pub capacity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_defaults_to_active() {
        assert_eq!(RecordStatus::default(), RecordStatus::Active);
        assert_eq!(RecordStatus::Finished.to_string(), "finished");
    }

    #[test]
    fn test_record_json_shape() {
        let record = Record {
            id: RecordId(7),
            title: "Build API".into(),
            description: "Design and implement".into(),
            capacity: 3,
            status: RecordStatus::Active,
            created: Timestamp(0),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["status"], "active");

        let back: Record = serde_json::from_value(value).unwrap();
        assert_eq!(back, record);
    }
}
