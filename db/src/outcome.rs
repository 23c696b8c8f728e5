//! Results of write operations, reported back to clients as-is.

/// Result of an update that inserts when nothing matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpsertOutcome {
    /// Number of existing records the id matched (0 or 1).
    pub matched_count: u64,
    /// Number of records whose stored values actually changed.
    pub modified_count: u64,
    /// Id of the record created because nothing matched.
    pub upserted_id: Option<i64>,
}

impl UpsertOutcome {
    pub fn updated(modified: bool) -> Self {
        Self {
            matched_count: 1,
            modified_count: u64::from(modified),
            upserted_id: None,
        }
    }

    pub fn inserted(id: i64) -> Self {
        Self {
            matched_count: 0,
            modified_count: 0,
            upserted_id: Some(id),
        }
    }
}

/// Result of an owner-restricted delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The record exists but belongs to someone else; nothing was removed.
    NotOwner,
    NotFound,
}
