//! Identifier types for the task domain.

use std::fmt;

/// Store-assigned primary key for a task record.
///
/// Keys are strictly increasing by insertion order and immutable once
/// assigned, which makes them the sole ordering criterion for recency
/// queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(i64);

impl TaskId {
    /// Creates a task identifier from a raw store key.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the wrapped key.
    #[must_use]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Human-readable display identifier of the form `TSK {n}`.
///
/// Distinct from [`TaskId`]: the display identifier is derived once at
/// creation time and never recomputed, while the primary key is assigned by
/// the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisplayId(String);

impl DisplayId {
    /// Builds the display identifier for the given sequence number.
    #[must_use]
    pub fn from_sequence(sequence: i64) -> Self {
        Self(format!("TSK {sequence}"))
    }

    /// Reconstructs a display identifier from its persisted string form.
    #[must_use]
    pub fn from_persisted(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DisplayId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for DisplayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
