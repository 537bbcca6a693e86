//! Identifier generation.
//!
//! Every seeded row gets a fresh identifier at emission time. Production runs
//! use random v4 UUIDs; tests substitute [`SequentialIds`] so rendered output
//! is predictable.

use std::cell::Cell;

use uuid::Uuid;

/// Produces a new unique identifier on every call.
pub trait IdGenerator {
    fn generate_id(&self) -> String;
}

/// Random v4 UUIDs in hyphenated lowercase form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn generate_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic `"{prefix}-0001"`, `"{prefix}-0002"`, ... sequence.
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    next: Cell<u64>,
}

impl SequentialIds {
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: Cell::new(1),
        }
    }

    /// Number of identifiers handed out so far.
    #[must_use]
    pub fn issued(&self) -> u64 {
        self.next.get() - 1
    }
}

impl IdGenerator for SequentialIds {
    fn generate_id(&self) -> String {
        let n = self.next.get();
        self.next.set(n + 1);
        format!("{}-{n:04}", self.prefix)
    }
}
