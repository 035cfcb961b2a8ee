//! Opaque id generation for schedules and matches.

use uuid::Uuid;

/// Source of unique opaque ids (one per schedule, one per match).
///
/// Injected into the engine so schedules can be regenerated byte-equal with
/// a fixed id sequence; the engine never reaches for a global source.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Default generator: random v4 UUID strings.
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic generator: `{prefix}1`, `{prefix}2`, ... Used in tests.
#[derive(Clone, Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: u64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 0,
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> String {
        self.next += 1;
        format!("{}{}", self.prefix, self.next)
    }
}
