//! Id generators.

use std::cell::Cell;

use uuid::Uuid;

use super::IdGenerator;

/// Random v4 UUIDs, hyphenated lowercase like `crypto.randomUUID()`
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic ids: `todo-1`, `todo-2`, ...
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: Cell<u64>,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.next.get() + 1;
        self.next.set(n);
        format!("todo-{n}")
    }
}
