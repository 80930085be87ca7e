//! Repository Layer
//!
//! Storage and id ports, their implementations, and the todo repository.

mod traits;
mod memory;
mod file;
mod ids;
mod todo_repo;

#[cfg(test)]
mod tests;

pub use traits::{IdGenerator, KeyValueStorage};
pub use memory::MemoryStorage;
pub use file::FileStorage;
pub use ids::{SequentialIds, UuidGenerator};
pub use todo_repo::TodoRepository;
