//! Activity log implementations.

mod memory;

pub use memory::InMemoryActivityLog;
