//! Post store implementations.

mod memory;

pub use memory::InMemoryPostStore;
