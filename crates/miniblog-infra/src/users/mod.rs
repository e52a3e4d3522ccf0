//! User directory implementations.

mod fixed;

pub use fixed::FixedUserDirectory;
