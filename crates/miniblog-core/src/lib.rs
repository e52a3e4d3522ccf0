//! # MiniBlog Core
//!
//! The domain layer of MiniBlog.
//! Posts, likes, comments, activity entries and the port traits that the
//! in-memory infrastructure implements. No infrastructure dependencies.

pub mod analytics;
pub mod domain;
pub mod error;
pub mod ports;

pub use error::DomainError;
