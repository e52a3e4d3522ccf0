//! # MiniBlog Shared
//!
//! Request and response types of the HTTP API.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};
