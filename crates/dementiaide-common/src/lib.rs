//! dementiaide-common — Shared HTTP error surface used by every handler.

pub mod error;

pub use error::ApiError;
