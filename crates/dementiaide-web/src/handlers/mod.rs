//! HTTP handlers for all API routes.

pub mod advice;
pub mod catalog;
pub mod products;
pub mod system;
pub mod videos;
