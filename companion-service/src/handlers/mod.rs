//! HTTP handlers for the companion service.

pub mod health;
pub mod passage;
