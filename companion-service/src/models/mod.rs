//! Domain models for the companion service.

pub mod passage;

pub use passage::{ContextResponse, EmptyPassage, PassageParams, PassageQuery, ScriptureResponse};
