//! Page state: Idle, Loading, Settled.
//!
//! Idle → Loading on a non-blank submit; Loading → Settled once both panel
//! requests have completed. There is no cancellation: a submit while Loading
//! is refused.

use super::passage::{PassageQuery, PassageResult};
use crate::services::companion_client::ClientError;
use crate::utils::markdown::render_markdown;
use thiserror::Error;

pub const IDLE_SCRIPTURE: &str = "(The Bible text will appear here...)";
pub const IDLE_CONTEXT: &str = "(The historical context and commentary will appear here...)";
pub const LOADING_SCRIPTURE: &str = "Loading scripture...";
pub const LOADING_CONTEXT: &str = "Generating context with AI...";
pub const SCRIPTURE_NOT_FOUND: &str = "Could not find the requested passage.";
pub const CONTEXT_NOT_GENERATED: &str = "Could not generate context.";
pub const CONNECTION_ERROR: &str = "An error occurred while connecting to the server.";
pub const CONTEXT_CONNECTION_ERROR: &str = "An error occurred. Please check the server console.";
pub const EMPTY_QUERY_WARNING: &str = "Please enter a passage.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Please enter a passage.")]
    EmptyQuery,
    #[error("A lookup is already in progress")]
    Busy,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Results arrived while the page was not loading")]
pub struct NotLoading;

/// What one panel shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelView {
    /// Fixed status text (idle, loading or error).
    Placeholder(String),
    /// Literal passage text, shown pre-wrapped.
    Text(String),
    /// Commentary already rendered to HTML.
    Markdown(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panels {
    pub scripture: PanelView,
    pub context: PanelView,
}

#[derive(Debug, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Loading {
        query: PassageQuery,
    },
    Settled {
        query: PassageQuery,
        result: PassageResult,
    },
}

impl ViewState {
    /// Start a lookup. Blank input leaves the state untouched.
    pub fn submit(&mut self, raw: &str) -> Result<PassageQuery, SubmitError> {
        if matches!(self, ViewState::Loading { .. }) {
            return Err(SubmitError::Busy);
        }

        let query = PassageQuery::parse(raw).ok_or(SubmitError::EmptyQuery)?;
        *self = ViewState::Loading {
            query: query.clone(),
        };
        Ok(query)
    }

    /// Record both outcomes of the lookup started by [`ViewState::submit`].
    pub fn settle(&mut self, result: PassageResult) -> Result<(), NotLoading> {
        match std::mem::take(self) {
            ViewState::Loading { query } => {
                *self = ViewState::Settled { query, result };
                Ok(())
            }
            other => {
                *self = other;
                Err(NotLoading)
            }
        }
    }

    pub fn input_enabled(&self) -> bool {
        !matches!(self, ViewState::Loading { .. })
    }

    pub fn query(&self) -> Option<&PassageQuery> {
        match self {
            ViewState::Idle => None,
            ViewState::Loading { query } | ViewState::Settled { query, .. } => Some(query),
        }
    }

    pub fn panels(&self) -> Panels {
        match self {
            ViewState::Idle => Panels {
                scripture: PanelView::Placeholder(IDLE_SCRIPTURE.to_string()),
                context: PanelView::Placeholder(IDLE_CONTEXT.to_string()),
            },
            ViewState::Loading { .. } => Panels {
                scripture: PanelView::Placeholder(LOADING_SCRIPTURE.to_string()),
                context: PanelView::Placeholder(LOADING_CONTEXT.to_string()),
            },
            ViewState::Settled { result, .. } => Panels {
                scripture: scripture_panel(&result.scripture),
                context: context_panel(&result.context),
            },
        }
    }
}

fn scripture_panel(outcome: &Result<String, ClientError>) -> PanelView {
    match outcome {
        Ok(text) if !text.trim().is_empty() => PanelView::Text(text.clone()),
        Err(e) if e.is_connection() => PanelView::Placeholder(CONNECTION_ERROR.to_string()),
        _ => PanelView::Placeholder(SCRIPTURE_NOT_FOUND.to_string()),
    }
}

fn context_panel(outcome: &Result<String, ClientError>) -> PanelView {
    match outcome {
        Ok(text) if !text.trim().is_empty() => PanelView::Markdown(render_markdown(text)),
        Err(e) if e.is_connection() => {
            PanelView::Placeholder(CONTEXT_CONNECTION_ERROR.to_string())
        }
        _ => PanelView::Placeholder(CONTEXT_NOT_GENERATED.to_string()),
    }
}
