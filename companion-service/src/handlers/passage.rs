//! Passage endpoints: `/api/scripture` and `/api/context`.
//!
//! Both endpoints reject a missing or blank `q` before any upstream call and
//! map gateway failures to a fixed 500 body. They share no state beyond the
//! gateway handles.

use crate::models::{ContextResponse, PassageParams, PassageQuery, ScriptureResponse};
use crate::startup::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use service_core::error::AppError;

pub const SCRIPTURE_FAILURE: &str = "Failed to fetch scripture.";
pub const CONTEXT_FAILURE: &str = "Failed to generate context.";

fn require_passage(params: &PassageParams) -> Result<PassageQuery, AppError> {
    PassageQuery::parse(params.q.as_deref()).map_err(|e| AppError::BadRequest(e.to_string()))
}

#[tracing::instrument(skip_all, fields(q = ?params.q))]
pub async fn get_scripture(
    State(state): State<AppState>,
    Query(params): Query<PassageParams>,
) -> Result<Json<ScriptureResponse>, AppError> {
    let passage = require_passage(&params)?;

    let passage_text = state
        .scripture
        .fetch_passage(&passage)
        .await
        .map_err(|e| AppError::UpstreamError(SCRIPTURE_FAILURE, e.into()))?;

    Ok(Json(ScriptureResponse { passage_text }))
}

#[tracing::instrument(skip_all, fields(q = ?params.q))]
pub async fn get_context(
    State(state): State<AppState>,
    Query(params): Query<PassageParams>,
) -> Result<Json<ContextResponse>, AppError> {
    let passage = require_passage(&params)?;

    let context_text = state
        .commentary
        .generate_commentary(&passage)
        .await
        .map_err(|e| AppError::UpstreamError(CONTEXT_FAILURE, e.into()))?;

    Ok(Json(ContextResponse { context_text }))
}
