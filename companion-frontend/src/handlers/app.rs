use crate::models::view::{PanelView, Panels, ViewState, LOADING_CONTEXT, LOADING_SCRIPTURE};
use crate::AppState;
use askama::Template;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct PassageParams {
    pub q: Option<String>,
}

/// Full page. With `?q=` the lookup runs before rendering, so the page
/// also works without JavaScript.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub query: String,
    pub warning: Option<String>,
    pub panels: Panels,
    pub input_enabled: bool,
    pub loading_scripture: &'static str,
    pub loading_context: &'static str,
    pub oob: bool,
}

/// htmx response: warning plus both panels as out-of-band swaps.
#[derive(Template)]
#[template(path = "fragments/passage.html")]
pub struct PassageFragment {
    pub warning: Option<String>,
    pub panels: Panels,
    pub show_panels: bool,
    pub loading_scripture: &'static str,
    pub loading_context: &'static str,
    pub oob: bool,
}

/// Run one Idle → Loading → Settled cycle for `raw`.
async fn run_lookup(state: &AppState, raw: Option<&str>) -> (ViewState, Option<String>) {
    let mut view = ViewState::default();

    let Some(raw) = raw else {
        return (view, None);
    };

    let query = match view.submit(raw) {
        Ok(query) => query,
        Err(e) => return (view, Some(e.to_string())),
    };

    let result = state.companion_client.fetch_passage(&query).await;
    if let Err(e) = view.settle(result) {
        tracing::error!(passage = %query, error = %e, "Lookup settled out of order");
    }

    (view, None)
}

pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<PassageParams>,
) -> impl IntoResponse {
    let (view, warning) = run_lookup(&state, params.q.as_deref()).await;

    IndexTemplate {
        query: view
            .query()
            .map(|q| q.to_string())
            .unwrap_or_default(),
        warning,
        panels: view.panels(),
        input_enabled: view.input_enabled(),
        loading_scripture: LOADING_SCRIPTURE,
        loading_context: LOADING_CONTEXT,
        oob: false,
    }
}

pub async fn passage_fragment(
    State(state): State<AppState>,
    Query(params): Query<PassageParams>,
) -> impl IntoResponse {
    // A missing q on this route is the same user mistake as a blank one.
    let raw = params.q.as_deref().unwrap_or("");
    let (view, warning) = run_lookup(&state, Some(raw)).await;

    PassageFragment {
        show_panels: warning.is_none(),
        warning,
        panels: view.panels(),
        loading_scripture: LOADING_SCRIPTURE,
        loading_context: LOADING_CONTEXT,
        oob: true,
    }
}

pub async fn health_check() -> &'static str {
    "OK"
}
