use axum::{
    extract::{Query, State, rejection::QueryRejection},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shared::http::envelope::{Envelope, render};
use crate::shell::state::AppState;

pub const GET_STATS_ACTION: &str = "getStats";
pub const UNKNOWN_ACTION: &str = "unknown action";

#[derive(Deserialize)]
pub struct StatisticsParams {
    pub action: Option<String>,
    pub callback: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    params: Result<Query<StatisticsParams>, QueryRejection>,
) -> impl IntoResponse {
    // Without parsed params the callback is unknown, so the failure is bare JSON.
    let Query(params) = match params {
        Ok(params) => params,
        Err(e) => {
            tracing::info!(error = %e, "statistics query rejected");
            return render(&Envelope::failure(e.body_text()), None);
        }
    };
    let callback = params.callback.as_deref();

    if params.action.as_deref() != Some(GET_STATS_ACTION) {
        tracing::info!(action = ?params.action, "unknown statistics action");
        return render(&Envelope::failure(UNKNOWN_ACTION), callback);
    }

    match state.statistics_handler.handle().await {
        Ok(snapshot) => render(&Envelope::Data(snapshot), callback),
        Err(e) => {
            tracing::error!(error = %e, "statistics failed");
            render(&Envelope::failure(e), callback)
        }
    }
}
