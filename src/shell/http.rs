use axum::{Router, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::modules::registrations::use_cases::get_statistics::inbound::http as statistics_http;
use crate::modules::registrations::use_cases::register_attendance::inbound::http as register_http;
use crate::shell::state::AppState;

/// One endpoint, like a form webhook: POST registers, GET serves statistics.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(statistics_http::handle).post(register_http::handle),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
