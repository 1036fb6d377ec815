use axum::{
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    response::IntoResponse,
};
use chrono::Utc;

use crate::modules::registrations::use_cases::register_attendance::command::RegisterAttendance;
use crate::modules::registrations::use_cases::register_attendance::handler::ApplicationError;
use crate::modules::registrations::use_cases::register_attendance::submission::Submission;
use crate::shared::http::envelope::{Envelope, render};
use crate::shell::state::AppState;

pub const SUCCESS_MESSAGE: &str = "registration saved";

/// The body is parsed as JSON whatever the declared content type: cross-origin form
/// posts arrive as `text/plain`.
pub async fn handle(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> impl IntoResponse {
    let body = match body {
        Ok(body) => body,
        Err(e) => {
            tracing::error!(error = %e, "registration body could not be read");
            return render(&Envelope::failure(e.body_text()), None);
        }
    };
    let payload = match serde_json::from_slice::<serde_json::Value>(&body) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::error!(error = %e, "registration body is not valid JSON");
            return render(&Envelope::failure(format!("invalid JSON body: {e}")), None);
        }
    };

    let command = RegisterAttendance {
        submission: Submission::from_value(&payload),
        received_at: Utc::now(),
    };

    match state.register_handler.handle(command).await {
        Ok(_) => render(&Envelope::message(SUCCESS_MESSAGE), None),
        Err(e @ ApplicationError::Validation(_)) => {
            tracing::info!(error = %e, "registration rejected");
            render(&Envelope::failure(e), None)
        }
        Err(e) => {
            tracing::error!(error = %e, "registration failed");
            render(&Envelope::failure(e), None)
        }
    }
}
