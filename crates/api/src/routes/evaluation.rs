//! Route definitions for the evaluation workflow.
//!
//! ```text
//! GET    /{id}                      get_evaluation
//! POST   /{id}/submit               submit_self_assessment
//! POST   /{id}/approve              approve
//! POST   /{id}/request-revision     request_revision
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::evaluation;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}", get(evaluation::get_evaluation))
        .route("/{id}/submit", post(evaluation::submit_self_assessment))
        .route("/{id}/approve", post(evaluation::approve))
        .route("/{id}/request-revision", post(evaluation::request_revision))
}
