//! Route definitions for training sessions.
//!
//! ```text
//! GET    /                    list_trainings
//! POST   /                    create_training
//! GET    /{id}                get_training
//! PUT    /{id}                update_training
//! POST   /{id}/open           open_training
//! POST   /{id}/complete       complete_training
//! POST   /{id}/cancel         cancel_training
//! POST   /{id}/enroll         enroll
//! POST   /{id}/drop           drop_enrollment
//! GET    /{id}/enrollments    list_enrollments
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::training;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(training::list_trainings).post(training::create_training))
        .route(
            "/{id}",
            get(training::get_training).put(training::update_training),
        )
        .route("/{id}/open", post(training::open_training))
        .route("/{id}/complete", post(training::complete_training))
        .route("/{id}/cancel", post(training::cancel_training))
        .route("/{id}/enroll", post(training::enroll))
        .route("/{id}/drop", post(training::drop_enrollment))
        .route("/{id}/enrollments", get(training::list_enrollments))
}
