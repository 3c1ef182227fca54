//! Route definitions for assigned tasks.
//!
//! ```text
//! GET    /                 list_tasks
//! POST   /                 create_task
//! GET    /{id}             get_task
//! POST   /{id}/status      change_task_status
//! POST   /{id}/reassign    reassign_task
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::task;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(task::list_tasks).post(task::create_task))
        .route("/{id}", get(task::get_task))
        .route("/{id}/status", post(task::change_task_status))
        .route("/{id}/reassign", post(task::reassign_task))
}
