//! Route definitions for the authenticated user's own resources.
//!
//! ```text
//! GET    /employee       my_employee_record
//! GET    /evaluations    my_evaluations
//! GET    /attendance     my_attendance
//! GET    /tasks          my_tasks
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::{attendance, employee, evaluation, task};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/employee", get(employee::my_employee_record))
        .route("/evaluations", get(evaluation::my_evaluations))
        .route("/attendance", get(attendance::my_attendance))
        .route("/tasks", get(task::my_tasks))
}
