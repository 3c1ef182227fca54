//! Route definitions for employee records and HR attendance management.
//!
//! ```text
//! GET    /                      list_employees
//! POST   /                      create_employee
//! GET    /{id}                  get_employee
//! PUT    /{id}                  update_employee
//! POST   /{id}/status           change_employment_status
//! GET    /{id}/attendance       employee_attendance
//! POST   /{id}/attendance       record_manual_attendance
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{attendance, employee};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(employee::list_employees).post(employee::create_employee),
        )
        .route(
            "/{id}",
            get(employee::get_employee).put(employee::update_employee),
        )
        .route("/{id}/status", post(employee::change_employment_status))
        .route(
            "/{id}/attendance",
            get(attendance::employee_attendance).post(attendance::record_manual_attendance),
        )
}
