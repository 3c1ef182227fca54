pub mod admin;
pub mod announcement;
pub mod attendance;
pub mod auth;
pub mod employee;
pub mod evaluation;
pub mod health;
pub mod me;
pub mod period;
pub mod task;
pub mod training;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                                      login (public)
/// /auth/refresh                                    refresh (public)
/// /auth/logout                                     logout (requires auth)
///
/// /admin/users                                     list, create (admin only)
/// /admin/users/{id}                                get, update
/// /admin/users/{id}/deactivate                     deactivate (POST)
/// /admin/users/{id}/reset-password                 reset password (POST)
///
/// /employees                                       list, create (HR/Admin)
/// /employees/{id}                                  get, update
/// /employees/{id}/status                           change employment status (POST)
/// /employees/{id}/attendance                       list, record manual (HR/Admin)
///
/// /evaluation-periods                              list, create (HR/Admin)
/// /evaluation-periods/{id}                         get, update, delete (draft only)
/// /evaluation-periods/{id}/open                    open + fan-out (POST)
/// /evaluation-periods/{id}/close                   close (POST)
/// /evaluation-periods/{id}/sync-evaluations        idempotent fan-out re-run (POST)
/// /evaluation-periods/{id}/evaluations             list period evaluations
/// /evaluation-periods/{id}/criteria                list, add (draft only)
/// /evaluation-periods/{id}/criteria/{cid}          update, delete (draft only)
///
/// /evaluation-criteria/defaults                    list, create (HR/Admin)
/// /evaluation-criteria/defaults/{id}               update, delete
///
/// /evaluations/{id}                                get (owner or HR/Admin)
/// /evaluations/{id}/submit                         submit self-assessment (owner)
/// /evaluations/{id}/approve                        approve + score (HR/Admin)
/// /evaluations/{id}/request-revision               request revision (HR/Admin)
///
/// /attendance/check-in                             check in (POST)
/// /attendance/check-out                            check out (POST)
///
/// /tasks                                           list, create (HR/Admin)
/// /tasks/{id}                                      get (assignee or HR/Admin)
/// /tasks/{id}/status                               change status (POST)
/// /tasks/{id}/reassign                             reassign (HR/Admin, POST)
///
/// /trainings                                       list, create
/// /trainings/{id}                                  get, update (draft only)
/// /trainings/{id}/open|complete|cancel             lifecycle (HR/Admin, POST)
/// /trainings/{id}/enroll                           enroll (staff, POST)
/// /trainings/{id}/drop                             drop enrollment (staff, POST)
/// /trainings/{id}/enrollments                      list enrollments (HR/Admin)
///
/// /announcements                                   list (audience-filtered), create
/// /announcements/{id}                              update, delete (HR/Admin)
/// /announcements/{id}/publish                      publish (HR/Admin, POST)
///
/// /me/employee                                     own employee record
/// /me/evaluations                                  own evaluations
/// /me/attendance                                   own attendance records
/// /me/tasks                                        own tasks
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (login, refresh, logout).
        .nest("/auth", auth::router())
        // Admin routes (user account management).
        .nest("/admin", admin::router())
        // Employee records and HR attendance management.
        .nest("/employees", employee::router())
        // Evaluation periods, lifecycle, and period criteria.
        .nest("/evaluation-periods", period::router())
        // Default criteria catalog.
        .nest("/evaluation-criteria", period::defaults_router())
        // Evaluation workflow (submit / approve / request-revision).
        .nest("/evaluations", evaluation::router())
        // Self-service attendance check-in/out.
        .nest("/attendance", attendance::router())
        // Task assignment and lifecycle.
        .nest("/tasks", task::router())
        // Training sessions and enrollments.
        .nest("/trainings", training::router())
        // Announcements.
        .nest("/announcements", announcement::router())
        // The authenticated user's own resources.
        .nest("/me", me::router())
}
