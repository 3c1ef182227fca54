//! Route definitions for evaluation periods and criteria.
//!
//! ```text
//! GET    /                            list_periods
//! POST   /                            create_period
//! GET    /{id}                        get_period
//! PUT    /{id}                        update_period
//! DELETE /{id}                        delete_period
//! POST   /{id}/open                   open_period
//! POST   /{id}/close                  close_period
//! POST   /{id}/sync-evaluations       sync_evaluations
//! GET    /{id}/evaluations            list_period_evaluations
//! GET    /{id}/criteria               list_criteria
//! POST   /{id}/criteria               add_criterion
//! PUT    /{id}/criteria/{cid}         update_criterion
//! DELETE /{id}/criteria/{cid}         delete_criterion
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::period;
use crate::state::AppState;

/// Period-scoped routes, nested under `/evaluation-periods`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(period::list_periods).post(period::create_period))
        .route(
            "/{id}",
            get(period::get_period)
                .put(period::update_period)
                .delete(period::delete_period),
        )
        .route("/{id}/open", post(period::open_period))
        .route("/{id}/close", post(period::close_period))
        .route("/{id}/sync-evaluations", post(period::sync_evaluations))
        .route("/{id}/evaluations", get(period::list_period_evaluations))
        .route(
            "/{id}/criteria",
            get(period::list_criteria).post(period::add_criterion),
        )
        .route(
            "/{id}/criteria/{cid}",
            axum::routing::put(period::update_criterion).delete(period::delete_criterion),
        )
}

/// Default criteria catalog routes, nested under `/evaluation-criteria`.
///
/// ```text
/// GET    /defaults         list_default_criteria
/// POST   /defaults         create_default_criterion
/// PUT    /defaults/{id}    update_default_criterion
/// DELETE /defaults/{id}    delete_default_criterion
/// ```
pub fn defaults_router() -> Router<AppState> {
    Router::new()
        .route(
            "/defaults",
            get(period::list_default_criteria).post(period::create_default_criterion),
        )
        .route(
            "/defaults/{id}",
            axum::routing::put(period::update_default_criterion)
                .delete(period::delete_default_criterion),
        )
}
