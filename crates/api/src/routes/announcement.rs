//! Route definitions for announcements.
//!
//! ```text
//! GET    /                 list_announcements
//! POST   /                 create_announcement
//! PUT    /{id}             update_announcement
//! DELETE /{id}             delete_announcement
//! POST   /{id}/publish     publish_announcement
//! ```

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::announcement;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(announcement::list_announcements).post(announcement::create_announcement),
        )
        .route(
            "/{id}",
            put(announcement::update_announcement).delete(announcement::delete_announcement),
        )
        .route("/{id}/publish", post(announcement::publish_announcement))
}
