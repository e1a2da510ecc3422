//! Route definitions shared by every resource collection.

use axum::routing::{delete, get};
use axum::Router;
use brightclub_db::Resource;

use crate::handlers::resource as handlers;
use crate::state::AppState;

/// Routes mounted at `/api/{resource}`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// DELETE /{id}    -> delete
/// ```
pub fn router<R: Resource>() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list::<R>).post(handlers::create::<R>))
        .route("/{id}", delete(handlers::delete::<R>))
}
