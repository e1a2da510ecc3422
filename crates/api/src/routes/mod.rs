pub mod health;
pub mod resource;

use axum::Router;
use brightclub_db::models::customer_site::CustomerSites;
use brightclub_db::models::project::Projects;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /customer-sites          list, create
/// /customer-sites/{id}     delete
///
/// /projects                list, create
/// /projects/{id}           delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/customer-sites", resource::router::<CustomerSites>())
        .nest("/projects", resource::router::<Projects>())
}
