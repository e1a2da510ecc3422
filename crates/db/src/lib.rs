//! Persistence layer: Postgres connection pool, schema bootstrap, and the
//! generic repository shared by every resource table.

pub mod models;
pub mod pool;
pub mod resource;
pub mod schema;

pub use pool::{connect_options, create_pool, health_check, DbConfig, DbPool};
pub use resource::{Resource, ResourceRepo};
pub use schema::ensure_schema;
