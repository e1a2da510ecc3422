//! Startup schema bootstrap.
//!
//! Tables are created with `CREATE TABLE IF NOT EXISTS`, so running this
//! against an initialized database is a no-op. Existing tables are never
//! altered.

use crate::models::customer_site::CustomerSites;
use crate::models::project::Projects;
use crate::pool::DbPool;
use crate::resource::Resource;

/// `(table, statement)` for every managed table, in creation order.
const TABLES: &[(&str, &str)] = &[
    (CustomerSites::TABLE, CustomerSites::CREATE_TABLE),
    (Projects::TABLE, Projects::CREATE_TABLE),
];

/// Ensure every resource table exists.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    for (table, statement) in TABLES {
        sqlx::query(statement).execute(pool).await?;
        tracing::info!(table, "Table ready");
    }
    Ok(())
}
