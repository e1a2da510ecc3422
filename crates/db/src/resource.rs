//! Generic CRUD over a single resource table.
//!
//! Each managed collection describes itself once through [`Resource`]: its
//! table, column list, row type, and the typed input accepted on create.
//! [`ResourceRepo`] turns that description into the three statements the API
//! needs (list, insert, delete by id).

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};

use brightclub_core::error::CoreError;

/// Static description of one resource table.
pub trait Resource: Send + Sync + 'static {
    /// A full row as returned by list and create.
    type Row: for<'r> FromRow<'r, PgRow> + Serialize + Send + Unpin;

    /// Raw request body. Every field is optional so validation can report
    /// which one is missing.
    type Payload: DeserializeOwned + Send;

    /// Validated create input.
    type New: TryFrom<Self::Payload, Error = CoreError> + Send + Sync;

    /// Table name.
    const TABLE: &'static str;

    /// Human-readable entity name, used in log messages.
    const ENTITY: &'static str;

    /// Columns returned by every read, in response order.
    ///
    /// `id` and `created_at` are cast to `BIGINT` / `TIMESTAMPTZ` so tables
    /// created earlier with `SERIAL` / `TIMESTAMP` still decode.
    const COLUMNS: &'static str;

    /// Columns written on insert, matching the order of [`Resource::insert_values`].
    const INSERT_COLUMNS: &'static [&'static str];

    /// `CREATE TABLE IF NOT EXISTS` statement for this table.
    const CREATE_TABLE: &'static str;

    /// Values bound to `$1..$n` on insert. `None` is stored as `NULL`.
    fn insert_values(input: &Self::New) -> Vec<Option<&str>>;
}

/// Provides list / create / delete for any [`Resource`].
pub struct ResourceRepo<R>(PhantomData<R>);

impl<R: Resource> ResourceRepo<R> {
    /// List every row, most recently created first.
    ///
    /// Rows sharing a `created_at` fall back to descending id.
    pub async fn list(pool: &PgPool) -> Result<Vec<R::Row>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM {} ORDER BY created_at DESC, id DESC",
            R::COLUMNS,
            R::TABLE
        );
        sqlx::query_as::<_, R::Row>(&query).fetch_all(pool).await
    }

    /// Insert a new row, returning it with its generated id and `created_at`.
    pub async fn create(pool: &PgPool, input: &R::New) -> Result<R::Row, sqlx::Error> {
        let query = insert_statement::<R>();
        let mut q = sqlx::query_as::<_, R::Row>(&query);
        for value in R::insert_values(input) {
            q = q.bind(value);
        }
        q.fetch_one(pool).await
    }

    /// Delete the row with the given id, returning the number of rows removed.
    ///
    /// The id is passed to Postgres as text and cast there, so a value that is
    /// not an integer fails with a database error rather than being rejected
    /// up front. Deleting an id that does not exist is not an error.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<u64, sqlx::Error> {
        let query = format!("DELETE FROM {} WHERE id = CAST($1 AS BIGINT)", R::TABLE);
        let result = sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(result.rows_affected())
    }
}

fn insert_statement<R: Resource>() -> String {
    let placeholders = (1..=R::INSERT_COLUMNS.len())
        .map(|i| format!("${i}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "INSERT INTO {} ({}) VALUES ({placeholders}) RETURNING {}",
        R::TABLE,
        R::INSERT_COLUMNS.join(", "),
        R::COLUMNS
    )
}
