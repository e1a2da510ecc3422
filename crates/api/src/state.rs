/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Built once in `main` and cloned per request; the pool is internally
/// reference-counted.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: brightclub_db::DbPool,
}
