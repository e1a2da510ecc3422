//! Generic handlers shared by every resource collection.
//!
//! Each handler is instantiated per [`Resource`] by
//! [`routes::resource::router`](crate::routes::resource::router).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use brightclub_db::{Resource, ResourceRepo};

use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::state::AppState;

/// GET /api/{resource}
pub async fn list<R: Resource>(State(state): State<AppState>) -> AppResult<Json<Vec<R::Row>>> {
    let rows = ResourceRepo::<R>::list(&state.pool).await?;
    Ok(Json(rows))
}

/// POST /api/{resource}
pub async fn create<R: Resource>(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<R::Payload>,
) -> AppResult<(StatusCode, Json<R::Row>)> {
    let input = R::New::try_from(body)?;
    let row = ResourceRepo::<R>::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// DELETE /api/{resource}/{id}
///
/// The id is forwarded as-is; deleting an absent row still answers 204.
pub async fn delete<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let removed = ResourceRepo::<R>::delete(&state.pool, &id).await?;
    tracing::debug!(entity = R::ENTITY, %id, removed, "Delete processed");
    Ok(StatusCode::NO_CONTENT)
}
