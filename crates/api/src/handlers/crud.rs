//! Generic CRUD handlers, instantiated once per single-key resource.
//!
//! Each resource exposes the same five operations; the handler set is
//! parameterized by [`Entity`] and wired into a router by
//! [`crate::routes::crud_router`].

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use escola_core::error::CoreError;
use escola_core::types::DbId;
use escola_db::entity::Entity;
use escola_db::repositories::CrudRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /{resource} — insert a row, echoing it back with the generated id.
pub async fn create<E: Entity>(
    State(state): State<AppState>,
    Json(input): Json<E::Input>,
) -> AppResult<(StatusCode, Json<E::Row>)> {
    let row = CrudRepo::<E>::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /{resource} — every row, no ordering, pagination or filtering.
pub async fn list<E: Entity>(State(state): State<AppState>) -> AppResult<Json<Vec<E::Row>>> {
    let rows = CrudRepo::<E>::list(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /{resource}/{id} — single row, or the resource's 404 message.
pub async fn get_by_id<E: Entity>(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<E::Row>> {
    let row = CrudRepo::<E>::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            message: E::NOT_FOUND,
        }))?;
    Ok(Json(row))
}

/// PUT /{resource}/{id} — overwrite every field unconditionally.
///
/// A nonexistent id affects zero rows and still acknowledges success.
pub async fn update<E: Entity>(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<E::Input>,
) -> AppResult<Json<MessageResponse>> {
    let updated = CrudRepo::<E>::update(&state.pool, id, &input).await?;
    if updated.is_none() {
        tracing::debug!(table = E::TABLE, id, "update matched no row");
    }
    Ok(Json(MessageResponse { message: E::UPDATED }))
}

/// DELETE /{resource}/{id} — remove the row if present.
///
/// Acknowledges success whether or not a row existed.
pub async fn delete<E: Entity>(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let removed = CrudRepo::<E>::delete(&state.pool, id).await?;
    if !removed {
        tracing::debug!(table = E::TABLE, id, "delete matched no row");
    }
    Ok(Json(MessageResponse { message: E::DELETED }))
}
