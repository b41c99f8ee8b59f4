//! Handlers for the `/atividade-aluno` association resource.
//!
//! Keyed by `{id_atividade}/{id_aluno}` in the path instead of a single
//! generated id, so it gets its own handler set instead of the generic one.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use escola_core::error::CoreError;
use escola_core::types::DbId;
use escola_db::models::atividade_aluno::{AtividadeAluno, AtividadeAlunoInput};
use escola_db::repositories::AtividadeAlunoRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /atividade-aluno
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<AtividadeAlunoInput>,
) -> AppResult<(StatusCode, Json<AtividadeAluno>)> {
    let link = AtividadeAlunoRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(link)))
}

/// GET /atividade-aluno
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<AtividadeAluno>>> {
    let links = AtividadeAlunoRepo::list(&state.pool).await?;
    Ok(Json(links))
}

/// GET /atividade-aluno/{id_atividade}/{id_aluno}
pub async fn get_by_ids(
    State(state): State<AppState>,
    Path((id_atividade, id_aluno)): Path<(DbId, DbId)>,
) -> AppResult<Json<AtividadeAluno>> {
    let link = AtividadeAlunoRepo::find(&state.pool, id_atividade, id_aluno)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            message: AtividadeAluno::NOT_FOUND,
        }))?;
    Ok(Json(link))
}

/// PUT /atividade-aluno/{id_atividade}/{id_aluno}
///
/// Replaces the pair identified by the path with the pair from the body.
/// Acknowledges success even when no row matched.
pub async fn update(
    State(state): State<AppState>,
    Path((id_atividade, id_aluno)): Path<(DbId, DbId)>,
    Json(input): Json<AtividadeAlunoInput>,
) -> AppResult<Json<MessageResponse>> {
    let updated =
        AtividadeAlunoRepo::update(&state.pool, id_atividade, id_aluno, &input).await?;
    if updated.is_none() {
        tracing::debug!(id_atividade, id_aluno, "association update matched no row");
    }
    Ok(Json(MessageResponse {
        message: AtividadeAluno::UPDATED,
    }))
}

/// DELETE /atividade-aluno/{id_atividade}/{id_aluno}
pub async fn delete(
    State(state): State<AppState>,
    Path((id_atividade, id_aluno)): Path<(DbId, DbId)>,
) -> AppResult<Json<MessageResponse>> {
    let removed = AtividadeAlunoRepo::delete(&state.pool, id_atividade, id_aluno).await?;
    if !removed {
        tracing::debug!(id_atividade, id_aluno, "association delete matched no row");
    }
    Ok(Json(MessageResponse {
        message: AtividadeAluno::DELETED,
    }))
}
