//! Repository for the `atividade_aluno` association table.
//!
//! Keyed by the caller-supplied pair `(id_atividade, id_aluno)` rather than a
//! generated id, so it does not fit the generic [`crate::repositories::CrudRepo`].

use escola_core::types::DbId;
use sqlx::PgPool;

use crate::models::atividade_aluno::{AtividadeAluno, AtividadeAlunoInput};

/// CRUD operations for activity-student associations.
pub struct AtividadeAlunoRepo;

impl AtividadeAlunoRepo {
    /// Insert a new association, returning the stored pair.
    ///
    /// A duplicate pair violates the composite primary key and fails here.
    pub async fn create(
        pool: &PgPool,
        input: &AtividadeAlunoInput,
    ) -> Result<AtividadeAluno, sqlx::Error> {
        sqlx::query_as::<_, AtividadeAluno>(
            "INSERT INTO atividade_aluno (id_atividade, id_aluno)
             VALUES ($1, $2)
             RETURNING id_atividade, id_aluno",
        )
        .bind(input.id_atividade)
        .bind(input.id_aluno)
        .fetch_one(pool)
        .await
    }

    /// Select every association.
    pub async fn list(pool: &PgPool) -> Result<Vec<AtividadeAluno>, sqlx::Error> {
        sqlx::query_as::<_, AtividadeAluno>(
            "SELECT id_atividade, id_aluno FROM atividade_aluno",
        )
        .fetch_all(pool)
        .await
    }

    /// Select a single association by its composite key.
    pub async fn find(
        pool: &PgPool,
        id_atividade: DbId,
        id_aluno: DbId,
    ) -> Result<Option<AtividadeAluno>, sqlx::Error> {
        sqlx::query_as::<_, AtividadeAluno>(
            "SELECT id_atividade, id_aluno FROM atividade_aluno
             WHERE id_atividade = $1 AND id_aluno = $2",
        )
        .bind(id_atividade)
        .bind(id_aluno)
        .fetch_optional(pool)
        .await
    }

    /// Replace the pair identified by the path key with the pair from the
    /// body. Returns `None` when no row matched.
    pub async fn update(
        pool: &PgPool,
        id_atividade: DbId,
        id_aluno: DbId,
        input: &AtividadeAlunoInput,
    ) -> Result<Option<AtividadeAluno>, sqlx::Error> {
        sqlx::query_as::<_, AtividadeAluno>(
            "UPDATE atividade_aluno SET id_atividade = $1, id_aluno = $2
             WHERE id_atividade = $3 AND id_aluno = $4
             RETURNING id_atividade, id_aluno",
        )
        .bind(input.id_atividade)
        .bind(input.id_aluno)
        .bind(id_atividade)
        .bind(id_aluno)
        .fetch_optional(pool)
        .await
    }

    /// Delete an association by its composite key. Returns `true` if a row
    /// was removed.
    pub async fn delete(
        pool: &PgPool,
        id_atividade: DbId,
        id_aluno: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM atividade_aluno WHERE id_atividade = $1 AND id_aluno = $2",
        )
        .bind(id_atividade)
        .bind(id_aluno)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
