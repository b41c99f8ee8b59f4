//! Activity-student association model.
//!
//! The only resource with a caller-supplied composite key, so it does not go
//! through the generic [`crate::entity::Entity`] machinery. The schema
//! declares `(id_atividade, id_aluno)` as the primary key; inserting a
//! duplicate pair fails on that constraint.

use escola_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `atividade_aluno` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AtividadeAluno {
    pub id_atividade: DbId,
    pub id_aluno: DbId,
}

/// The pair supplied on create, or the replacement pair on update.
#[derive(Debug, Clone, Deserialize)]
pub struct AtividadeAlunoInput {
    pub id_atividade: DbId,
    pub id_aluno: DbId,
}

impl AtividadeAluno {
    pub const NOT_FOUND: &'static str = "Associação de atividade e aluno não encontrada";
    pub const UPDATED: &'static str = "Associação atualizada com sucesso";
    pub const DELETED: &'static str = "Associação deletada com sucesso";
}
