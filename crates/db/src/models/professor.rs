//! Teacher (professor) model.

use escola_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::{FromRow, Postgres};

use crate::entity::Entity;

/// A row from the `professores` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Professor {
    pub id: DbId,
    pub nome_completo: String,
    pub email: String,
    pub telefone: String,
}

/// Full field set for creating or replacing a teacher.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfessorInput {
    pub nome_completo: String,
    pub email: String,
    pub telefone: String,
}

impl Entity for Professor {
    const TABLE: &'static str = "professores";
    const KEY_COLUMN: &'static str = "id";
    const DATA_COLUMNS: &'static [&'static str] = &["nome_completo", "email", "telefone"];
    const NOT_FOUND: &'static str = "Professor não encontrado";
    const UPDATED: &'static str = "Professor atualizado com sucesso";
    const DELETED: &'static str = "Professor deletado com sucesso";

    type Row = Professor;
    type Input = ProfessorInput;

    fn bind<'q, O>(
        query: QueryAs<'q, Postgres, O, PgArguments>,
        input: &'q ProfessorInput,
    ) -> QueryAs<'q, Postgres, O, PgArguments> {
        query
            .bind(&input.nome_completo)
            .bind(&input.email)
            .bind(&input.telefone)
    }
}
