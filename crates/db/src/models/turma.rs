//! Class (turma) model.

use escola_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::{FromRow, Postgres};

use crate::entity::Entity;

/// A row from the `turmas` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Turma {
    pub id: DbId,
    pub nome_turma: String,
    pub id_professor: DbId,
    pub horario: String,
}

/// Full field set for creating or replacing a class.
#[derive(Debug, Clone, Deserialize)]
pub struct TurmaInput {
    pub nome_turma: String,
    pub id_professor: DbId,
    pub horario: String,
}

impl Entity for Turma {
    const TABLE: &'static str = "turmas";
    const KEY_COLUMN: &'static str = "id";
    const DATA_COLUMNS: &'static [&'static str] = &["nome_turma", "id_professor", "horario"];
    const NOT_FOUND: &'static str = "Turma não encontrada";
    const UPDATED: &'static str = "Turma atualizada com sucesso";
    const DELETED: &'static str = "Turma deletada com sucesso";

    type Row = Turma;
    type Input = TurmaInput;

    fn bind<'q, O>(
        query: QueryAs<'q, Postgres, O, PgArguments>,
        input: &'q TurmaInput,
    ) -> QueryAs<'q, Postgres, O, PgArguments> {
        query
            .bind(&input.nome_turma)
            .bind(input.id_professor)
            .bind(&input.horario)
    }
}
