//! Attendance (presença) model.

use chrono::NaiveDate;
use escola_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::{FromRow, Postgres};

use crate::entity::Entity;

/// A row from the `presencas` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Presenca {
    pub id: DbId,
    pub id_aluno: DbId,
    pub data_presenca: NaiveDate,
    pub presente: bool,
}

/// Full field set for creating or replacing an attendance record.
#[derive(Debug, Clone, Deserialize)]
pub struct PresencaInput {
    pub id_aluno: DbId,
    pub data_presenca: NaiveDate,
    pub presente: bool,
}

impl Entity for Presenca {
    const TABLE: &'static str = "presencas";
    const KEY_COLUMN: &'static str = "id";
    const DATA_COLUMNS: &'static [&'static str] = &["id_aluno", "data_presenca", "presente"];
    const NOT_FOUND: &'static str = "Presença não encontrada";
    const UPDATED: &'static str = "Presença atualizada com sucesso";
    const DELETED: &'static str = "Presença deletada com sucesso";

    type Row = Presenca;
    type Input = PresencaInput;

    fn bind<'q, O>(
        query: QueryAs<'q, Postgres, O, PgArguments>,
        input: &'q PresencaInput,
    ) -> QueryAs<'q, Postgres, O, PgArguments> {
        query
            .bind(input.id_aluno)
            .bind(input.data_presenca)
            .bind(input.presente)
    }
}
