//! Activity (atividade) model.

use chrono::NaiveDate;
use escola_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::{FromRow, Postgres};

use crate::entity::Entity;

/// A row from the `atividades` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Atividade {
    pub id: DbId,
    pub descricao: String,
    pub data_realizacao: NaiveDate,
}

/// Full field set for creating or replacing an activity.
#[derive(Debug, Clone, Deserialize)]
pub struct AtividadeInput {
    pub descricao: String,
    pub data_realizacao: NaiveDate,
}

impl Entity for Atividade {
    const TABLE: &'static str = "atividades";
    const KEY_COLUMN: &'static str = "id";
    const DATA_COLUMNS: &'static [&'static str] = &["descricao", "data_realizacao"];
    const NOT_FOUND: &'static str = "Atividade não encontrada";
    const UPDATED: &'static str = "Atividade atualizada com sucesso";
    const DELETED: &'static str = "Atividade deletada com sucesso";

    type Row = Atividade;
    type Input = AtividadeInput;

    fn bind<'q, O>(
        query: QueryAs<'q, Postgres, O, PgArguments>,
        input: &'q AtividadeInput,
    ) -> QueryAs<'q, Postgres, O, PgArguments> {
        query.bind(&input.descricao).bind(input.data_realizacao)
    }
}
