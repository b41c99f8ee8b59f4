//! Payment (pagamento) model.

use chrono::NaiveDate;
use escola_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::{FromRow, Postgres};

use crate::entity::Entity;

/// A row from the `pagamentos` table.
///
/// `id_aluno` is passed through uninterpreted; the service performs no
/// referential check of its own.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Pagamento {
    pub id: DbId,
    pub id_aluno: DbId,
    pub data_pagamento: NaiveDate,
    pub valor_pago: f64,
    pub forma_pagamento: String,
    pub referencia: String,
    pub status: String,
}

/// Full field set for creating or replacing a payment.
#[derive(Debug, Clone, Deserialize)]
pub struct PagamentoInput {
    pub id_aluno: DbId,
    pub data_pagamento: NaiveDate,
    pub valor_pago: f64,
    pub forma_pagamento: String,
    pub referencia: String,
    pub status: String,
}

impl Entity for Pagamento {
    const TABLE: &'static str = "pagamentos";
    const KEY_COLUMN: &'static str = "id";
    const DATA_COLUMNS: &'static [&'static str] = &[
        "id_aluno",
        "data_pagamento",
        "valor_pago",
        "forma_pagamento",
        "referencia",
        "status",
    ];
    const NOT_FOUND: &'static str = "Pagamento não encontrado";
    const UPDATED: &'static str = "Pagamento atualizado com sucesso";
    const DELETED: &'static str = "Pagamento deletado com sucesso";

    type Row = Pagamento;
    type Input = PagamentoInput;

    fn bind<'q, O>(
        query: QueryAs<'q, Postgres, O, PgArguments>,
        input: &'q PagamentoInput,
    ) -> QueryAs<'q, Postgres, O, PgArguments> {
        query
            .bind(input.id_aluno)
            .bind(input.data_pagamento)
            .bind(input.valor_pago)
            .bind(&input.forma_pagamento)
            .bind(&input.referencia)
            .bind(&input.status)
    }
}
