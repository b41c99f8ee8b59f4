//! User (usuário) model.
//!
//! `senha` is stored as supplied. Authentication is out of scope for this
//! service; the column is plain passthrough data.

use escola_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::{FromRow, Postgres};

use crate::entity::Entity;

/// A row from the `usuarios` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Usuario {
    pub id: DbId,
    pub login: String,
    pub senha: String,
    pub nivel_acesso: String,
    pub id_professor: DbId,
}

/// Full field set for creating or replacing a user.
#[derive(Debug, Clone, Deserialize)]
pub struct UsuarioInput {
    pub login: String,
    pub senha: String,
    pub nivel_acesso: String,
    pub id_professor: DbId,
}

impl Entity for Usuario {
    const TABLE: &'static str = "usuarios";
    const KEY_COLUMN: &'static str = "id";
    const DATA_COLUMNS: &'static [&'static str] =
        &["login", "senha", "nivel_acesso", "id_professor"];
    const NOT_FOUND: &'static str = "Usuário não encontrado";
    const UPDATED: &'static str = "Usuário atualizado com sucesso";
    const DELETED: &'static str = "Usuário deletado com sucesso";

    type Row = Usuario;
    type Input = UsuarioInput;

    fn bind<'q, O>(
        query: QueryAs<'q, Postgres, O, PgArguments>,
        input: &'q UsuarioInput,
    ) -> QueryAs<'q, Postgres, O, PgArguments> {
        query
            .bind(&input.login)
            .bind(&input.senha)
            .bind(&input.nivel_acesso)
            .bind(input.id_professor)
    }
}
