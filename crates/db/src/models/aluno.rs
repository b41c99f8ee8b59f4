//! Student (aluno) model.

use escola_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::{FromRow, Postgres};

use crate::entity::Entity;

/// A row from the `alunos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Aluno {
    pub id: DbId,
    pub nome: String,
    pub idade: i32,
    pub turma: String,
}

/// Full field set for creating or replacing a student.
#[derive(Debug, Clone, Deserialize)]
pub struct AlunoInput {
    pub nome: String,
    pub idade: i32,
    pub turma: String,
}

impl Entity for Aluno {
    const TABLE: &'static str = "alunos";
    const KEY_COLUMN: &'static str = "id";
    const DATA_COLUMNS: &'static [&'static str] = &["nome", "idade", "turma"];
    const NOT_FOUND: &'static str = "Aluno não encontrado";
    const UPDATED: &'static str = "Aluno atualizado com sucesso";
    const DELETED: &'static str = "Aluno deletado com sucesso";

    type Row = Aluno;
    type Input = AlunoInput;

    fn bind<'q, O>(
        query: QueryAs<'q, Postgres, O, PgArguments>,
        input: &'q AlunoInput,
    ) -> QueryAs<'q, Postgres, O, PgArguments> {
        query.bind(&input.nome).bind(input.idade).bind(&input.turma)
    }
}
