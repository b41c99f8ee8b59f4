//! Route tree.
//!
//! One router per resource, all mounted at the root:
//!
//! ```text
//! GET    /health
//!
//! /alunos, /atividades, /pagamentos, /presencas,
//! /professores, /turmas, /usuarios:
//!   GET    /              -> list
//!   POST   /              -> create
//!   GET    /{id}          -> get_by_id
//!   PUT    /{id}          -> update
//!   DELETE /{id}          -> delete
//!
//! /atividade-aluno:
//!   GET    /                           -> list
//!   POST   /                           -> create
//!   GET    /{id_atividade}/{id_aluno}  -> get_by_ids
//!   PUT    /{id_atividade}/{id_aluno}  -> update
//!   DELETE /{id_atividade}/{id_aluno}  -> delete
//! ```

pub mod health;

use axum::routing::get;
use axum::Router;
use escola_db::entity::Entity;
use escola_db::models::aluno::Aluno;
use escola_db::models::atividade::Atividade;
use escola_db::models::pagamento::Pagamento;
use escola_db::models::presenca::Presenca;
use escola_db::models::professor::Professor;
use escola_db::models::turma::Turma;
use escola_db::models::usuario::Usuario;

use crate::handlers::{atividade_aluno, crud};
use crate::state::AppState;

/// Build the full API route tree (health excluded; see `main.rs`).
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/alunos", crud_router::<Aluno>())
        .nest("/atividades", crud_router::<Atividade>())
        .nest("/atividade-aluno", atividade_aluno_router())
        .nest("/pagamentos", crud_router::<Pagamento>())
        .nest("/presencas", crud_router::<Presenca>())
        .nest("/professores", crud_router::<Professor>())
        .nest("/turmas", crud_router::<Turma>())
        .nest("/usuarios", crud_router::<Usuario>())
}

/// The five-operation router shared by every single-key resource.
pub fn crud_router<E: Entity>() -> Router<AppState> {
    Router::new()
        .route("/", get(crud::list::<E>).post(crud::create::<E>))
        .route(
            "/{id}",
            get(crud::get_by_id::<E>)
                .put(crud::update::<E>)
                .delete(crud::delete::<E>),
        )
}

/// Router for the composite-key association resource.
fn atividade_aluno_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(atividade_aluno::list).post(atividade_aluno::create),
        )
        .route(
            "/{id_atividade}/{id_aluno}",
            get(atividade_aluno::get_by_ids)
                .put(atividade_aluno::update)
                .delete(atividade_aluno::delete),
        )
}
