//! Request handlers.
//!
//! [`crud`] provides the generic create/list/get/update/delete handler set
//! used by every single-key resource; [`atividade_aluno`] covers the
//! composite-key association. Handlers delegate to the repositories in
//! `escola_db` and map errors via [`crate::error::AppError`].

pub mod atividade_aluno;
pub mod crud;
