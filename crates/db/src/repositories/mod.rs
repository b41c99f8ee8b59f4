//! Repository layer.
//!
//! [`CrudRepo`] is instantiated per single-key resource via its
//! [`crate::entity::Entity`] impl; the composite-key association has a
//! dedicated repository. All methods take `&PgPool` as the first argument.

pub mod atividade_aluno_repo;
pub mod crud_repo;

pub use atividade_aluno_repo::AtividadeAlunoRepo;
pub use crud_repo::CrudRepo;
