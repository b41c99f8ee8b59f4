//! Entity models and input DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` row struct matching the database row
//! - A `Deserialize` input DTO carrying the full field set (used for both
//!   create and update — partial updates are not supported)
//! - An [`crate::entity::Entity`] impl wiring the resource into the generic
//!   CRUD repository (except the composite-key association)

pub mod aluno;
pub mod atividade;
pub mod atividade_aluno;
pub mod pagamento;
pub mod presenca;
pub mod professor;
pub mod turma;
pub mod usuario;
