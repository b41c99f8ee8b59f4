//! The [`Entity`] trait: everything the generic CRUD machinery needs to know
//! about a single-key resource.
//!
//! Each of the service's resources repeats the exact same five operations
//! (insert, list, select by id, full-record update, delete). Instead of
//! restating that per table, a resource implements `Entity` once — table
//! name, key column, data columns in bind order, user-facing messages — and
//! [`crate::repositories::CrudRepo`] derives the SQL from it.

use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::{FromRow, Postgres};

pub trait Entity: Send + Sync + 'static {
    /// Table name as it appears in the schema.
    const TABLE: &'static str;

    /// Primary key column, assigned by the database on insert.
    const KEY_COLUMN: &'static str;

    /// Caller-supplied columns, in the order [`Entity::bind`] pushes them.
    const DATA_COLUMNS: &'static [&'static str];

    /// User-facing message for a get-by-id miss.
    const NOT_FOUND: &'static str;
    /// User-facing message acknowledging an update.
    const UPDATED: &'static str;
    /// User-facing message acknowledging a delete.
    const DELETED: &'static str;

    /// The stored row: key plus data columns.
    type Row: for<'r> FromRow<'r, PgRow> + Serialize + Send + Unpin + 'static;

    /// The full field set supplied on create and on update. Updates overwrite
    /// every field, so the same DTO serves both operations.
    type Input: DeserializeOwned + Send + Sync + 'static;

    /// Bind `input`'s fields onto `query`, in [`Entity::DATA_COLUMNS`] order.
    fn bind<'q, O>(
        query: QueryAs<'q, Postgres, O, PgArguments>,
        input: &'q Self::Input,
    ) -> QueryAs<'q, Postgres, O, PgArguments>;
}
