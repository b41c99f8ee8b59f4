//! Generic CRUD repository for single-key resources.
//!
//! The SQL for each operation is derived from the [`Entity`] constants, so
//! adding a resource means implementing `Entity` once instead of restating
//! the same five queries per table.

use std::marker::PhantomData;

use escola_core::types::DbId;
use sqlx::PgPool;

use crate::entity::Entity;

/// CRUD operations for any [`Entity`], parameterized by table name, key
/// column and data column list.
pub struct CrudRepo<E: Entity>(PhantomData<E>);

impl<E: Entity> CrudRepo<E> {
    /// `key, col1, col2, ...` — the select list shared across queries.
    fn select_columns() -> String {
        format!("{}, {}", E::KEY_COLUMN, E::DATA_COLUMNS.join(", "))
    }

    /// Insert a new row, returning it with the database-assigned key.
    pub async fn create(pool: &PgPool, input: &E::Input) -> Result<E::Row, sqlx::Error> {
        let placeholders: Vec<String> = (1..=E::DATA_COLUMNS.len())
            .map(|i| format!("${i}"))
            .collect();
        let query = format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
            E::TABLE,
            E::DATA_COLUMNS.join(", "),
            placeholders.join(", "),
            Self::select_columns(),
        );
        E::bind(sqlx::query_as::<_, E::Row>(&query), input)
            .fetch_one(pool)
            .await
    }

    /// Select every row, in the database's natural return order.
    pub async fn list(pool: &PgPool) -> Result<Vec<E::Row>, sqlx::Error> {
        let query = format!("SELECT {} FROM {}", Self::select_columns(), E::TABLE);
        sqlx::query_as::<_, E::Row>(&query).fetch_all(pool).await
    }

    /// Select a single row by key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<E::Row>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM {} WHERE {} = $1",
            Self::select_columns(),
            E::TABLE,
            E::KEY_COLUMN,
        );
        sqlx::query_as::<_, E::Row>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite every data column of the row with the given key.
    ///
    /// Returns `None` when no row matched; the caller decides whether that is
    /// an error (for this service it is not — the operation still reports
    /// success).
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &E::Input,
    ) -> Result<Option<E::Row>, sqlx::Error> {
        let assignments: Vec<String> = E::DATA_COLUMNS
            .iter()
            .enumerate()
            .map(|(i, col)| format!("{col} = ${}", i + 1))
            .collect();
        let query = format!(
            "UPDATE {} SET {} WHERE {} = ${} RETURNING {}",
            E::TABLE,
            assignments.join(", "),
            E::KEY_COLUMN,
            E::DATA_COLUMNS.len() + 1,
            Self::select_columns(),
        );
        E::bind(sqlx::query_as::<_, E::Row>(&query), input)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete the row with the given key. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!("DELETE FROM {} WHERE {} = $1", E::TABLE, E::KEY_COLUMN);
        let result = sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
