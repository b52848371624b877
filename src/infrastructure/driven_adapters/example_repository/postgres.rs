//! PostgreSQL Example Repository Implementation
//!
//! Implements the ExampleRepository trait using SQLx for PostgreSQL.
//! Static statements go through `query_as` with bound parameters; the
//! partial UPDATE is assembled with `QueryBuilder` so only present fields
//! produce SET clauses. Parameters are always bound, never interpolated.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::domain::gateways::ExampleRepository;
use crate::domain::models::example::{CreateExampleData, Example, ExampleId, UpdateExampleData};
use crate::shared::errors::RepositoryError;

/// Database row representation for the examples table
#[derive(Debug, sqlx::FromRow)]
struct ExampleRow {
    id: Uuid,
    name: String,
    lucky_number: f64,
    is_premium: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ExampleRow> for Example {
    fn from(row: ExampleRow) -> Self {
        Example::restore(
            ExampleId::from_uuid(row.id),
            row.name,
            row.lucky_number,
            row.is_premium,
            row.created_at,
            row.updated_at,
        )
    }
}

fn to_sql_u64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// PostgreSQL implementation of ExampleRepository
pub struct PostgresExampleRepository {
    pool: PgPool,
}

impl PostgresExampleRepository {
    /// Create a new PostgresExampleRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExampleRepository for PostgresExampleRepository {
    async fn create(&self, data: &CreateExampleData) -> Result<Example, RepositoryError> {
        let row = sqlx::query_as::<_, ExampleRow>(
            r#"
            INSERT INTO examples (name, lucky_number, is_premium)
            VALUES ($1, $2, $3)
            RETURNING id, name, lucky_number, is_premium, created_at, updated_at
            "#,
        )
        .bind(&data.name)
        .bind(data.lucky_number)
        .bind(data.is_premium)
        .fetch_one(&self.pool)
        .await?;

        Ok(Example::from(row))
    }

    async fn find_by_id(&self, id: &ExampleId) -> Result<Example, RepositoryError> {
        let row = sqlx::query_as::<_, ExampleRow>(
            r#"
            SELECT id, name, lucky_number, is_premium, created_at, updated_at
            FROM examples
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Example::from)
            .ok_or_else(|| RepositoryError::NotFound(format!("example {id}")))
    }

    async fn list(&self, limit: u64, offset: u64) -> Result<Vec<Example>, RepositoryError> {
        let rows = sqlx::query_as::<_, ExampleRow>(
            r#"
            SELECT id, name, lucky_number, is_premium, created_at, updated_at
            FROM examples
            ORDER BY created_at ASC, id ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(to_sql_u64(limit))
        .bind(to_sql_u64(offset))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Example::from).collect())
    }

    async fn update(
        &self,
        id: &ExampleId,
        data: &UpdateExampleData,
    ) -> Result<Example, RepositoryError> {
        // The timestamp is always bumped, even when no field is present
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE examples SET updated_at = NOW()");

        if let Some(name) = &data.name {
            builder.push(", name = ").push_bind(name);
        }
        if let Some(lucky_number) = data.lucky_number {
            builder.push(", lucky_number = ").push_bind(lucky_number);
        }
        if let Some(is_premium) = data.is_premium {
            builder.push(", is_premium = ").push_bind(is_premium);
        }

        builder.push(" WHERE id = ").push_bind(id.as_uuid());
        builder.push(" RETURNING id, name, lucky_number, is_premium, created_at, updated_at");

        let row = builder
            .build_query_as::<ExampleRow>()
            .fetch_optional(&self.pool)
            .await?;

        row.map(Example::from)
            .ok_or_else(|| RepositoryError::NotFound(format!("example {id}")))
    }

    async fn delete(&self, id: &ExampleId) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            DELETE FROM examples
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("example {id}")));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_sql_u64_clamps_oversized_values() {
        assert_eq!(to_sql_u64(10), 10);
        assert_eq!(to_sql_u64(u64::MAX), i64::MAX);
    }
}
