//! Example Repository Gateway
//!
//! Abstract trait defining the contract for Example persistence operations.
//! The repository exclusively owns SQL construction and row mapping; callers
//! never see raw rows.

use async_trait::async_trait;

use crate::domain::models::example::{CreateExampleData, Example, ExampleId, UpdateExampleData};
use crate::shared::errors::RepositoryError;

/// Repository trait for Example persistence operations
#[async_trait]
pub trait ExampleRepository: Send + Sync {
    /// Insert a new example; storage assigns id and timestamps and the full
    /// inserted row is returned
    async fn create(&self, data: &CreateExampleData) -> Result<Example, RepositoryError>;

    /// Find an example by its ID
    ///
    /// Zero matching rows is `RepositoryError::NotFound`, distinct from a
    /// query failure.
    async fn find_by_id(&self, id: &ExampleId) -> Result<Example, RepositoryError>;

    /// List examples ordered by creation time, `limit` rows starting at
    /// `offset`
    async fn list(&self, limit: u64, offset: u64) -> Result<Vec<Example>, RepositoryError>;

    /// Write the fields present in `data` and bump `updated_at`; an
    /// all-absent update is a timestamp-only bump
    async fn update(
        &self,
        id: &ExampleId,
        data: &UpdateExampleData,
    ) -> Result<Example, RepositoryError>;

    /// Hard delete; zero affected rows is `RepositoryError::NotFound`
    async fn delete(&self, id: &ExampleId) -> Result<(), RepositoryError>;
}
