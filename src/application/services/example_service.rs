//! Example Service
//!
//! The seam between the HTTP handlers and the repository. Pure delegation
//! today; the place where cross-cutting business rules (authorization
//! checks, event emission, multi-repository coordination) would land without
//! touching handler or repository code.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::gateways::ExampleRepository;
use crate::domain::models::example::{CreateExampleData, Example, ExampleId, UpdateExampleData};
use crate::shared::errors::RepositoryError;

/// Service trait mirroring the repository's five operations
///
/// Handlers depend on this trait so tests can substitute an implementation
/// without a live database.
#[async_trait]
pub trait ExampleService: Send + Sync {
    async fn create(&self, data: CreateExampleData) -> Result<Example, RepositoryError>;

    async fn get_by_id(&self, id: &ExampleId) -> Result<Example, RepositoryError>;

    async fn list(&self, limit: u64, offset: u64) -> Result<Vec<Example>, RepositoryError>;

    async fn update(
        &self,
        id: &ExampleId,
        data: UpdateExampleData,
    ) -> Result<Example, RepositoryError>;

    async fn delete(&self, id: &ExampleId) -> Result<(), RepositoryError>;
}

/// Default implementation delegating straight to the repository
pub struct DefaultExampleService {
    example_repository: Arc<dyn ExampleRepository>,
}

impl DefaultExampleService {
    /// Create a new DefaultExampleService
    #[must_use]
    pub fn new(example_repository: Arc<dyn ExampleRepository>) -> Self {
        Self { example_repository }
    }
}

#[async_trait]
impl ExampleService for DefaultExampleService {
    async fn create(&self, data: CreateExampleData) -> Result<Example, RepositoryError> {
        tracing::info!(name = %data.name, "creating example");
        let created = self.example_repository.create(&data).await?;
        tracing::info!(example_id = %created.id(), "example created");
        Ok(created)
    }

    async fn get_by_id(&self, id: &ExampleId) -> Result<Example, RepositoryError> {
        tracing::debug!(example_id = %id, "getting example by id");
        self.example_repository.find_by_id(id).await
    }

    async fn list(&self, limit: u64, offset: u64) -> Result<Vec<Example>, RepositoryError> {
        tracing::debug!(limit, offset, "listing examples");
        self.example_repository.list(limit, offset).await
    }

    async fn update(
        &self,
        id: &ExampleId,
        data: UpdateExampleData,
    ) -> Result<Example, RepositoryError> {
        tracing::info!(example_id = %id, "updating example");
        self.example_repository.update(id, &data).await
    }

    async fn delete(&self, id: &ExampleId) -> Result<(), RepositoryError> {
        tracing::info!(example_id = %id, "deleting example");
        self.example_repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::Mutex;

    struct MockExampleRepository {
        create_result: Mutex<Option<Result<Example, RepositoryError>>>,
        find_by_id_result: Mutex<Option<Result<Example, RepositoryError>>>,
        delete_result: Mutex<Option<Result<(), RepositoryError>>>,
    }

    impl MockExampleRepository {
        fn new() -> Self {
            Self {
                create_result: Mutex::new(None),
                find_by_id_result: Mutex::new(None),
                delete_result: Mutex::new(None),
            }
        }

        fn with_create(self, result: Result<Example, RepositoryError>) -> Self {
            *self.create_result.lock().unwrap() = Some(result);
            self
        }

        fn with_find_by_id(self, result: Result<Example, RepositoryError>) -> Self {
            *self.find_by_id_result.lock().unwrap() = Some(result);
            self
        }

        fn with_delete(self, result: Result<(), RepositoryError>) -> Self {
            *self.delete_result.lock().unwrap() = Some(result);
            self
        }
    }

    #[async_trait]
    impl ExampleRepository for MockExampleRepository {
        async fn create(&self, data: &CreateExampleData) -> Result<Example, RepositoryError> {
            self.create_result
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Ok(test_example(&data.name)))
        }

        async fn find_by_id(&self, id: &ExampleId) -> Result<Example, RepositoryError> {
            self.find_by_id_result
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Err(RepositoryError::NotFound(id.to_string())))
        }

        async fn list(&self, _limit: u64, _offset: u64) -> Result<Vec<Example>, RepositoryError> {
            Ok(vec![])
        }

        async fn update(
            &self,
            id: &ExampleId,
            _data: &UpdateExampleData,
        ) -> Result<Example, RepositoryError> {
            Err(RepositoryError::NotFound(id.to_string()))
        }

        async fn delete(&self, id: &ExampleId) -> Result<(), RepositoryError> {
            self.delete_result
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Err(RepositoryError::NotFound(id.to_string())))
        }
    }

    fn test_example(name: &str) -> Example {
        let now = Utc::now();
        Example::restore(ExampleId::new(), name.to_string(), 42.0, false, now, now)
    }

    #[tokio::test]
    async fn create_delegates_to_repository() {
        let repo = Arc::new(MockExampleRepository::new());
        let service = DefaultExampleService::new(repo);

        let data = CreateExampleData {
            name: "Widget".to_string(),
            lucky_number: 42.0,
            is_premium: false,
        };
        let created = service.create(data).await.unwrap();
        assert_eq!(created.name(), "Widget");
    }

    #[tokio::test]
    async fn create_forwards_repository_errors_unchanged() {
        let repo = Arc::new(
            MockExampleRepository::new().with_create(Err(RepositoryError::Database(
                sqlx::Error::PoolClosed,
            ))),
        );
        let service = DefaultExampleService::new(repo);

        let data = CreateExampleData {
            name: "Widget".to_string(),
            lucky_number: 42.0,
            is_premium: false,
        };
        let result = service.create(data).await;
        assert!(matches!(result, Err(RepositoryError::Database(_))));
    }

    #[tokio::test]
    async fn get_by_id_returns_found_example() {
        let example = test_example("Widget");
        let repo =
            Arc::new(MockExampleRepository::new().with_find_by_id(Ok(example.clone())));
        let service = DefaultExampleService::new(repo);

        let found = service.get_by_id(example.id()).await.unwrap();
        assert_eq!(found, example);
    }

    #[tokio::test]
    async fn get_by_id_forwards_not_found() {
        let repo = Arc::new(MockExampleRepository::new());
        let service = DefaultExampleService::new(repo);

        let result = service.get_by_id(&ExampleId::new()).await;
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_forwards_not_found() {
        let repo = Arc::new(MockExampleRepository::new());
        let service = DefaultExampleService::new(repo);

        let result = service.delete(&ExampleId::new()).await;
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_succeeds_when_repository_deletes() {
        let repo = Arc::new(MockExampleRepository::new().with_delete(Ok(())));
        let service = DefaultExampleService::new(repo);

        assert!(service.delete(&ExampleId::new()).await.is_ok());
    }
}
