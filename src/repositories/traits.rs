use async_trait::async_trait;

use crate::errors::RepositoryResult;

/// Common interface for entity repositories
///
/// `T` is the entity type, `Id` its identifier. Create/update request types
/// are associated so each repository can take a fully normalized write
/// container rather than dynamic partial objects.
#[async_trait]
pub trait Repository<T, Id>: Send + Sync {
    type CreateRequest: Send;
    type UpdateRequest: Send;
    type Query: Send;

    async fn find_by_id(&self, id: Id) -> RepositoryResult<Option<T>>;

    async fn find_all(&self, query: Self::Query) -> RepositoryResult<Vec<T>>;

    async fn create(&self, request: Self::CreateRequest) -> RepositoryResult<T>;

    /// Update an existing record; fails with a record-not-found error when
    /// the id has no matching row.
    async fn update(&self, id: Id, request: Self::UpdateRequest) -> RepositoryResult<T>;

    /// Delete a record; fails with a record-not-found error when the id has
    /// no matching row.
    async fn delete(&self, id: Id) -> RepositoryResult<()>;
}
