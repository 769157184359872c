//! Contact message service
//!
//! Pass-through glue over the message repository for the staff inbox.

use crate::{
    errors::{AppError, RepositoryError},
    models::{Message, MessageCreateRequest},
    repositories::MessageRepository,
};

#[derive(Clone)]
pub struct MessageService {
    repo: MessageRepository,
}

impl MessageService {
    pub fn new(repo: MessageRepository) -> Self {
        Self { repo }
    }

    /// Store an inbound contact-form message for staff review
    pub async fn send(&self, request: MessageCreateRequest) -> Result<Message, AppError> {
        self.repo.create(request).await.map_err(AppError::Repository)
    }

    pub async fn list(&self) -> Result<Vec<Message>, AppError> {
        self.repo.find_all().await.map_err(AppError::Repository)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Message>, AppError> {
        self.repo.find_by_id(id).await.map_err(AppError::Repository)
    }

    pub async fn mark_read(&self, id: i64) -> Result<Message, AppError> {
        self.repo.mark_read(id).await.map_err(|e| map_error(id, e))
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.repo.delete(id).await.map_err(|e| map_error(id, e))
    }
}

fn map_error(id: i64, error: RepositoryError) -> AppError {
    match error {
        RepositoryError::RecordNotFound { .. } => AppError::not_found("message", id.to_string()),
        other => AppError::Repository(other),
    }
}
