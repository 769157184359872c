//! Mailing-list subscriber service

use crate::{
    errors::{AppError, RepositoryError},
    models::Subscriber,
    repositories::SubscriberRepository,
};

/// Result of a signup attempt; subscribing an existing address is not an
/// error, it just reports back.
#[derive(Debug)]
pub enum SubscribeOutcome {
    Subscribed(Subscriber),
    AlreadySubscribed,
}

#[derive(Clone)]
pub struct SubscriberService {
    repo: SubscriberRepository,
}

impl SubscriberService {
    pub fn new(repo: SubscriberRepository) -> Self {
        Self { repo }
    }

    pub async fn subscribe(&self, email: &str) -> Result<SubscribeOutcome, AppError> {
        if self
            .repo
            .find_by_email(email)
            .await
            .map_err(AppError::Repository)?
            .is_some()
        {
            return Ok(SubscribeOutcome::AlreadySubscribed);
        }

        match self.repo.create(email).await {
            Ok(subscriber) => Ok(SubscribeOutcome::Subscribed(subscriber)),
            // A concurrent signup can slip in between the lookup and the
            // insert; the unique index reports it
            Err(RepositoryError::ConstraintViolation { .. }) => {
                Ok(SubscribeOutcome::AlreadySubscribed)
            }
            Err(e) => Err(AppError::Repository(e)),
        }
    }

    /// Remove an address from the mailing list; unknown addresses are
    /// reported as not found.
    pub async fn unsubscribe(&self, email: &str) -> Result<(), AppError> {
        let subscriber = self
            .repo
            .find_by_email(email)
            .await
            .map_err(AppError::Repository)?
            .ok_or_else(|| AppError::not_found("subscriber", email))?;

        self.repo
            .delete(subscriber.id)
            .await
            .map_err(AppError::Repository)
    }

    pub async fn list(&self) -> Result<Vec<Subscriber>, AppError> {
        self.repo.find_all().await.map_err(AppError::Repository)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.repo.delete(id).await.map_err(|e| match e {
            RepositoryError::RecordNotFound { .. } => {
                AppError::not_found("subscriber", id.to_string())
            }
            other => AppError::Repository(other),
        })
    }
}
