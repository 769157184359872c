//! Show lifecycle service
//!
//! Encodes the business rules for status transitions, capacity tracking and
//! visibility toggles on top of the show repository. Field-level validation
//! happens upstream in the web layer; this service normalizes date-like
//! strings and prices, and enforces the sold-out capacity rule.

use chrono::{DateTime, Utc};

use crate::{
    errors::{AppError, RepositoryError},
    models::{
        NewShow, PastQuery, PriceInput, Show, ShowChanges, ShowCreateRequest, ShowListQuery,
        ShowStatus, ShowUpdateRequest, UpcomingQuery,
    },
    repositories::{Repository, ShowRepository},
};

/// Default cap for the featured-shows listing
const DEFAULT_FEATURED_LIMIT: i64 = 3;

#[derive(Clone)]
pub struct ShowService {
    repo: ShowRepository,
}

impl ShowService {
    pub fn new(repo: ShowRepository) -> Self {
        Self { repo }
    }

    pub async fn list(&self, query: ShowListQuery) -> Result<Vec<Show>, AppError> {
        self.repo.find_all(query).await.map_err(AppError::Repository)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Show>, AppError> {
        self.repo.find_by_id(id).await.map_err(AppError::Repository)
    }

    pub async fn list_upcoming(&self, query: UpcomingQuery) -> Result<Vec<Show>, AppError> {
        self.repo
            .list_upcoming(query)
            .await
            .map_err(AppError::Repository)
    }

    pub async fn list_featured(&self, limit: Option<i64>) -> Result<Vec<Show>, AppError> {
        self.repo
            .list_featured(limit.unwrap_or(DEFAULT_FEATURED_LIMIT))
            .await
            .map_err(AppError::Repository)
    }

    pub async fn list_past(&self, query: PastQuery) -> Result<Vec<Show>, AppError> {
        self.repo
            .list_past(query)
            .await
            .map_err(AppError::Repository)
    }

    /// Create a new show
    ///
    /// Normalizes date strings into timestamps and price into a numeric
    /// value, then delegates to the repository.
    pub async fn create(&self, request: ShowCreateRequest) -> Result<Show, AppError> {
        let new_show = NewShow {
            date: parse_datetime("date", &request.date)?,
            time: parse_datetime("time", &request.time)?,
            end_time: request
                .end_time
                .as_deref()
                .map(|v| parse_datetime("end time", v))
                .transpose()?,
            price: request.price.as_ref().map(normalize_price).transpose()?,
            title: request.title,
            description: request.description,
            location: request.location,
            venue: request.venue,
            ticket_url: request.ticket_url,
            performers: request.performers,
            featured: request.featured,
            status: request.status,
            max_capacity: request.max_capacity,
            sold_tickets: request.sold_tickets.unwrap_or(0),
            image: request.image,
            published: request.published,
        };

        self.repo
            .create(new_show)
            .await
            .map_err(AppError::Repository)
    }

    /// Update an existing show; only provided fields are changed
    pub async fn update(&self, id: i64, request: ShowUpdateRequest) -> Result<Show, AppError> {
        let changes = ShowChanges {
            date: request
                .date
                .as_deref()
                .map(|v| parse_datetime("date", v))
                .transpose()?,
            time: request
                .time
                .as_deref()
                .map(|v| parse_datetime("time", v))
                .transpose()?,
            end_time: request
                .end_time
                .as_deref()
                .map(|v| parse_datetime("end time", v))
                .transpose()?,
            price: request.price.as_ref().map(normalize_price).transpose()?,
            title: request.title,
            description: request.description,
            location: request.location,
            venue: request.venue,
            ticket_url: request.ticket_url,
            performers: request.performers,
            featured: request.featured,
            status: request.status,
            max_capacity: request.max_capacity,
            sold_tickets: request.sold_tickets,
            image: request.image,
            published: request.published,
        };

        self.repo
            .update(id, changes)
            .await
            .map_err(|e| map_show_error(id, e))
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.repo
            .delete(id)
            .await
            .map_err(|e| map_show_error(id, e))
    }

    /// Set the marketing status unconditionally
    ///
    /// Staff may mark a show `cancelled` or back to `scheduled` regardless of
    /// ticket counts; no consistency check against sold_tickets/max_capacity
    /// is performed here.
    pub async fn update_status(&self, id: i64, status: ShowStatus) -> Result<Show, AppError> {
        let changes = ShowChanges {
            status: Some(status),
            ..ShowChanges::default()
        };

        self.repo
            .update(id, changes)
            .await
            .map_err(|e| map_show_error(id, e))
    }

    /// Flip the promotional flag
    ///
    /// Read-then-write pair; two concurrent toggles on the same show can
    /// lose an update.
    pub async fn toggle_featured(&self, id: i64) -> Result<Show, AppError> {
        let show = self.require(id).await?;
        let changes = ShowChanges {
            featured: Some(!show.featured),
            ..ShowChanges::default()
        };

        self.repo
            .update(id, changes)
            .await
            .map_err(|e| map_show_error(id, e))
    }

    /// Flip the public visibility flag
    ///
    /// Same read-then-write pattern as `toggle_featured`.
    pub async fn toggle_published(&self, id: i64) -> Result<Show, AppError> {
        let show = self.require(id).await?;
        let changes = ShowChanges {
            published: Some(!show.published),
            ..ShowChanges::default()
        };

        self.repo
            .update(id, changes)
            .await
            .map_err(|e| map_show_error(id, e))
    }

    /// Update the sold-ticket count
    ///
    /// When max_capacity is set and the new count reaches it, the status
    /// becomes `soldout`. Lowering the count afterwards never reverts an
    /// existing `soldout` status; correcting it is an explicit staff action
    /// via `update_status`.
    pub async fn update_sold_tickets(&self, id: i64, sold_tickets: i64) -> Result<Show, AppError> {
        let show = self.require(id).await?;

        let status = match show.max_capacity {
            Some(capacity) if sold_tickets >= capacity => ShowStatus::SoldOut,
            _ => show.status,
        };

        let changes = ShowChanges {
            sold_tickets: Some(sold_tickets),
            status: Some(status),
            ..ShowChanges::default()
        };

        self.repo
            .update(id, changes)
            .await
            .map_err(|e| map_show_error(id, e))
    }

    async fn require(&self, id: i64) -> Result<Show, AppError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(AppError::Repository)?
            .ok_or_else(|| AppError::not_found("show", id.to_string()))
    }
}

fn parse_datetime(field: &str, value: &str) -> Result<DateTime<Utc>, AppError> {
    crate::utils::DateTimeParser::parse_flexible(value)
        .map_err(|_| AppError::validation(format!("Invalid {field} format")))
}

fn normalize_price(price: &PriceInput) -> Result<f64, AppError> {
    price
        .as_amount()
        .ok_or_else(|| AppError::validation("Price must be a number"))
}

fn map_show_error(id: i64, error: RepositoryError) -> AppError {
    match error {
        RepositoryError::RecordNotFound { .. } => AppError::not_found("show", id.to_string()),
        other => AppError::Repository(other),
    }
}
