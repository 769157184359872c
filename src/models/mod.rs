use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single scheduled performance event, the core entity of the system.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Show {
    pub id: i64,
    pub title: String,
    pub date: DateTime<Utc>,
    /// Start time of the show
    pub time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub description: String,
    pub location: Option<String>,
    pub venue: Option<String>,
    pub price: Option<f64>,
    pub ticket_url: Option<String>,
    pub performers: Option<String>,
    /// Promotional priority flag, independent of visibility
    pub featured: bool,
    /// Visibility flag; unpublished shows are staff-only drafts
    pub published: bool,
    pub status: ShowStatus,
    pub max_capacity: Option<i64>,
    pub sold_tickets: i64,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Marketing/operational classification of a show.
///
/// `status` is a free-form classification settable independently of ticket
/// counts; only `update_sold_tickets` derives it from capacity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, Default)]
#[sqlx(type_name = "show_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ShowStatus {
    #[default]
    Scheduled,
    Cancelled,
    SoldOut,
}

/// Price accepted as either a non-negative number or a numeric string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    Amount(f64),
    Text(String),
}

impl PriceInput {
    /// Coerce to a numeric value, if the input parses as one
    pub fn as_amount(&self) -> Option<f64> {
        match self {
            PriceInput::Amount(v) => Some(*v),
            PriceInput::Text(s) => s.trim().parse().ok(),
        }
    }
}

fn default_published() -> bool {
    true
}

/// Input to show creation as accepted from the action layer.
///
/// Date-like fields arrive as strings and are normalized into timestamps by
/// the lifecycle service; field-level validation happens upstream in the web
/// layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowCreateRequest {
    pub title: String,
    pub date: String,
    pub time: String,
    pub end_time: Option<String>,
    pub description: String,
    pub location: Option<String>,
    pub venue: Option<String>,
    pub price: Option<PriceInput>,
    pub ticket_url: Option<String>,
    pub performers: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub status: ShowStatus,
    pub max_capacity: Option<i64>,
    pub sold_tickets: Option<i64>,
    pub image: Option<String>,
    #[serde(default = "default_published")]
    pub published: bool,
}

/// Sparse input to show updates; only provided fields are changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShowUpdateRequest {
    pub title: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub end_time: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub venue: Option<String>,
    pub price: Option<PriceInput>,
    pub ticket_url: Option<String>,
    pub performers: Option<String>,
    pub featured: Option<bool>,
    pub status: Option<ShowStatus>,
    pub max_capacity: Option<i64>,
    pub sold_tickets: Option<i64>,
    pub image: Option<String>,
    pub published: Option<bool>,
}

/// Fully normalized show data ready for insertion.
#[derive(Debug, Clone)]
pub struct NewShow {
    pub title: String,
    pub date: DateTime<Utc>,
    pub time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub description: String,
    pub location: Option<String>,
    pub venue: Option<String>,
    pub price: Option<f64>,
    pub ticket_url: Option<String>,
    pub performers: Option<String>,
    pub featured: bool,
    pub status: ShowStatus,
    pub max_capacity: Option<i64>,
    pub sold_tickets: i64,
    pub image: Option<String>,
    pub published: bool,
}

/// Explicit optional-field container for partial updates.
///
/// A `None` field is left untouched by the repository; a `Some` field is
/// written. This keeps the "only provided fields change" contract statically
/// checkable.
#[derive(Debug, Clone, Default)]
pub struct ShowChanges {
    pub title: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub venue: Option<String>,
    pub price: Option<f64>,
    pub ticket_url: Option<String>,
    pub performers: Option<String>,
    pub featured: Option<bool>,
    pub status: Option<ShowStatus>,
    pub max_capacity: Option<i64>,
    pub sold_tickets: Option<i64>,
    pub image: Option<String>,
    pub published: Option<bool>,
}

impl ShowChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.date.is_none()
            && self.time.is_none()
            && self.end_time.is_none()
            && self.description.is_none()
            && self.location.is_none()
            && self.venue.is_none()
            && self.price.is_none()
            && self.ticket_url.is_none()
            && self.performers.is_none()
            && self.featured.is_none()
            && self.status.is_none()
            && self.max_capacity.is_none()
            && self.sold_tickets.is_none()
            && self.image.is_none()
            && self.published.is_none()
    }
}

/// Sort key for show listings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShowOrderBy {
    #[default]
    Date,
    Title,
    CreatedAt,
}

impl ShowOrderBy {
    pub fn column(&self) -> &'static str {
        match self {
            ShowOrderBy::Date => "date",
            ShowOrderBy::Title => "title",
            ShowOrderBy::CreatedAt => "created_at",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn keyword(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Filter for the general show listing
#[derive(Debug, Clone, Default)]
pub struct ShowListQuery {
    /// Unpublished shows are excluded unless explicitly requested
    pub include_unpublished: bool,
    pub order_by: ShowOrderBy,
    pub order: SortOrder,
}

/// Filter for the upcoming-shows listing
#[derive(Debug, Clone, Default)]
pub struct UpcomingQuery {
    pub limit: Option<i64>,
    pub featured_only: bool,
    pub exclude_sold_out: bool,
}

/// Pagination for the past-shows listing
#[derive(Debug, Clone, Default)]
pub struct PastQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// An inbound contact-form message
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Message {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub body: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// Contact form submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageCreateRequest {
    pub name: String,
    pub email: String,
    #[serde(rename = "message")]
    pub body: String,
}

/// A mailing-list entry
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Subscriber {
    pub id: i64,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Mailing-list signup / removal request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscribeRequest {
    pub email: String,
}
