//! Web layer module
//!
//! HTTP interface for the venue-promotion service. Handlers are thin
//! wrappers that validate input at the boundary and delegate to the service
//! layer; all endpoints answer with the standardized response envelope.

use anyhow::Result;
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    config::Config,
    database::Database,
    repositories::{MessageRepository, ShowRepository, SubscriberRepository},
    services::{MessageService, ShowService, SubscriberService},
};

pub mod handlers;
pub mod responses;
pub mod validation;

pub use responses::ApiResponse;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub show_service: ShowService,
    pub message_service: MessageService,
    pub subscriber_service: SubscriberService,
}

impl AppState {
    pub fn new(config: Config, database: &Database) -> Self {
        let pool = database.pool();
        Self {
            config,
            show_service: ShowService::new(ShowRepository::new(pool.clone())),
            message_service: MessageService::new(MessageRepository::new(pool.clone())),
            subscriber_service: SubscriberService::new(SubscriberRepository::new(pool)),
        }
    }
}

/// Web server configuration and setup
pub struct WebServer {
    app: Router,
    addr: SocketAddr,
}

impl WebServer {
    pub fn new(config: Config, database: &Database) -> Result<Self> {
        let addr: SocketAddr = format!("{}:{}", config.web.host, config.web.port).parse()?;
        let state = AppState::new(config, database);
        let app = create_router(state);

        Ok(Self { app, addr })
    }

    /// Start the web server
    pub async fn serve(self) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        axum::serve(listener, self.app).await?;
        Ok(())
    }

    /// Get the host address
    pub fn host(&self) -> String {
        self.addr.ip().to_string()
    }

    /// Get the port number
    pub fn port(&self) -> u16 {
        self.addr.port()
    }
}

/// Create the router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .nest("/api/v1", api_v1_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Public API routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .route("/shows", get(handlers::shows::list_shows))
        .route("/shows/upcoming", get(handlers::shows::list_upcoming_shows))
        .route("/shows/featured", get(handlers::shows::list_featured_shows))
        .route("/shows/past", get(handlers::shows::list_past_shows))
        .route("/shows/:id", get(handlers::shows::get_show))
        .route("/messages", post(handlers::messages::send_message))
        .route(
            "/subscribers/subscribe",
            post(handlers::subscribers::subscribe),
        )
        .route(
            "/subscribers/unsubscribe",
            post(handlers::subscribers::unsubscribe),
        )
        .nest("/admin", admin_routes())
}

/// Staff dashboard routes
///
/// Session authentication is handled by the surrounding deployment; these
/// routes carry no auth middleware of their own.
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/shows",
            get(handlers::shows::admin_list_shows).post(handlers::shows::create_show),
        )
        .route(
            "/shows/:id",
            put(handlers::shows::update_show).delete(handlers::shows::delete_show),
        )
        .route("/shows/:id/status", put(handlers::shows::update_show_status))
        .route(
            "/shows/:id/feature",
            post(handlers::shows::toggle_show_featured),
        )
        .route(
            "/shows/:id/publish",
            post(handlers::shows::toggle_show_published),
        )
        .route(
            "/shows/:id/tickets",
            put(handlers::shows::update_show_sold_tickets),
        )
        .route("/messages", get(handlers::messages::list_messages))
        .route(
            "/messages/:id",
            get(handlers::messages::get_message).delete(handlers::messages::delete_message),
        )
        .route(
            "/messages/:id/read",
            post(handlers::messages::mark_message_read),
        )
        .route(
            "/subscribers",
            get(handlers::subscribers::list_subscribers),
        )
        .route(
            "/subscribers/:id",
            delete(handlers::subscribers::delete_subscriber),
        )
}
