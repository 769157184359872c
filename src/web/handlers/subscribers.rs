//! Mailing-list HTTP handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    errors::AppError,
    models::{SubscribeRequest, Subscriber},
    services::SubscribeOutcome,
    web::{responses::ApiResponse, validation, AppState},
};

/// Sign an address up for the mailing list
pub async fn subscribe(
    State(state): State<AppState>,
    Json(request): Json<SubscribeRequest>,
) -> Result<Json<ApiResponse<Subscriber>>, AppError> {
    validation::validate_email(&request.email)?;

    let response = match state.subscriber_service.subscribe(&request.email).await? {
        SubscribeOutcome::Subscribed(subscriber) => {
            ApiResponse::ok_with_message(subscriber, "Successfully subscribed")
        }
        SubscribeOutcome::AlreadySubscribed => ApiResponse::message("Already subscribed"),
    };

    Ok(Json(response))
}

/// Remove an address from the mailing list
pub async fn unsubscribe(
    State(state): State<AppState>,
    Json(request): Json<SubscribeRequest>,
) -> Result<Response, AppError> {
    validation::validate_email(&request.email)?;

    match state.subscriber_service.unsubscribe(&request.email).await {
        Ok(()) => Ok(Json(ApiResponse::<()>::message("Successfully unsubscribed")).into_response()),
        Err(e) if e.is_not_found() => Ok((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::failure(
                "Email not found in our mailing list",
            )),
        )
            .into_response()),
        Err(e) => Err(e),
    }
}

pub async fn list_subscribers(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Subscriber>>>, AppError> {
    let subscribers = state.subscriber_service.list().await?;
    Ok(Json(ApiResponse::ok(subscribers)))
}

pub async fn delete_subscriber(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    validation::validate_id(id)?;
    state.subscriber_service.delete(id).await?;
    Ok(Json(ApiResponse::message("Subscriber deleted")))
}
