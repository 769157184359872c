//! Contact message HTTP handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    errors::AppError,
    models::{Message, MessageCreateRequest},
    web::{responses::ApiResponse, validation, AppState},
};

/// Accept a contact-form submission
pub async fn send_message(
    State(state): State<AppState>,
    Json(request): Json<MessageCreateRequest>,
) -> Result<Json<ApiResponse<Message>>, AppError> {
    validation::validate_message(&request)?;
    let message = state.message_service.send(request).await?;
    Ok(Json(ApiResponse::ok_with_message(
        message,
        "Message sent successfully",
    )))
}

pub async fn list_messages(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Message>>>, AppError> {
    let messages = state.message_service.list().await?;
    Ok(Json(ApiResponse::ok(messages)))
}

pub async fn get_message(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Message>>, AppError> {
    validation::validate_id(id)?;
    let message = state
        .message_service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("message", id.to_string()))?;
    Ok(Json(ApiResponse::ok(message)))
}

pub async fn mark_message_read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Message>>, AppError> {
    validation::validate_id(id)?;
    let message = state.message_service.mark_read(id).await?;
    Ok(Json(ApiResponse::ok(message)))
}

pub async fn delete_message(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    validation::validate_id(id)?;
    state.message_service.delete(id).await?;
    Ok(Json(ApiResponse::message("Message deleted")))
}
