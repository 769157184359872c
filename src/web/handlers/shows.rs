//! Show HTTP handlers
//!
//! Public listing endpoints plus the admin surface for creating, editing and
//! driving the lifecycle of shows.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::{
    errors::AppError,
    models::{
        PastQuery, Show, ShowCreateRequest, ShowListQuery, ShowOrderBy, ShowStatus,
        ShowUpdateRequest, SortOrder, UpcomingQuery,
    },
    web::{responses::ApiResponse, validation, AppState},
};

#[derive(Debug, Deserialize)]
pub struct UpcomingParams {
    pub limit: Option<i64>,
    pub featured_only: Option<bool>,
    pub exclude_sold_out: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct FeaturedParams {
    pub limit: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct PastParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct AdminListParams {
    pub include_unpublished: Option<bool>,
    pub order_by: Option<ShowOrderBy>,
    pub order: Option<SortOrder>,
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: ShowStatus,
}

#[derive(Debug, Deserialize)]
pub struct SoldTicketsUpdateRequest {
    pub sold_tickets: i64,
}

/// List published shows, date ascending
pub async fn list_shows(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Show>>>, AppError> {
    let shows = state.show_service.list(ShowListQuery::default()).await?;
    Ok(Json(ApiResponse::ok(shows)))
}

/// List shows for the dashboard, optionally including unpublished drafts
pub async fn admin_list_shows(
    State(state): State<AppState>,
    Query(params): Query<AdminListParams>,
) -> Result<Json<ApiResponse<Vec<Show>>>, AppError> {
    let query = ShowListQuery {
        include_unpublished: params.include_unpublished.unwrap_or(false),
        order_by: params.order_by.unwrap_or_default(),
        order: params.order.unwrap_or_default(),
    };
    let shows = state.show_service.list(query).await?;
    Ok(Json(ApiResponse::ok(shows)))
}

pub async fn list_upcoming_shows(
    State(state): State<AppState>,
    Query(params): Query<UpcomingParams>,
) -> Result<Json<ApiResponse<Vec<Show>>>, AppError> {
    let query = UpcomingQuery {
        limit: params.limit,
        featured_only: params.featured_only.unwrap_or(false),
        exclude_sold_out: params.exclude_sold_out.unwrap_or(false),
    };
    let shows = state.show_service.list_upcoming(query).await?;
    Ok(Json(ApiResponse::ok(shows)))
}

pub async fn list_featured_shows(
    State(state): State<AppState>,
    Query(params): Query<FeaturedParams>,
) -> Result<Json<ApiResponse<Vec<Show>>>, AppError> {
    let shows = state.show_service.list_featured(params.limit).await?;
    Ok(Json(ApiResponse::ok(shows)))
}

pub async fn list_past_shows(
    State(state): State<AppState>,
    Query(params): Query<PastParams>,
) -> Result<Json<ApiResponse<Vec<Show>>>, AppError> {
    let query = PastQuery {
        limit: params.limit,
        offset: params.offset,
    };
    let shows = state.show_service.list_past(query).await?;
    Ok(Json(ApiResponse::ok(shows)))
}

pub async fn get_show(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Show>>, AppError> {
    validation::validate_id(id)?;
    let show = state
        .show_service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("show", id.to_string()))?;
    Ok(Json(ApiResponse::ok(show)))
}

pub async fn create_show(
    State(state): State<AppState>,
    Json(request): Json<ShowCreateRequest>,
) -> Result<Json<ApiResponse<Show>>, AppError> {
    validation::validate_show_create(&request)?;
    let show = state.show_service.create(request).await?;
    Ok(Json(ApiResponse::ok(show)))
}

pub async fn update_show(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<ShowUpdateRequest>,
) -> Result<Json<ApiResponse<Show>>, AppError> {
    validation::validate_id(id)?;
    validation::validate_show_update(&request)?;
    let show = state.show_service.update(id, request).await?;
    Ok(Json(ApiResponse::ok(show)))
}

pub async fn delete_show(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    validation::validate_id(id)?;
    state.show_service.delete(id).await?;
    Ok(Json(ApiResponse::message("Show deleted")))
}

pub async fn update_show_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<StatusUpdateRequest>,
) -> Result<Json<ApiResponse<Show>>, AppError> {
    validation::validate_id(id)?;
    let show = state.show_service.update_status(id, request.status).await?;
    Ok(Json(ApiResponse::ok(show)))
}

pub async fn toggle_show_featured(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Show>>, AppError> {
    validation::validate_id(id)?;
    let show = state.show_service.toggle_featured(id).await?;
    Ok(Json(ApiResponse::ok(show)))
}

pub async fn toggle_show_published(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Show>>, AppError> {
    validation::validate_id(id)?;
    let show = state.show_service.toggle_published(id).await?;
    Ok(Json(ApiResponse::ok(show)))
}

pub async fn update_show_sold_tickets(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<SoldTicketsUpdateRequest>,
) -> Result<Json<ApiResponse<Show>>, AppError> {
    validation::validate_id(id)?;
    validation::validate_sold_tickets(request.sold_tickets)?;
    let show = state
        .show_service
        .update_sold_tickets(id, request.sold_tickets)
        .await?;
    Ok(Json(ApiResponse::ok(show)))
}
