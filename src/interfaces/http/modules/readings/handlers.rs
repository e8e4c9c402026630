//! Reading REST API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{CreateReadingRequest, ReadingDto};
use crate::application::{ReadingService, RegisterReading};
use crate::interfaces::http::common::{
    domain_error_response, ApiResponse, PaginatedResponse, PaginationParams, ValidatedJson,
};

/// Reading handler state
#[derive(Clone)]
pub struct ReadingHandlerState {
    pub reading_service: Arc<ReadingService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/readings",
    tag = "Readings",
    security(("bearer_auth" = [])),
    params(PaginationParams),
    responses(
        (status = 200, description = "Reading list, newest first", body = PaginatedResponse<ReadingDto>)
    )
)]
pub async fn list_readings(
    State(state): State<ReadingHandlerState>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<PaginatedResponse<ReadingDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let readings = state
        .reading_service
        .list()
        .await
        .map_err(domain_error_response)?;
    let dtos: Vec<ReadingDto> = readings.into_iter().map(ReadingDto::from).collect();
    Ok(Json(PaginatedResponse::paginate(dtos, &pagination)))
}

#[utoipa::path(
    get,
    path = "/api/v1/readings/{id}",
    tag = "Readings",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Reading ID")),
    responses(
        (status = 200, description = "Reading details", body = ApiResponse<ReadingDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_reading(
    State(state): State<ReadingHandlerState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<ReadingDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.reading_service.get(id).await {
        Ok(Some(reading)) => Ok(Json(ApiResponse::success(ReadingDto::from(reading)))),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!("Reading {} not found", id))),
        )),
        Err(e) => Err(domain_error_response(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/members/{id}/readings",
    tag = "Readings",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Member ID")),
    responses(
        (status = 200, description = "Member's readings, newest first", body = ApiResponse<Vec<ReadingDto>>)
    )
)]
pub async fn list_member_readings(
    State(state): State<ReadingHandlerState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Vec<ReadingDto>>>, (StatusCode, Json<ApiResponse<()>>)> {
    let readings = state
        .reading_service
        .list_for_member(id)
        .await
        .map_err(domain_error_response)?;
    let dtos: Vec<ReadingDto> = readings.into_iter().map(ReadingDto::from).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

#[utoipa::path(
    post,
    path = "/api/v1/readings",
    tag = "Readings",
    security(("bearer_auth" = [])),
    request_body = CreateReadingRequest,
    responses(
        (status = 201, description = "Reading registered; check `anomaly` for meter-rollback notices", body = ApiResponse<ReadingDto>),
        (status = 404, description = "Member not found"),
        (status = 409, description = "Member already has a reading this period")
    )
)]
pub async fn create_reading(
    State(state): State<ReadingHandlerState>,
    ValidatedJson(req): ValidatedJson<CreateReadingRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ReadingDto>>), (StatusCode, Json<ApiResponse<()>>)> {
    let reading = state
        .reading_service
        .register(RegisterReading {
            member_id: req.member_id,
            current_reading: req.current_reading,
            previous_reading: req.previous_reading,
            reading_date: req.reading_date,
            recorded_by: req.recorded_by,
            notes: req.notes,
        })
        .await
        .map_err(domain_error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(ReadingDto::from(reading))),
    ))
}
