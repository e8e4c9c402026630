//! Member REST API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    parse_member_status, CreateMemberRequest, MemberDto, SetMemberStatusRequest,
    UpdateMemberRequest,
};
use crate::application::MemberService;
use crate::domain::member::{MemberPatch, NewMember};
use crate::interfaces::http::common::{
    domain_error_response, ApiResponse, PaginatedResponse, PaginationParams, ValidatedJson,
};

/// Member handler state
#[derive(Clone)]
pub struct MemberHandlerState {
    pub member_service: Arc<MemberService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/members",
    tag = "Members",
    security(("bearer_auth" = [])),
    params(PaginationParams),
    responses(
        (status = 200, description = "Member list", body = PaginatedResponse<MemberDto>)
    )
)]
pub async fn list_members(
    State(state): State<MemberHandlerState>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<PaginatedResponse<MemberDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let members = state
        .member_service
        .list()
        .await
        .map_err(domain_error_response)?;
    let dtos: Vec<MemberDto> = members.into_iter().map(MemberDto::from).collect();
    Ok(Json(PaginatedResponse::paginate(dtos, &pagination)))
}

#[utoipa::path(
    get,
    path = "/api/v1/members/{id}",
    tag = "Members",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Member ID")),
    responses(
        (status = 200, description = "Member details", body = ApiResponse<MemberDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_member(
    State(state): State<MemberHandlerState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<MemberDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.member_service.get(id).await {
        Ok(Some(member)) => Ok(Json(ApiResponse::success(MemberDto::from(member)))),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!("Member {} not found", id))),
        )),
        Err(e) => Err(domain_error_response(e)),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/members",
    tag = "Members",
    security(("bearer_auth" = [])),
    request_body = CreateMemberRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<MemberDto>),
        (status = 409, description = "RUT already registered")
    )
)]
pub async fn create_member(
    State(state): State<MemberHandlerState>,
    ValidatedJson(req): ValidatedJson<CreateMemberRequest>,
) -> Result<(StatusCode, Json<ApiResponse<MemberDto>>), (StatusCode, Json<ApiResponse<()>>)> {
    let member = state
        .member_service
        .create(NewMember {
            rut: req.rut,
            name: req.name,
            address: req.address,
            meter_number: req.meter_number,
            status: req.status.as_deref().map(parse_member_status).unwrap_or_default(),
        })
        .await
        .map_err(domain_error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(MemberDto::from(member))),
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/members/{id}",
    tag = "Members",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Member ID")),
    request_body = UpdateMemberRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<MemberDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_member(
    State(state): State<MemberHandlerState>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<UpdateMemberRequest>,
) -> Result<Json<ApiResponse<MemberDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let member = state
        .member_service
        .update(
            id,
            MemberPatch {
                name: req.name,
                address: req.address,
                meter_number: req.meter_number,
                status: req.status.as_deref().map(parse_member_status),
            },
        )
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(MemberDto::from(member))))
}

#[utoipa::path(
    put,
    path = "/api/v1/members/{id}/status",
    tag = "Members",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Member ID")),
    request_body = SetMemberStatusRequest,
    responses(
        (status = 200, description = "Status changed", body = ApiResponse<MemberDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn set_member_status(
    State(state): State<MemberHandlerState>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<SetMemberStatusRequest>,
) -> Result<Json<ApiResponse<MemberDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let member = state
        .member_service
        .set_status(id, parse_member_status(&req.status))
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(MemberDto::from(member))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/members/{id}",
    tag = "Members",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Member ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_member(
    State(state): State<MemberHandlerState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<String>>, (StatusCode, Json<ApiResponse<()>>)> {
    state
        .member_service
        .delete(id)
        .await
        .map_err(domain_error_response)?;
    Ok(Json(ApiResponse::success("Member deleted".to_string())))
}
