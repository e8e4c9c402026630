//! Dashboard REST API handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use super::dto::{ActivityDto, DashboardSummaryDto};
use crate::application::AccountService;
use crate::interfaces::http::common::{domain_error_response, ApiResponse};

const ACTIVITY_FEED_LIMIT: usize = 10;

/// Dashboard handler state
#[derive(Clone)]
pub struct DashboardState {
    pub account_service: Arc<AccountService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/dashboard/summary",
    tag = "Dashboard",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Headline statistics", body = ApiResponse<DashboardSummaryDto>)
    )
)]
pub async fn dashboard_summary(
    State(state): State<DashboardState>,
) -> Result<Json<ApiResponse<DashboardSummaryDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let stats = state
        .account_service
        .dashboard()
        .await
        .map_err(domain_error_response)?;
    Ok(Json(ApiResponse::success(DashboardSummaryDto::from(stats))))
}

#[utoipa::path(
    get,
    path = "/api/v1/dashboard/activity",
    tag = "Dashboard",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Recent activity feed, newest first", body = ApiResponse<Vec<ActivityDto>>)
    )
)]
pub async fn recent_activity(
    State(state): State<DashboardState>,
) -> Result<Json<ApiResponse<Vec<ActivityDto>>>, (StatusCode, Json<ApiResponse<()>>)> {
    let entries = state
        .account_service
        .recent_activity(ACTIVITY_FEED_LIMIT)
        .await
        .map_err(domain_error_response)?;
    let dtos: Vec<ActivityDto> = entries.into_iter().map(ActivityDto::from).collect();
    Ok(Json(ApiResponse::success(dtos)))
}
