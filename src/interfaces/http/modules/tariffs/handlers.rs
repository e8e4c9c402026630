//! Tariff REST API handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use super::dto::{
    PreviewAmountRequest, PreviewAmountResponse, ReplaceTariffsRequest, TariffTierDto,
    TariffTierInput,
};
use crate::application::BillingService;
use crate::interfaces::http::common::{domain_error_response, ApiResponse, ValidatedJson};

/// Tariff handler state
#[derive(Clone)]
pub struct TariffHandlerState {
    pub billing_service: Arc<BillingService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/tariffs",
    tag = "Tariffs",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Active tariff table, ascending by tier_min", body = ApiResponse<Vec<TariffTierDto>>)
    )
)]
pub async fn list_tariffs(
    State(state): State<TariffHandlerState>,
) -> Result<Json<ApiResponse<Vec<TariffTierDto>>>, (StatusCode, Json<ApiResponse<()>>)> {
    let tiers = state
        .billing_service
        .list_tariffs()
        .await
        .map_err(domain_error_response)?;
    let dtos: Vec<TariffTierDto> = tiers.into_iter().map(TariffTierDto::from).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

#[utoipa::path(
    put,
    path = "/api/v1/tariffs",
    tag = "Tariffs",
    security(("bearer_auth" = [])),
    request_body = ReplaceTariffsRequest,
    responses(
        (status = 200, description = "Table replaced atomically", body = ApiResponse<Vec<TariffTierDto>>),
        (status = 400, description = "Malformed table; nothing was changed")
    )
)]
pub async fn replace_tariffs(
    State(state): State<TariffHandlerState>,
    ValidatedJson(req): ValidatedJson<ReplaceTariffsRequest>,
) -> Result<Json<ApiResponse<Vec<TariffTierDto>>>, (StatusCode, Json<ApiResponse<()>>)> {
    let tiers = req
        .tiers
        .into_iter()
        .map(TariffTierInput::into_domain)
        .collect();

    let saved = state
        .billing_service
        .replace_tariffs(tiers)
        .await
        .map_err(domain_error_response)?;

    let dtos: Vec<TariffTierDto> = saved.into_iter().map(TariffTierDto::from).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

#[utoipa::path(
    post,
    path = "/api/v1/tariffs/preview-amount",
    tag = "Tariffs",
    security(("bearer_auth" = [])),
    request_body = PreviewAmountRequest,
    responses(
        (status = 200, description = "Billed amount under the active table", body = ApiResponse<PreviewAmountResponse>),
        (status = 400, description = "Invalid consumption or malformed stored table")
    )
)]
pub async fn preview_amount(
    State(state): State<TariffHandlerState>,
    ValidatedJson(req): ValidatedJson<PreviewAmountRequest>,
) -> Result<Json<ApiResponse<PreviewAmountResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    let amount = state
        .billing_service
        .preview_amount(req.consumption)
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(PreviewAmountResponse {
        consumption: req.consumption,
        amount,
    })))
}
