//! Invoice REST API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    parse_invoice_status, parse_payment_method, AccountSummaryDto, InvoiceDto, InvoiceFilter,
    IssueInvoiceRequest, PaymentDto, RegisterPaymentRequest,
};
use crate::application::{AccountService, BillingService};
use crate::domain::RepositoryProvider;
use crate::interfaces::http::common::{
    domain_error_response, ApiResponse, PaginatedResponse, PaginationParams, ValidatedJson,
};

/// Invoice handler state
#[derive(Clone)]
pub struct InvoiceHandlerState {
    pub repos: Arc<dyn RepositoryProvider>,
    pub billing_service: Arc<BillingService>,
    pub account_service: Arc<AccountService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/invoices",
    tag = "Invoices",
    security(("bearer_auth" = [])),
    params(InvoiceFilter, PaginationParams),
    responses(
        (status = 200, description = "Invoice list, newest first", body = PaginatedResponse<InvoiceDto>)
    )
)]
pub async fn list_invoices(
    State(state): State<InvoiceHandlerState>,
    Query(filter): Query<InvoiceFilter>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<PaginatedResponse<InvoiceDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let invoices = match filter.member_id {
        Some(member_id) => state.repos.invoices().find_by_member(member_id).await,
        None => state.repos.invoices().find_all().await,
    }
    .map_err(domain_error_response)?;

    let status_filter = filter.status.as_deref().and_then(parse_invoice_status);
    let filtered: Vec<InvoiceDto> = invoices
        .into_iter()
        .filter(|i| {
            if let Some(status) = status_filter {
                if i.status != status {
                    return false;
                }
            }
            if let Some(ref from) = filter.from_date {
                if i.issue_date < *from {
                    return false;
                }
            }
            if let Some(ref to) = filter.to_date {
                if i.issue_date > *to {
                    return false;
                }
            }
            true
        })
        .map(InvoiceDto::from)
        .collect();

    Ok(Json(PaginatedResponse::paginate(filtered, &pagination)))
}

#[utoipa::path(
    get,
    path = "/api/v1/invoices/{id}",
    tag = "Invoices",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Invoice ID")),
    responses(
        (status = 200, description = "Invoice details", body = ApiResponse<InvoiceDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_invoice(
    State(state): State<InvoiceHandlerState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<InvoiceDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.invoices().find_by_id(id).await {
        Ok(Some(invoice)) => Ok(Json(ApiResponse::success(InvoiceDto::from(invoice)))),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!("Invoice {} not found", id))),
        )),
        Err(e) => Err(domain_error_response(e)),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/invoices",
    tag = "Invoices",
    security(("bearer_auth" = [])),
    request_body = IssueInvoiceRequest,
    responses(
        (status = 201, description = "Invoice issued; amount frozen at current tariffs", body = ApiResponse<InvoiceDto>),
        (status = 404, description = "Reading not found"),
        (status = 409, description = "Reading already invoiced")
    )
)]
pub async fn issue_invoice(
    State(state): State<InvoiceHandlerState>,
    ValidatedJson(req): ValidatedJson<IssueInvoiceRequest>,
) -> Result<(StatusCode, Json<ApiResponse<InvoiceDto>>), (StatusCode, Json<ApiResponse<()>>)> {
    let invoice = state
        .billing_service
        .issue_invoice(req.reading_id)
        .await
        .map_err(domain_error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(InvoiceDto::from(invoice))),
    ))
}

#[utoipa::path(
    post,
    path = "/api/v1/invoices/{id}/pay",
    tag = "Invoices",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Invoice ID")),
    request_body = RegisterPaymentRequest,
    responses(
        (status = 200, description = "Payment registered, invoice marked paid", body = ApiResponse<PaymentDto>),
        (status = 404, description = "Not found"),
        (status = 409, description = "Already paid")
    )
)]
pub async fn pay_invoice(
    State(state): State<InvoiceHandlerState>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<RegisterPaymentRequest>,
) -> Result<Json<ApiResponse<PaymentDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let method = req
        .method
        .as_deref()
        .map(parse_payment_method)
        .unwrap_or_default();

    let payment = state
        .billing_service
        .register_payment(id, method)
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(PaymentDto::from(payment))))
}

#[utoipa::path(
    post,
    path = "/api/v1/invoices/refresh-overdue",
    tag = "Invoices",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Count of invoices transitioned to overdue", body = ApiResponse<u64>)
    )
)]
pub async fn refresh_overdue(
    State(state): State<InvoiceHandlerState>,
) -> Result<Json<ApiResponse<u64>>, (StatusCode, Json<ApiResponse<()>>)> {
    let affected = state
        .billing_service
        .refresh_overdue()
        .await
        .map_err(domain_error_response)?;
    Ok(Json(ApiResponse::success(affected)))
}

#[utoipa::path(
    get,
    path = "/api/v1/invoices/stats",
    tag = "Invoices",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Portfolio billing statistics", body = ApiResponse<AccountSummaryDto>)
    )
)]
pub async fn invoice_stats(
    State(state): State<InvoiceHandlerState>,
) -> Result<Json<ApiResponse<AccountSummaryDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let summary = state
        .account_service
        .billing_summary()
        .await
        .map_err(domain_error_response)?;
    Ok(Json(ApiResponse::success(AccountSummaryDto::from(summary))))
}
