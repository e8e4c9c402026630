//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{
    AccountService, BillingService, MemberService, ReadingService, UserService,
};
use crate::domain::RepositoryProvider;
use crate::infrastructure::crypto::jwt::JwtConfig;
use crate::interfaces::http::common::{ApiResponse, PaginatedResponse, PaginationParams};
use crate::interfaces::http::middleware::{auth_middleware, AuthState};
use crate::interfaces::http::modules::{
    auth, dashboard, health, invoices, members, metrics, readings, tariffs, users,
};
use crate::interfaces::ws::{create_notification_state, ws_notifications_handler};
use crate::notifications::SharedEventBus;

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer token"))
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::handlers::health_check,
        // Auth
        auth::handlers::login,
        auth::handlers::get_current_user,
        auth::handlers::change_password,
        // Users
        users::handlers::list_users,
        users::handlers::get_user,
        users::handlers::create_user,
        users::handlers::update_user,
        users::handlers::delete_user,
        users::handlers::list_roles,
        // Members
        members::handlers::list_members,
        members::handlers::get_member,
        members::handlers::create_member,
        members::handlers::update_member,
        members::handlers::set_member_status,
        members::handlers::delete_member,
        // Readings
        readings::handlers::list_readings,
        readings::handlers::get_reading,
        readings::handlers::create_reading,
        readings::handlers::list_member_readings,
        // Invoices
        invoices::handlers::list_invoices,
        invoices::handlers::get_invoice,
        invoices::handlers::issue_invoice,
        invoices::handlers::pay_invoice,
        invoices::handlers::refresh_overdue,
        invoices::handlers::invoice_stats,
        // Tariffs
        tariffs::handlers::list_tariffs,
        tariffs::handlers::replace_tariffs,
        tariffs::handlers::preview_amount,
        // Dashboard
        dashboard::handlers::dashboard_summary,
        dashboard::handlers::recent_activity,
    ),
    components(
        schemas(
            // Common
            ApiResponse<String>,
            PaginationParams,
            PaginatedResponse<members::MemberDto>,
            PaginatedResponse<readings::ReadingDto>,
            PaginatedResponse<invoices::InvoiceDto>,
            PaginatedResponse<users::UserDto>,
            // Auth
            auth::LoginRequest,
            auth::LoginResponse,
            auth::UserInfo,
            auth::ChangePasswordRequest,
            // Users
            users::UserDto,
            users::CreateUserRequest,
            users::UpdateUserRequest,
            users::RolePermissions,
            users::ModulePermission,
            // Members
            members::MemberDto,
            members::CreateMemberRequest,
            members::UpdateMemberRequest,
            members::SetMemberStatusRequest,
            // Readings
            readings::ReadingDto,
            readings::CreateReadingRequest,
            // Invoices
            invoices::InvoiceDto,
            invoices::IssueInvoiceRequest,
            invoices::RegisterPaymentRequest,
            invoices::PaymentDto,
            invoices::AccountSummaryDto,
            // Tariffs
            tariffs::TariffTierDto,
            tariffs::TariffTierInput,
            tariffs::ReplaceTariffsRequest,
            tariffs::PreviewAmountRequest,
            tariffs::PreviewAmountResponse,
            // Dashboard
            dashboard::DashboardSummaryDto,
            dashboard::ActivityDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Authentication", description = "User authentication: login (JWT), password change"),
        (name = "Users", description = "User accounts and read-only role permissions"),
        (name = "Members", description = "Member (socio) registry CRUD"),
        (name = "Readings", description = "Meter reading capture with consumption derivation"),
        (name = "Invoices", description = "Invoices, payments and portfolio statistics"),
        (name = "Tariffs", description = "Tiered tariff table configuration"),
        (name = "Dashboard", description = "Headline statistics and recent activity"),
    ),
    info(
        title = "Lumina APR Administration API",
        version = "1.0.0",
        description = "REST API for a rural drinking-water committee: members, readings, tiered billing, tariffs and users",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
#[allow(clippy::too_many_arguments)]
pub fn create_api_router(
    repos: Arc<dyn RepositoryProvider>,
    db: DatabaseConnection,
    jwt_config: JwtConfig,
    event_bus: SharedEventBus,
    member_service: Arc<MemberService>,
    reading_service: Arc<ReadingService>,
    billing_service: Arc<BillingService>,
    account_service: Arc<AccountService>,
    user_service: Arc<UserService>,
    prometheus_handle: PrometheusHandle,
) -> Router {
    let middleware_state = AuthState {
        jwt_config: jwt_config.clone(),
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // ── Auth routes ────────────────────────────────────────────
    let auth_state = auth::AuthHandlerState {
        user_service: user_service.clone(),
        jwt_config,
    };

    let auth_routes = Router::new()
        .route("/login", post(auth::login))
        .with_state(auth_state.clone());

    let auth_protected_routes = Router::new()
        .route("/me", get(auth::get_current_user))
        .route("/change-password", put(auth::change_password))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(auth_state);

    // ── User routes (protected) ────────────────────────────────
    let user_state = users::UserHandlerState { user_service };
    let user_routes = Router::new()
        .route("/", get(users::list_users).post(users::create_user))
        .route("/roles", get(users::list_roles))
        .route(
            "/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(user_state);

    // ── Member routes (protected) ──────────────────────────────
    let member_state = members::MemberHandlerState { member_service };
    let member_routes = Router::new()
        .route("/", get(members::list_members).post(members::create_member))
        .route(
            "/{id}",
            get(members::get_member)
                .put(members::update_member)
                .delete(members::delete_member),
        )
        .route("/{id}/status", put(members::set_member_status))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(member_state);

    // ── Reading routes (protected) ─────────────────────────────
    let reading_state = readings::ReadingHandlerState { reading_service };
    let reading_routes = Router::new()
        .route(
            "/",
            get(readings::list_readings).post(readings::create_reading),
        )
        .route("/{id}", get(readings::get_reading))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(reading_state.clone());

    // Member reading history lives under /members but uses the reading state
    let member_reading_routes = Router::new()
        .route(
            "/api/v1/members/{id}/readings",
            get(readings::list_member_readings),
        )
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(reading_state);

    // ── Invoice routes (protected) ─────────────────────────────
    let invoice_state = invoices::InvoiceHandlerState {
        repos,
        billing_service: billing_service.clone(),
        account_service: account_service.clone(),
    };
    let invoice_routes = Router::new()
        .route(
            "/",
            get(invoices::list_invoices).post(invoices::issue_invoice),
        )
        .route("/stats", get(invoices::invoice_stats))
        .route("/refresh-overdue", post(invoices::refresh_overdue))
        .route("/{id}", get(invoices::get_invoice))
        .route("/{id}/pay", post(invoices::pay_invoice))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(invoice_state);

    // ── Tariff routes (protected) ──────────────────────────────
    let tariff_state = tariffs::TariffHandlerState { billing_service };
    let tariff_routes = Router::new()
        .route(
            "/",
            get(tariffs::list_tariffs).put(tariffs::replace_tariffs),
        )
        .route("/preview-amount", post(tariffs::preview_amount))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(tariff_state);

    // ── Dashboard routes (protected) ───────────────────────────
    let dashboard_state = dashboard::DashboardState { account_service };
    let dashboard_routes = Router::new()
        .route("/summary", get(dashboard::dashboard_summary))
        .route("/activity", get(dashboard::recent_activity))
        .layer(middleware::from_fn_with_state(
            middleware_state,
            auth_middleware,
        ))
        .with_state(dashboard_state);

    // Notification WebSocket routes (no auth for WebSocket upgrade)
    let notification_state = create_notification_state(event_bus);
    let notification_routes = Router::new()
        .route("/ws", get(ws_notifications_handler))
        .with_state(notification_state);

    // Health + metrics (no auth)
    let health_state = health::HealthState {
        db,
        started_at: Arc::new(Instant::now()),
    };
    let metrics_state = metrics::MetricsState {
        handle: prometheus_handle,
    };

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    // Build router
    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health
        .route("/health", get(health::health_check).with_state(health_state))
        // Prometheus metrics
        .route(
            "/metrics",
            get(metrics::prometheus_metrics).with_state(metrics_state),
        )
        // Auth
        .nest("/api/v1/auth", auth_routes)
        .nest("/api/v1/auth", auth_protected_routes)
        // Users
        .nest("/api/v1/users", user_routes)
        // Members
        .nest("/api/v1/members", member_routes)
        .merge(member_reading_routes)
        // Readings
        .nest("/api/v1/readings", reading_routes)
        // Invoices
        .nest("/api/v1/invoices", invoice_routes)
        // Tariffs
        .nest("/api/v1/tariffs", tariff_routes)
        // Dashboard
        .nest("/api/v1/dashboard", dashboard_routes)
        // Notifications WebSocket
        .nest("/api/v1/notifications", notification_routes)
        // Middleware
        .layer(middleware::from_fn(metrics::http_metrics_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
