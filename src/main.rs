//! Lumina APR administration service entry point.
//!
//! Reads configuration from TOML file (~/.config/lumina-apr/config.toml),
//! runs migrations, and serves the REST API.

use std::sync::Arc;

use sea_orm_migration::MigratorTrait;
use tokio::sync::watch;
use tracing::{error, info, warn};

use lumina_apr::application::{
    AccountService, BillingService, MemberService, OverdueConfig, OverdueMonitor, ReadingService,
    UserService,
};
use lumina_apr::config::AppConfig;
use lumina_apr::domain::RepositoryProvider;
use lumina_apr::infrastructure::crypto::jwt::JwtConfig;
use lumina_apr::infrastructure::database::migrator::Migrator;
use lumina_apr::{
    create_api_router, create_event_bus, default_config_path, init_database, DatabaseConfig,
    SeaOrmRepositoryProvider,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("APR_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            // Initialize logging with configured level
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!("Starting Lumina APR administration service...");

    // ── Prometheus metrics recorder (must be installed before any metrics calls) ──
    let prometheus_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus metrics recorder");
    info!("Prometheus metrics recorder installed");

    // ── Build sub-configs from AppConfig ───────────────────────
    let db_config = DatabaseConfig {
        url: app_cfg.database.connection_url(),
    };
    info!("Database: {}", db_config.url);

    let jwt_config = JwtConfig {
        secret: app_cfg.security.jwt_secret.clone(),
        expiration_hours: app_cfg.security.jwt_expiration_hours,
        issuer: "lumina-apr".to_string(),
    };
    info!(
        "JWT configured with {}h token expiration",
        jwt_config.expiration_hours
    );

    // ── Database ───────────────────────────────────────────────
    let db = match init_database(&db_config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    info!("Running database migrations...");
    if let Err(e) = Migrator::up(&db, None).await {
        error!("Failed to run migrations: {}", e);
        return Err(e.into());
    }
    info!("Migrations completed");

    // Initialize repository provider
    let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));

    // Initialize event bus for cache-invalidation notifications
    let event_bus = create_event_bus();
    info!("Event bus initialized for real-time notifications");

    // Initialize services
    let member_service = Arc::new(MemberService::new(repos.clone(), event_bus.clone()));
    let reading_service = Arc::new(ReadingService::new(repos.clone(), event_bus.clone()));
    let billing_service = Arc::new(BillingService::new(
        repos.clone(),
        event_bus.clone(),
        app_cfg.billing.due_days,
    ));
    let account_service = Arc::new(AccountService::new(repos.clone()));
    let user_service = Arc::new(UserService::new(repos.clone(), event_bus.clone()));

    // Create default admin user if not exists
    create_default_admin(&user_service, repos.as_ref(), &app_cfg).await;

    // ── Shutdown signal (SIGINT / SIGTERM) ─────────────────────
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        wait_for_shutdown_signal().await;
        info!("Shutdown signal received");
        let _ = shutdown_tx.send(true);
    });

    // Start the overdue sweep
    let overdue_monitor = OverdueMonitor::new(billing_service.clone()).with_config(OverdueConfig {
        check_interval_secs: app_cfg.billing.overdue_check_interval_secs,
    });
    overdue_monitor.start(shutdown_rx.clone());

    // Create REST API router
    let api_router = create_api_router(
        repos,
        db.clone(),
        jwt_config,
        event_bus,
        member_service,
        reading_service,
        billing_service,
        account_service,
        user_service,
        prometheus_handle,
    );

    // Start REST API server with graceful shutdown
    let api_addr = format!("{}:{}", app_cfg.server.api_host, app_cfg.server.api_port);
    let listener = tokio::net::TcpListener::bind(&api_addr).await?;
    info!("REST API server listening on http://{}", api_addr);
    info!("Swagger UI available at http://{}/docs/", api_addr);

    let mut api_shutdown = shutdown_rx;
    axum::serve(listener, api_router)
        .with_graceful_shutdown(async move {
            let _ = api_shutdown.changed().await;
            info!("REST API server received shutdown signal");
        })
        .await?;

    // Perform final cleanup
    info!("Performing final cleanup...");

    if let Err(e) = db.close().await {
        warn!("Error closing database connection: {}", e);
    } else {
        info!("Database connection closed");
    }

    info!("Lumina APR administration service shutdown complete");
    Ok(())
}

/// Block until SIGINT (Ctrl+C) or SIGTERM arrives.
async fn wait_for_shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}

/// Create default admin user if no users exist
async fn create_default_admin(
    user_service: &UserService,
    repos: &dyn RepositoryProvider,
    app_cfg: &AppConfig,
) {
    use lumina_apr::domain::UserRole;

    let users_count = repos.users().count().await.unwrap_or(0);

    if users_count == 0 {
        info!("Creating default admin user...");

        match user_service
            .register(
                &app_cfg.admin.username,
                &app_cfg.admin.email,
                &app_cfg.admin.password,
                UserRole::Admin,
            )
            .await
        {
            Ok(admin) => {
                info!("Default admin created: {}", admin.email);
                warn!("Please change the admin password immediately!");
            }
            Err(e) => {
                error!("Failed to create admin user: {}", e);
            }
        }
    }
}
