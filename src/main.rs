use contato_server::api::MgmtState;
use contato_server::config::Config;
use contato_server::services::contact_service::ContactService;
use contato_server::services::health_service::HealthService;
use contato_server::storage::submission_repo::SubmissionRepository;
use contato_server::{api, storage, telemetry};
use std::future::IntoFuture;
use std::net::SocketAddr;
use tokio::sync::watch;
use tracing::Instrument;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load();
    telemetry::init_telemetry(&config.telemetry)?;

    let boot_span = tracing::info_span!("boot_server");
    let (api_listener, mgmt_listener, app_router, mgmt_app) = async {
        // Phase 1: Infrastructure Setup
        let pool = storage::init_pool(&config.database).await?;
        storage::run_migrations(&pool).await?;

        // Phase 2: Component Wiring
        let contact_service = ContactService::new(SubmissionRepository::new(pool.clone()));
        let health_service = HealthService::new(pool);

        // Phase 3: Runtime Setup
        let app_router = api::app_router(config.clone(), contact_service);
        let mgmt_app = api::mgmt_router(MgmtState { health_service });

        let api_addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
        let mgmt_addr: SocketAddr = format!("{}:{}", config.server.host, config.server.mgmt_port).parse()?;

        tracing::info!(address = %api_addr, "listening");
        tracing::info!(address = %mgmt_addr, "management server listening");

        let api_listener = tokio::net::TcpListener::bind(api_addr).await?;
        let mgmt_listener = tokio::net::TcpListener::bind(mgmt_addr).await?;

        Ok::<_, anyhow::Error>((api_listener, mgmt_listener, app_router, mgmt_app))
    }
    .instrument(boot_span)
    .await?;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    contato_server::spawn_signal_handler(shutdown_tx);

    let mut api_rx = shutdown_rx.clone();
    let api_server = axum::serve(api_listener, app_router.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(async move {
            let _ = api_rx.wait_for(|&s| s).await;
        })
        .into_future();

    let mut mgmt_rx = shutdown_rx;
    let mgmt_server = axum::serve(mgmt_listener, mgmt_app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(async move {
            let _ = mgmt_rx.wait_for(|&s| s).await;
        })
        .into_future();

    if let Err(e) = tokio::try_join!(api_server, mgmt_server) {
        tracing::error!(error = %e, "Server error");
    }

    Ok(())
}
