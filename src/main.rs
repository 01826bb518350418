use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};

use listado_autos::{
    config::environment::EnvironmentConfig, create_app, logging::init_logging,
    middleware::error_masking::install_panic_hook,
    repositories::vehicle_repository::VehicleRepository, state::AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    init_logging(&config.log_filter);
    install_panic_hook();

    info!("🚗 ComunidAuto - Listado de automóviles");
    info!("=======================================");
    info!("⚙️ Entorno: {}", config.environment);

    // Catálogo en memoria, de sólo lectura
    let repository = VehicleRepository::new_default()?;
    info!("✅ Catálogo cargado: {} vehículos", repository.len());

    let app = create_app(AppState::new(config.clone(), repository));

    let addr = config.server_url();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  / - Listado HTML (marca_modelo, precio_maximo, ordenar_por)");
    info!("   GET  /api/vehicles - Listado JSON con los mismos filtros");
    info!("   GET  /health - Estado del servicio");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
