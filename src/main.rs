use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use fleetpro_backend::config::environment::EnvironmentConfig;
use fleetpro_backend::create_app;
use fleetpro_backend::state::AppState;
use fleetpro_backend::storage::{seed::demo_fleet_data, FleetStore, JsonFileStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("🚚 FleetPro - API de gestión de flota");
    info!("================================================");

    let config = EnvironmentConfig::from_env()?;
    info!("🌍 Entorno: {}", config.environment);
    if config.is_development() && config.cors_origins.is_empty() {
        info!("🔓 Modo desarrollo: CORS abierto a cualquier origen");
    }

    // Inicializar el fichero de datos
    let store = JsonFileStore::new(config.data_file.clone());
    if config.seed_demo_data {
        match store.ensure_initialized(&demo_fleet_data()).await {
            Ok(true) => info!("🌱 Datos de demo escritos en {}", store.path().display()),
            Ok(false) => info!("📂 Usando datos existentes en {}", store.path().display()),
            Err(e) => {
                error!("❌ Error inicializando el fichero de datos: {}", e);
                return Err(anyhow::anyhow!("Error de datos: {}", e));
            }
        }
    }
    if let Err(e) = store.read().await {
        error!("❌ No se puede leer {}: {}", store.path().display(), e);
        return Err(anyhow::anyhow!("Error de datos: {}", e));
    }

    let addr: SocketAddr = config.server_url().parse()?;
    let app = create_app(AppState::new(Arc::new(store), config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /api/health - Endpoint de prueba");
    info!("   GET  /api/data - Instantánea completa + systemStats");
    info!("   POST /api/auth/login - Login");
    info!("🧳 Viajes (usuario):");
    info!("   POST /api/journeys/request - Solicitar viaje");
    info!("   GET  /api/journeys - Listar viajes (?userId&driverId&status)");
    info!("   GET  /api/journeys/:id - Obtener viaje");
    info!("   POST /api/journeys/cancel - Cancelar viaje");
    info!("   POST /api/journeys/dropoff - Solicitar dropoff");
    info!("   POST /api/journeys/route-change - Añadir parada");
    info!("   POST /api/journeys/route-change/remove - Quitar parada");
    info!("   POST /api/journeys/route-change/destination - Cambiar destino");
    info!("   POST /api/journeys/rate - Valorar viaje");
    info!("🧑‍✈️ Conductor:");
    info!("   POST /api/driver/journeys/complete - Completar viaje");
    info!("   POST /api/driver/leave-requests - Solicitar permiso");
    info!("   GET  /api/driver/leave-requests?driverId= - Listar permisos");
    info!("🛠️ Admin:");
    info!("   GET  /api/admin/stats - Estadísticas");
    info!("   POST /api/admin/journeys/assign - Asignar coche y conductor");
    info!("   POST /api/admin/journeys/decline - Rechazar solicitud");
    info!("   PUT  /api/admin/cars/status | drivers/status | users/status");
    info!("   PUT  /api/admin/leave-requests/status - Revisar permiso");
    info!("   POST /api/admin/users | drivers | cars - Altas");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el manejador de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el manejador de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
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
