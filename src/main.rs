use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use sunuvan_backend::config::environment::EnvironmentConfig;
use sunuvan_backend::create_app;
use sunuvan_backend::database::connection::{create_pool, mask_database_url};
use sunuvan_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::default();

    // Configurar logging (verboso fuera de producción)
    let log_level = if config.is_production() {
        tracing::Level::INFO
    } else {
        tracing::Level::DEBUG
    };
    tracing_subscriber::fmt().with_max_level(log_level).init();

    info!("🚐 Sunuvan Backend - Location de vans avec chauffeur");
    info!("====================================================");

    // Inicializar base de datos
    if let Ok(url) = std::env::var("DATABASE_URL") {
        info!("📦 Base de datos: {}", mask_database_url(&url));
    }
    let pool = match create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };
    info!("✅ PostgreSQL conectado");

    sqlx::migrate!("./migrations").run(&pool).await?;
    info!("✅ Migraciones aplicadas");

    let addr: SocketAddr = config.server_url().parse()?;
    let app_state = AppState::new(pool, config);
    let app = create_app(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /test - Endpoint de prueba");
    info!("🚐 Catálogo público:");
    info!("   GET  /api/vehicle - Listar vehículos");
    info!("   GET  /api/vehicle/:id - Detalle de vehículo");
    info!("   POST /api/contact - Formulario de contacto");
    info!("🔐 Autenticación:");
    info!("   POST /api/auth/register - Crear cuenta");
    info!("   POST /api/auth/login - Login");
    info!("   GET  /api/auth/me - Sesión actual");
    info!("   POST /api/auth/logout - Logout");
    info!("👤 Espacio cliente:");
    info!("   POST /api/booking - Crear reserva");
    info!("   GET  /api/booking - Mis reservas");
    info!("   GET  /api/booking/:id - Detalle de reserva");
    info!("   PATCH /api/booking/:id/cancel - Anular reserva");
    info!("   GET  /api/favorite - Mis favoritos");
    info!("   POST /api/favorite - Agregar favorito");
    info!("   DELETE /api/favorite/:vehicle_id - Quitar favorito");
    info!("   GET  /api/profile - Mi perfil");
    info!("   PUT  /api/profile - Actualizar perfil");
    info!("🛠  Back-office (/api/admin):");
    info!("   GET  /api/admin/dashboard - Métricas");
    info!("   POST /api/admin/vehicles - Crear vehículo");
    info!("   PUT  /api/admin/vehicles/:id - Actualizar vehículo");
    info!("   DELETE /api/admin/vehicles/:id - Eliminar vehículo");
    info!("   GET/POST /api/admin/drivers - Choferes");
    info!("   GET/POST /api/admin/bookings - Reservas");
    info!("   PUT  /api/admin/bookings/:id/status - Cambiar estado");
    info!("   PUT  /api/admin/bookings/:id/driver - Asignar chofer");
    info!("   PUT  /api/admin/bookings/:id/deposit - Marcar acompte pagado");
    info!("   GET  /api/admin/messages - Mensajes de contacto");
    info!("   GET  /api/admin/users - Usuarios");
    info!("   POST /api/admin/roles - Otorgar rol");
    info!("   GET/PUT /api/admin/settings - Configuración");
    info!("   POST /api/admin/upload - Subir imagen");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor detenido");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
