//src/main.rs

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use solarproject::{
    config::{AppState, Config},
    routes,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG controla o nível; sem ele, "info".
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    // Se a configuração ou as migrações falharem, a aplicação não deve iniciar.
    let app_state = AppState::new(&config).await?;

    let app = routes::router(app_state);

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
