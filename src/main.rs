use quire::config::Config;
use quire::state::AppState;
use quire_core::Engine;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    tracing::info!("starting quire-server");

    let config = Config::load()?;
    tracing::info!(
        "assets: shell={}, components={}, schema={}",
        config.assets.shell.display(),
        config.assets.components.display(),
        config.assets.schema.display()
    );

    // Asset failures abort startup: the service must not run without a
    // valid baseline shell, library and rule schema.
    let engine = Engine::new(
        &config.assets.shell,
        &config.assets.components,
        &config.assets.schema,
    )?;
    tracing::info!("engine ready: {} components", engine.component_names().len());

    let app = quire::build_router(AppState::new(engine));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install ctrl-c handler");
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
        _ = ctrl_c => tracing::info!("received ctrl-c, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,quire=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
