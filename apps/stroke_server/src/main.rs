use clap::Parser;
use log::{error, info};
use stroke_ai::{Model, Predictor};
use stroke_model::ModelBundle;
use stroke_server::{router, AppState, Cli, ServerError};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();

    if let Err(e) = run(cli).await {
        error!("{e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), ServerError> {
    let config = cli.resolve_config()?;
    let bundle = ModelBundle::load(&config.model_path)?;
    let predictor = Predictor::new(bundle);
    info!(
        "serving {} ({} backend)",
        predictor.name(),
        predictor.backend_name()
    );
    let state = AppState::new(predictor)?;
    let app = router(state, config.cors);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;
    info!("stroke_server listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;
    info!("stroke_server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to install Ctrl+C handler: {e}");
        std::future::pending::<()>().await;
    }
}
