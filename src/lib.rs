pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod models;
pub mod services;
pub mod state;

pub use config::Config;
pub use state::SharedState;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

pub async fn run() -> anyhow::Result<()> {
    let config = Config::load()?;
    config.validate()?;

    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    let fmt_layer = tracing_subscriber::fmt::layer();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => run_server(config).await,

        Some(Commands::List) => {
            let state = SharedState::from_config(config);
            cli::cmd_list_movies(&state)
        }

        Some(Commands::Search { term, id, genre }) => {
            let state = SharedState::from_config(config);
            cli::cmd_search_movies(&state, term.as_deref(), id, genre.as_deref())
        }

        Some(Commands::Genres) => {
            let state = SharedState::from_config(config);
            cli::cmd_list_genres(&state)
        }

        Some(Commands::Show { id }) => {
            let state = SharedState::from_config(config);
            cli::cmd_show_movie(&state, id)
        }

        Some(Commands::Init) => {
            if Config::create_default_if_missing()? {
                println!("✓ Config file created. Edit config.toml and run again.");
            } else {
                println!("Config file already exists, leaving it alone.");
            }
            Ok(())
        }

        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}

pub async fn run_server(config: Config) -> anyhow::Result<()> {
    info!("Marquee v{} starting...", env!("CARGO_PKG_VERSION"));

    let prometheus_handle = if config.observability.metrics_enabled {
        use metrics_exporter_prometheus::PrometheusBuilder;
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .context("Failed to install Prometheus recorder")?;
        info!("Prometheus metrics recorder initialized");
        Some(handle)
    } else {
        None
    };

    let port = config.server.port;
    let state = api::create_app_state_from_config(config, prometheus_handle);
    let app = api::router(state);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("🌐 Web server running at http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => error!("Error listening for shutdown: {}", e),
    }
}
