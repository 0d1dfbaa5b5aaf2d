use anyhow::Context;
use std::sync::Arc;
use structured_chat::{
    AppConfig, AppState,
    api::routes::build_app,
    cli::{Cli, Commands},
    utils::config::{LogFormat, ServerConfig},
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse_args();

    let config_found = cli.config.exists();
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    config.apply_env_overrides()?;
    config.apply_cli_overrides(cli.host, cli.port);
    config.validate()?;

    if let Some(Commands::CheckConfig) = cli.command {
        print!("{}", config.describe());
        return Ok(());
    }

    init_tracing(&config.server);

    if !config_found {
        tracing::info!(path = %cli.config.display(), "No config file, using defaults");
    }

    if config.api_key().is_none() {
        tracing::warn!(
            env = %config.llm.api_key_env,
            "API key is not set; model requests will fail until it is"
        );
    }

    let provider = config.provider();
    let llm = provider
        .create_client()
        .context("creating LLM client")?;
    tracing::info!(
        provider = provider.name(),
        api_base = %config.llm.api_base,
        "LLM client ready"
    );

    let addr = config.bind_address();
    let state = AppState::new(config, Arc::from(llm));
    let feedback = state.assistant.feedback_config();
    tracing::info!(
        model = state.assistant.model_name(),
        edit_policy = ?feedback.edit_policy,
        record_fallback = feedback.record_fallback,
        "Assistant ready"
    );
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},tower_http=info", server.log_level)));

    let registry = tracing_subscriber::registry().with(filter);
    match server.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
