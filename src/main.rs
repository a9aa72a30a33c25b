use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use minutes::cli::read_notes;
use minutes::connector::{APP_NAME, APP_VERSION};
use minutes::{router, validate_raw_notes, Commands, Container, ContainerConfig, Provider};

#[derive(Parser)]
#[command(name = "minutes")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Tracing filter, e.g. `info` or `minutes=debug,tower_http=info`
    #[arg(long, global = true, env = "MINUTES_LOG", default_value = "info")]
    log_level: String,

    #[arg(long, global = true, value_enum, env = "MINUTES_PROVIDER", default_value = "openai")]
    provider: Provider,

    /// API key; falls back to OPENAI_API_KEY / ANTHROPIC_API_KEY for the chosen provider
    #[arg(long, global = true, env = "MINUTES_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    #[arg(long, global = true, env = "MINUTES_MODEL")]
    model: Option<String>,

    #[arg(long, global = true, env = "MINUTES_BASE_URL")]
    base_url: Option<String>,

    #[arg(long, global = true, env = "MINUTES_MAX_TOKENS", default_value = "2000")]
    max_tokens: u32,

    #[arg(long, global = true, env = "MINUTES_MAX_ATTEMPTS", default_value = "3")]
    max_attempts: u32,

    #[arg(long, global = true, env = "MINUTES_BACKOFF_UNIT_MS", default_value = "1000")]
    backoff_unit_ms: u64,

    #[arg(long, global = true, env = "MINUTES_REQUEST_TIMEOUT_SECS", default_value = "120")]
    request_timeout_secs: u64,

    /// Timeout of a single provider HTTP call
    #[arg(long, global = true, env = "MINUTES_HTTP_TIMEOUT_SECS", default_value = "30")]
    http_timeout_secs: u64,

    #[arg(long, global = true, env = "MINUTES_MAX_INPUT_LENGTH", default_value = "50000")]
    max_input_length: usize,

    /// Use a canned offline model instead of a real provider
    #[arg(long, global = true)]
    mock_llm: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn container_config(&self) -> ContainerConfig {
        let provider_key_var = match self.provider {
            Provider::Openai => "OPENAI_API_KEY",
            Provider::Anthropic => "ANTHROPIC_API_KEY",
        };
        let api_key = self
            .api_key
            .clone()
            .or_else(|| std::env::var(provider_key_var).ok());

        ContainerConfig {
            provider: self.provider,
            api_key,
            model: self.model.clone(),
            base_url: self.base_url.clone(),
            max_tokens: self.max_tokens,
            max_attempts: self.max_attempts,
            backoff_unit: Duration::from_millis(self.backoff_unit_ms),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            http_timeout: Duration::from_secs(self.http_timeout_secs),
            max_input_length: self.max_input_length,
            mock_llm: self.mock_llm,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let container = Arc::new(Container::new(cli.container_config())?);

    match cli.command {
        Commands::Serve { host, port } => {
            info!("Starting {} v{}", APP_NAME, APP_VERSION);
            info!("Using model: {}", container.model_name());

            let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
            info!("Listening on http://{}", listener.local_addr()?);

            axum::serve(listener, router(container))
                .with_graceful_shutdown(shutdown_signal())
                .await?;
        }

        Commands::Generate { input } => {
            let notes = read_notes(&input)?;
            validate_raw_notes(&notes, container.config().max_input_length)?;

            let minutes = container
                .generate_minutes_use_case()
                .execute(&notes)
                .await?;
            println!("{}", serde_json::to_string_pretty(&minutes)?);
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
