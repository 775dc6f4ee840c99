use std::time::Duration;

use arrrg::CommandLine;
use arrrg_derive::CommandLine;
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::EnvFilter;

use numclass::{
    ClassifyState, DEFAULT_FACT_TIMEOUT, DEFAULT_FACT_URL, FactServiceConfig, create_router,
};

#[derive(CommandLine, Default, PartialEq, Eq)]
struct Args {
    #[arrrg(optional, "Host to bind the HTTP server")]
    host: Option<String>,
    #[arrrg(optional, "Port to bind the HTTP server")]
    port: Option<u16>,
    #[arrrg(optional, "Base URL of the numbers fact service")]
    fact_url: Option<String>,
    #[arrrg(optional, "Timeout for fact lookups in milliseconds")]
    fact_timeout_ms: Option<u64>,
    #[arrrg(flag, "Enable debug logging")]
    debug: bool,
}

const HELP_TEXT: &str = r#"numclassd - Number classification daemon

USAGE:
    numclassd [OPTIONS]

OPTIONS:
    --host <HOST>              Host to bind the HTTP server [default: 0.0.0.0]
    --port <PORT>              Port to bind the HTTP server [default: 5000]
    --fact-url <URL>           Base URL of the numbers fact service [default: http://numbersapi.com]
    --fact-timeout-ms <MS>     Timeout for fact lookups in milliseconds [default: 2000]
    --debug                    Enable debug logging

DESCRIPTION:
    Classifies integers by primality, perfection, Armstrong-ness, parity
    and digit sum, and attaches a fun fact about each number.

    RUST_LOG overrides the log level chosen by --debug.
    The server supports graceful shutdown via Ctrl+C.

API ENDPOINTS:
    GET /api/classify-number?number=<n>   Classify an integer"#;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (args, free) = Args::from_command_line("USAGE: numclassd [OPTIONS]");

    if !free.is_empty() && free[0] == "help" {
        println!("{}", HELP_TEXT);
        return Ok(());
    }

    let config = ServerConfig::from_args(args);
    init_logging(config.debug);

    tracing::debug!(
        host = %config.host,
        port = config.port,
        fact_url = %config.facts.base_url,
        fact_timeout_ms = config.facts.timeout.as_millis() as u64,
        "numclassd starting"
    );

    let state = ClassifyState::new(&config.facts)?;
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| format!("Failed to bind to {}: {}", addr, e))?;

    tracing::info!("listening on http://{}", addr);

    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            result.map_err(|e| format!("Server error: {}", e))?;
        }
        result = signal::ctrl_c() => {
            result.map_err(|e| format!("Failed to install Ctrl+C handler: {}", e))?;
            tracing::info!("shutdown signal received, stopping server");
        }
    }

    Ok(())
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

struct ServerConfig {
    host: String,
    port: u16,
    facts: FactServiceConfig,
    debug: bool,
}

impl ServerConfig {
    fn from_args(args: Args) -> Self {
        Self {
            host: args.host.unwrap_or_else(|| "0.0.0.0".to_string()),
            port: args.port.unwrap_or(5000),
            facts: FactServiceConfig {
                base_url: args
                    .fact_url
                    .unwrap_or_else(|| DEFAULT_FACT_URL.to_string()),
                timeout: args
                    .fact_timeout_ms
                    .map(Duration::from_millis)
                    .unwrap_or(DEFAULT_FACT_TIMEOUT),
            },
            debug: args.debug,
        }
    }
}
