//! Brandforge — brand catalog + AI color-scheme generation service.
//!
//! Startup sequence:
//!   1. Load .env (if present)
//!   2. Parse CLI args
//!   3. Load config
//!   4. Resolve effective log level (CLI `-v` flags > env > config)
//!   5. Init logger once
//!   6. Open the catalog store (runs schema + seed on first open)
//!   7. Build the LLM provider handle (missing API key is fine)
//!   8. Spawn Ctrl-C → shutdown signal watcher
//!   9. Serve HTTP until shutdown

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use brandforge::bootstrap::logger;
use brandforge::catalog::BrandStore;
use brandforge::llm::LlmProvider;
use brandforge::server::{self, AppState};
use brandforge::{config, error};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), error::AppError> {
    // Load .env if present — ignore errors (file is optional).
    let _ = dotenvy::dotenv();

    let args = parse_cli_args();

    let config = config::load(args.config_path.as_deref())?;

    let effective_log_level = args.log_level.unwrap_or(config.log_level.as_str());
    logger::init(effective_log_level, args.log_level.is_some())?;

    info!(
        bind = %config.server.bind,
        db_path = %config.storage.db_path.display(),
        llm_provider = %config.llm.provider,
        llm_model = %config.llm.openai.model,
        strict_scheme = %config.scheme.strict,
        effective_log_level = %effective_log_level,
        "config loaded"
    );

    if config.llm_api_key.is_none() {
        // Startup continues; generation requests will fail upstream until a
        // key is provided.
        warn!("OPENAI_API_KEY is not set — color-scheme generation will be rejected by the provider");
    }

    let store = Arc::new(BrandStore::open(&config.storage.db_path)?);

    let llm = LlmProvider::build(&config.llm, config.llm_api_key.clone())
        .map_err(|e| error::AppError::Config(e.to_string()))?;

    // Shared shutdown token — Ctrl-C cancels it.
    let shutdown = CancellationToken::new();
    let ctrlc_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("ctrl-c received — initiating shutdown");
            ctrlc_token.cancel();
        }
    });

    let state = AppState {
        store,
        llm,
        strict: config.scheme.strict,
    };

    server::run(&config.server.bind, state, shutdown).await
}

// ── CLI ───────────────────────────────────────────────────────────────────────

struct CliArgs {
    log_level: Option<&'static str>,
    config_path: Option<String>,
}

fn parse_cli_args() -> CliArgs {
    let mut verbosity = 0u8;
    let mut config_path = None;

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("Usage: brandforge [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -h, --help                 Print help");
                println!("  -f, --config <PATH>        Path to configuration file (default: config/default.toml)");
                println!("  -v, -vv, -vvv, -vvvv       Increase logging verbosity");
                std::process::exit(0);
            }
            "-f" | "--config" => {
                if let Some(path) = iter.next() {
                    config_path = Some(path);
                } else {
                    eprintln!("error: -f/--config requires a path argument");
                    std::process::exit(1);
                }
            }
            "--verbose" => verbosity = verbosity.saturating_add(1),
            a if a.starts_with('-') && a.len() > 1 && a.chars().skip(1).all(|c| c == 'v') => {
                verbosity = verbosity.saturating_add((a.len() - 1) as u8);
            }
            _ => {}
        }
    }

    // Each -v raises verbosity one tier from the config default:
    //   -v   → warn, -vv → info, -vvv → debug, -vvvv+ → trace
    let log_level = match verbosity {
        0 => None,
        1 => Some("warn"),
        2 => Some("info"),
        3 => Some("debug"),
        _ => Some("trace"),
    };

    CliArgs { log_level, config_path }
}
