//! # InfoRecon
//!
//! Cached reconnaissance lookups over HTTP: DNS records, IP geolocation and
//! ASN data, and web search.

mod bootstrap;
mod di;
mod server;

use clap::Parser;
use inforecon_api::AppState;
use inforecon_domain::{CacheBackend, CliOverrides};
use inforecon_jobs::{CacheSweepJob, JobRunner};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use di::{build_cache_store, Providers, UseCases};

#[derive(Parser)]
#[command(name = "inforecon")]
#[command(version)]
#[command(about = "Cached DNS, IP and web search reconnaissance service")]
struct Cli {
    /// Path to the TOML config file (defaults to ./inforecon.toml when present)
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// HTTP port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Cache backend: redis or memory
    #[arg(long)]
    cache_backend: Option<CacheBackend>,

    /// Log level: trace, debug, info, warn, error
    #[arg(short = 'l', long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        bind_address: cli.bind,
        port: cli.port,
        cache_backend: cli.cache_backend,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);
    bootstrap::log_config_summary(cli.config.as_deref(), &config);

    info!(version = env!("CARGO_PKG_VERSION"), "InfoRecon starting");

    let store = build_cache_store(&config).await;
    let cache_backend = store.backend_name();
    let providers = Providers::new(&config)?;
    let use_cases = UseCases::new(&config, store.clone(), providers);

    let shutdown = CancellationToken::new();

    if cache_backend == "memory" {
        JobRunner::new()
            .with_cache_sweep(
                CacheSweepJob::new(store)
                    .with_interval(config.cache.sweep_interval_secs)
                    .with_cancellation(shutdown.clone()),
            )
            .start()
            .await;
    }

    let state = AppState {
        get_dns_info: use_cases.get_dns_info,
        get_ip_info: use_cases.get_ip_info,
        batch_ip_info: use_cases.batch_ip_info,
        web_search: use_cases.web_search,
        max_batch_size: config.server.max_batch_size,
        cache_backend,
    };

    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for shutdown signal");
            return;
        }
        info!("Shutdown signal received");
        signal_token.cancel();
    });

    let result = server::start_web_server(&config.server, state, shutdown.clone()).await;
    shutdown.cancel();

    if let Err(e) = &result {
        error!(error = %e, "HTTP server failed");
    }
    result
}
