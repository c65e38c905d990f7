use inforecon_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Must run after logging is initialized.
pub fn log_config_summary(config_path: Option<&str>, config: &Config) {
    info!(
        config_file = config_path.unwrap_or("default"),
        bind = %config.server.bind_address,
        port = config.server.port,
        cache_backend = %config.cache.backend,
        nameservers = config.dns.nameservers.len(),
        "Configuration loaded"
    );
}
