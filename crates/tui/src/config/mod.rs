use clap::Parser;
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/tui.toml";
const ENV_PREFIX: &str = "EXPENSES_TUI";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Collection URL of the expenses API.
    pub backend_url: String,
    pub log_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:3500/api/expenses".to_string(),
            log_file: "expenses_tui.log".to_string(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "expenses_tui", disable_version_flag = true)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override the API URL (e.g. http://localhost:3500/api/expenses).
    #[arg(long)]
    backend_url: Option<String>,
    /// Override the log file path.
    #[arg(long)]
    log_file: Option<String>,
}

pub fn load() -> Result<AppConfig> {
    resolve(Args::parse(), config::Environment::with_prefix(ENV_PREFIX))
}

/// File, then environment, then CLI flags.
fn resolve(args: Args, env: config::Environment) -> Result<AppConfig> {
    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut settings: AppConfig = config::Config::builder()
        .add_source(config::File::with_name(config_path).required(false))
        .add_source(env)
        .build()?
        .try_deserialize()?;

    if let Some(backend_url) = args.backend_url {
        settings.backend_url = backend_url;
    }
    if let Some(log_file) = args.log_file {
        settings.log_file = log_file;
    }

    Ok(settings)
}
