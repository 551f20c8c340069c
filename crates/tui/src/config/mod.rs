use clap::Parser;
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/tui.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub holder: String,
    pub account_number: String,
    pub initial_balance: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            holder: "Alex F. Aero".to_string(),
            account_number: "1234567890".to_string(),
            initial_balance: "5000.75".to_string(),
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "aerodesk_tui", disable_version_flag = true)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override the account holder shown in the bank header.
    #[arg(long)]
    holder: Option<String>,
    /// Override the account number (only the last 4 characters are shown).
    #[arg(long)]
    account_number: Option<String>,
    /// Override the starting balance (e.g. 5000.75).
    #[arg(long)]
    initial_balance: Option<String>,
    /// Override the log level (e.g. info, debug).
    #[arg(long)]
    log_level: Option<String>,
}

pub fn load() -> Result<AppConfig> {
    let args = Args::parse();

    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("AERODESK"));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(holder) = args.holder {
        settings.holder = holder;
    }
    if let Some(account_number) = args.account_number {
        settings.account_number = account_number;
    }
    if let Some(initial_balance) = args.initial_balance {
        settings.initial_balance = initial_balance;
    }
    if let Some(log_level) = args.log_level {
        settings.log_level = log_level;
    }

    Ok(settings)
}
