use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Deserialize;

use crate::error::{AppError, Result};

const DEFAULT_CONFIG_PATH: &str = "config/ynab.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub token: String,
    pub budget_id: String,
    pub host: String,
    pub api_version: String,
    pub level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            budget_id: String::new(),
            host: ynab::BASE_URL.to_string(),
            api_version: ynab::API_VERSION.to_string(),
            level: "warn".to_string(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "ynab", disable_version_flag = true)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override budget id.
    #[arg(long)]
    budget_id: Option<String>,
    /// Override API host (e.g. http://127.0.0.1:8080).
    #[arg(long)]
    host: Option<String>,
    /// Override log level.
    #[arg(long)]
    level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List accounts.
    Accounts,
    /// List categories with their group.
    Categories,
    /// List transactions of the budget or of one account.
    Transactions {
        /// Account name.
        #[arg(long)]
        account: Option<String>,
        /// Only transactions with this payee name.
        #[arg(long)]
        payee: Option<String>,
        /// Only transactions modified on or after this date (YYYY-MM-DD).
        #[arg(long)]
        since: Option<NaiveDate>,
    },
    /// Import pending transactions from linked accounts.
    Import,
}

/// Layers the config file, `YNAB_*` environment variables and flags, in
/// that order. The token is never read from flags.
pub fn load() -> Result<(AppConfig, Command)> {
    let args = Args::parse();

    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("YNAB"));
    let settings: AppConfig = builder.build()?.try_deserialize()?;

    let settings = apply(settings, &args);
    if settings.token.is_empty() {
        return Err(AppError::MissingSetting("token (YNAB_TOKEN)"));
    }
    if settings.budget_id.is_empty() {
        return Err(AppError::MissingSetting("budget_id (YNAB_BUDGET_ID)"));
    }

    Ok((settings, args.command))
}

fn apply(mut settings: AppConfig, args: &Args) -> AppConfig {
    if let Some(budget_id) = &args.budget_id {
        settings.budget_id = budget_id.clone();
    }
    if let Some(host) = &args.host {
        settings.host = host.clone();
    }
    if let Some(level) = &args.level {
        settings.level = level.clone();
    }
    settings
}
