mod commands;
mod config;
mod error;

use crate::error::Result;

fn main() -> Result<()> {
    let (settings, command) = config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "ynab={level},ynab_cli={level}",
            level = settings.level
        ))
        .with_writer(std::io::stderr)
        .init();

    let client = ynab::BudgetClient::builder()
        .host(&settings.host)
        .api_version(&settings.api_version)
        .budget_id(&settings.budget_id)
        .token(&settings.token)
        .build()?;
    tracing::info!("Using budget {}", client.budget_id);

    commands::run(&client, command)
}
