use ynab::{BudgetClient, Transaction};

use crate::{
    config::Command,
    error::{AppError, Result},
};

pub fn run(client: &BudgetClient, command: Command) -> Result<()> {
    match command {
        Command::Accounts => {
            for account in client.accounts.get_all()? {
                if account.deleted != Some(true) {
                    println!("{account}");
                }
            }
        }
        Command::Categories => {
            for category in client.categories.get_all()? {
                if category.deleted != Some(true) && category.hidden != Some(true) {
                    println!("{category}");
                }
            }
        }
        Command::Transactions {
            account,
            payee,
            since,
        } => {
            let transactions = match account {
                Some(name) => client
                    .accounts
                    .get_by_name(&name)?
                    .ok_or_else(|| AppError::NotFound(format!("account \"{name}\"")))?
                    .transactions(since)?,
                None => client.transactions.get_all(since)?,
            };
            for transaction in by_payee(transactions, payee.as_deref()) {
                println!("{transaction}");
                for split in &transaction.subtransactions {
                    println!("    {split}");
                }
            }
        }
        Command::Import => {
            let summary = client.transactions.import_all()?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }
    Ok(())
}

fn by_payee(transactions: Vec<Transaction>, payee: Option<&str>) -> Vec<Transaction> {
    match payee {
        Some(payee) => transactions
            .into_iter()
            .filter(|t| t.payee_name.as_deref() == Some(payee))
            .collect(),
        None => transactions,
    }
}
