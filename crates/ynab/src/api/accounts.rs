use std::{fmt, sync::Arc};

use serde::Deserialize;
use serde_json::Value;

use super::{Envelope, budget_uri};
use crate::{
    Result,
    model::{Account, AccountTransactions},
    rest::RestBase,
};

#[derive(Debug, Deserialize)]
struct AccountsData {
    accounts: Vec<Value>,
}

#[derive(Clone)]
pub struct AccountsApi {
    rest: RestBase,
    budget_uri: String,
    transactions: Arc<dyn AccountTransactions>,
}

impl fmt::Debug for AccountsApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountsApi")
            .field("rest", &self.rest)
            .field("budget_uri", &self.budget_uri)
            .finish_non_exhaustive()
    }
}

impl AccountsApi {
    /// `transactions` is handed to every decoded account so it can fetch its
    /// own transactions.
    pub fn new(rest: RestBase, budget_id: &str, transactions: Arc<dyn AccountTransactions>) -> Self {
        Self {
            rest,
            budget_uri: budget_uri(budget_id),
            transactions,
        }
    }

    pub fn get_all(&self) -> Result<Vec<Account>> {
        let path = format!("{}accounts", self.budget_uri);
        let envelope: Envelope<AccountsData> = self.rest.get(&path, &[])?;

        let accounts = envelope
            .data
            .accounts
            .into_iter()
            .map(|raw| Account::from_value(raw, Some(self.transactions.clone())))
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!("decoded {} accounts", accounts.len());
        Ok(accounts)
    }

    /// First account whose name is exactly `name`, `None` when there is none.
    pub fn get_by_name(&self, name: &str) -> Result<Option<Account>> {
        Ok(self
            .get_all()?
            .into_iter()
            .find(|account| account.name.as_deref() == Some(name)))
    }
}
