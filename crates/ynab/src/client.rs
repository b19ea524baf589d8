use std::sync::Arc;

use crate::{
    Result,
    api::{AccountsApi, CategoriesApi, TransactionsApi},
    rest::RestBase,
    transport::{ReqwestTransport, Transport},
};

pub const BASE_URL: &str = "https://api.ynab.com";
pub const API_VERSION: &str = "v1";

/// Client scoped to a single budget.
///
/// ```no_run
/// let client = ynab::BudgetClient::new("budget-id", "personal-access-token")?;
/// if let Some(account) = client.accounts.get_by_name("Checking")? {
///     for transaction in account.transactions(None)? {
///         println!("{transaction}");
///     }
/// }
/// # Ok::<(), ynab::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct BudgetClient {
    pub budget_id: String,
    pub accounts: AccountsApi,
    pub categories: CategoriesApi,
    pub transactions: TransactionsApi,
}

impl BudgetClient {
    /// Client against the public API with the default transport.
    pub fn new(budget_id: &str, token: &str) -> Result<Self> {
        Self::builder().budget_id(budget_id).token(token).build()
    }

    /// Return a builder for `BudgetClient`.
    pub fn builder() -> BudgetClientBuilder {
        BudgetClientBuilder::default()
    }
}

#[derive(Default)]
pub struct BudgetClientBuilder {
    budget_id: String,
    token: String,
    host: Option<String>,
    api_version: Option<String>,
    transport: Option<Arc<dyn Transport>>,
}

impl BudgetClientBuilder {
    pub fn budget_id(mut self, budget_id: &str) -> BudgetClientBuilder {
        self.budget_id = budget_id.to_string();
        self
    }

    pub fn token(mut self, token: &str) -> BudgetClientBuilder {
        self.token = token.to_string();
        self
    }

    pub fn host(mut self, host: &str) -> BudgetClientBuilder {
        self.host = Some(host.to_string());
        self
    }

    pub fn api_version(mut self, api_version: &str) -> BudgetClientBuilder {
        self.api_version = Some(api_version.to_string());
        self
    }

    pub fn transport(mut self, transport: Arc<dyn Transport>) -> BudgetClientBuilder {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<BudgetClient> {
        let host = self.host.as_deref().unwrap_or(BASE_URL);
        let api_version = self.api_version.as_deref().unwrap_or(API_VERSION);
        tracing::debug!("Initializing client for budget {} on {host}", self.budget_id);

        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new()),
        };
        let rest = RestBase::new(host, api_version, &self.token, transport)?;

        let transactions = TransactionsApi::new(rest.clone(), &self.budget_id);
        let accounts = AccountsApi::new(
            rest.clone(),
            &self.budget_id,
            Arc::new(transactions.clone()),
        );
        let categories = CategoriesApi::new(rest, &self.budget_id);

        Ok(BudgetClient {
            budget_id: self.budget_id,
            accounts,
            categories,
            transactions,
        })
    }
}
