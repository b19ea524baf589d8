use std::{fmt, sync::Arc};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Meta, Transaction, decode, or_dash};
use crate::{Error, Result};

/// The one thing an [`Account`] needs from the outside world: the
/// transactions recorded against it.
///
/// [`TransactionsApi`](crate::api::TransactionsApi) implements it; accounts
/// returned by [`AccountsApi`](crate::api::AccountsApi) come bound to it.
pub trait AccountTransactions: Send + Sync {
    fn for_account(
        &self,
        account_id: &str,
        since_date: Option<NaiveDate>,
    ) -> Result<Vec<Transaction>>;
}

#[derive(Clone, Default, Serialize, Deserialize)]
pub struct Account {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub deleted: Option<bool>,
    #[serde(flatten)]
    pub meta: Meta,
    #[serde(skip)]
    source: Option<Arc<dyn AccountTransactions>>,
}

impl Account {
    /// Decodes an account object, binding it to `source` when given.
    pub fn from_value(raw: Value, source: Option<Arc<dyn AccountTransactions>>) -> Result<Self> {
        let mut account: Self = decode(raw)?;
        account.source = source;
        Ok(account)
    }

    pub fn with_source(mut self, source: Arc<dyn AccountTransactions>) -> Self {
        self.source = Some(source);
        self
    }

    pub fn is_bound(&self) -> bool {
        self.source.is_some()
    }

    /// Fetches the transactions of this account, optionally only those
    /// modified on or after `since_date`.
    pub fn transactions(&self, since_date: Option<NaiveDate>) -> Result<Vec<Transaction>> {
        let source = self.source.as_ref().ok_or(Error::Detached)?;
        let id = self.id.as_deref().ok_or(Error::MissingId("account"))?;
        source.for_account(id, since_date)
    }

    pub fn transactions_by_payee(
        &self,
        payee_name: &str,
        since_date: Option<NaiveDate>,
    ) -> Result<Vec<Transaction>> {
        let mut transactions = self.transactions(since_date)?;
        transactions.retain(|t| t.payee_name.as_deref() == Some(payee_name));
        Ok(transactions)
    }
}

impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.kind == other.kind
            && self.deleted == other.deleted
            && self.meta == other.meta
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("deleted", &self.deleted)
            .field("meta", &self.meta)
            .field("bound", &self.is_bound())
            .finish()
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({})",
            or_dash(self.name.as_deref()),
            or_dash(self.kind.as_deref())
        )
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use serde_json::json;

    use super::*;

    #[derive(Default)]
    struct Recorded {
        calls: Mutex<Vec<(String, Option<NaiveDate>)>>,
    }

    impl AccountTransactions for Recorded {
        fn for_account(
            &self,
            account_id: &str,
            since_date: Option<NaiveDate>,
        ) -> Result<Vec<Transaction>> {
            self.calls
                .lock()
                .unwrap()
                .push((account_id.to_string(), since_date));
            Ok(vec![
                Transaction {
                    payee_name: Some("Grocer".into()),
                    ..Default::default()
                },
                Transaction {
                    payee_name: Some("Landlord".into()),
                    ..Default::default()
                },
            ])
        }
    }

    fn checking() -> Value {
        json!({
            "id": "acc-1",
            "name": "Checking",
            "type": "checking",
            "deleted": false,
            "on_budget": true,
            "balance": 125000
        })
    }

    #[test]
    fn unknown_keys_land_in_meta() {
        let account = Account::from_value(checking(), None).unwrap();

        assert_eq!(account.id.as_deref(), Some("acc-1"));
        assert_eq!(account.kind.as_deref(), Some("checking"));
        assert_eq!(account.deleted, Some(false));
        let mut keys: Vec<_> = account.meta.keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, ["balance", "on_budget"]);
        assert_eq!(account.meta["balance"], json!(125000));
    }

    #[test]
    fn non_object_fails() {
        assert!(matches!(
            Account::from_value(json!(["acc-1"]), None),
            Err(Error::Decode(_))
        ));
    }

    #[test]
    fn detached_account_cannot_fetch() {
        let account = Account::from_value(checking(), None).unwrap();
        assert!(matches!(account.transactions(None), Err(Error::Detached)));
    }

    #[test]
    fn bound_account_fetches_through_source() {
        let source = Arc::new(Recorded::default());
        let account = Account::from_value(checking(), Some(source.clone())).unwrap();
        let since = NaiveDate::from_ymd_opt(2024, 1, 31);

        let by_payee = account.transactions_by_payee("Grocer", since).unwrap();

        assert_eq!(by_payee.len(), 1);
        assert_eq!(
            source.calls.lock().unwrap().as_slice(),
            [("acc-1".to_string(), since)]
        );
    }

    #[test]
    fn equality_ignores_binding() {
        let bound = Account::from_value(checking(), Some(Arc::new(Recorded::default()))).unwrap();
        let plain = Account::from_value(checking(), None).unwrap();
        assert_eq!(bound, plain);
        assert_eq!(plain.to_string(), "Checking (checking)");
    }
}
