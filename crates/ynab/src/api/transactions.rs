use chrono::NaiveDate;
use serde::{Deserialize, de::Error as _};
use serde_json::{Value, json};

use super::{Envelope, budget_uri, since_query};
use crate::{
    Error, Result,
    model::{AccountTransactions, SaveTransaction, Transaction, TransactionSet},
    rest::RestBase,
    transport::Method,
};

#[derive(Debug, Deserialize)]
struct TransactionsData {
    #[serde(default)]
    transactions: Option<Vec<Transaction>>,
    #[serde(default)]
    transaction: Option<Transaction>,
}

impl TransactionsData {
    fn into_set(self) -> Result<TransactionSet> {
        match (self.transactions, self.transaction) {
            (Some(transactions), _) => Ok(TransactionSet::Many(transactions)),
            (None, Some(transaction)) => Ok(TransactionSet::One(transaction)),
            (None, None) => Err(Error::Decode(serde_json::Error::missing_field(
                "transaction",
            ))),
        }
    }
}

/// What [`TransactionsApi::save`] accepts: one record or a batch.
#[derive(Clone, Copy, Debug)]
pub enum SaveInput<'a> {
    One(&'a Transaction),
    Many(&'a [Transaction]),
}

impl<'a> From<&'a Transaction> for SaveInput<'a> {
    fn from(transaction: &'a Transaction) -> Self {
        Self::One(transaction)
    }
}

impl<'a> From<&'a [Transaction]> for SaveInput<'a> {
    fn from(transactions: &'a [Transaction]) -> Self {
        Self::Many(transactions)
    }
}

impl<'a> From<&'a Vec<Transaction>> for SaveInput<'a> {
    fn from(transactions: &'a Vec<Transaction>) -> Self {
        Self::Many(transactions)
    }
}

#[derive(Clone, Debug)]
pub struct TransactionsApi {
    rest: RestBase,
    budget_uri: String,
}

impl TransactionsApi {
    pub fn new(rest: RestBase, budget_id: &str) -> Self {
        Self {
            rest,
            budget_uri: budget_uri(budget_id),
        }
    }

    fn path(&self, suffix: &str) -> String {
        format!("{}{suffix}", self.budget_uri)
    }

    fn list(&self, path: &str, since_date: Option<NaiveDate>) -> Result<Vec<Transaction>> {
        let envelope: Envelope<TransactionsData> = self.rest.get(path, &since_query(since_date))?;
        let transactions = envelope.data.into_set()?.into_vec();
        tracing::debug!("decoded {} transactions", transactions.len());
        Ok(transactions)
    }

    fn write(&self, method: Method, path: &str, body: Value) -> Result<TransactionSet> {
        let envelope: Envelope<TransactionsData> = self.rest.send(method, path, body)?;
        envelope.data.into_set()
    }

    fn payloads(transactions: &[Transaction]) -> Vec<SaveTransaction> {
        transactions.iter().map(Transaction::save_payload).collect()
    }

    /// Every transaction of the budget, optionally only those modified on or
    /// after `since_date`.
    pub fn get_all(&self, since_date: Option<NaiveDate>) -> Result<Vec<Transaction>> {
        self.list(&self.path("transactions"), since_date)
    }

    pub fn get_by_account(
        &self,
        account_id: &str,
        since_date: Option<NaiveDate>,
    ) -> Result<Vec<Transaction>> {
        self.list(
            &self.path(&format!("accounts/{account_id}/transactions")),
            since_date,
        )
    }

    /// Creates or updates.
    ///
    /// A single transaction is updated in place when it has an id and created
    /// otherwise. A batch goes through [`save_many`](Self::save_many).
    pub fn save<'a>(&self, input: impl Into<SaveInput<'a>>) -> Result<TransactionSet> {
        match input.into() {
            SaveInput::One(transaction) if transaction.has_id() => self.update_one(transaction),
            SaveInput::One(transaction) => self.create_one(transaction),
            SaveInput::Many(transactions) => self.save_many(transactions).map(TransactionSet::Many),
        }
    }

    /// Splits the batch by whether the server already knows each transaction,
    /// then issues one batched update and one batched create. Results come
    /// back updates first.
    pub fn save_many(&self, transactions: &[Transaction]) -> Result<Vec<Transaction>> {
        let (updates, creates): (Vec<Transaction>, Vec<Transaction>) =
            transactions.iter().cloned().partition(Transaction::has_id);

        let mut saved = Vec::with_capacity(transactions.len());
        if !updates.is_empty() {
            saved.extend(self.update(&updates)?);
        }
        if !creates.is_empty() {
            saved.extend(self.create(&creates)?);
        }
        Ok(saved)
    }

    /// Batched update of transactions that already carry an id.
    pub fn update(&self, transactions: &[Transaction]) -> Result<Vec<Transaction>> {
        let body = json!({ "transactions": Self::payloads(transactions) });
        Ok(self
            .write(Method::Patch, &self.path("transactions"), body)?
            .into_vec())
    }

    pub fn update_one(&self, transaction: &Transaction) -> Result<TransactionSet> {
        let id = transaction
            .id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or(Error::MissingId("transaction"))?;
        let body = json!({ "transaction": transaction.save_payload() });
        self.write(Method::Put, &self.path(&format!("transactions/{id}")), body)
    }

    /// Batched create.
    pub fn create(&self, transactions: &[Transaction]) -> Result<Vec<Transaction>> {
        let body = json!({ "transactions": Self::payloads(transactions) });
        Ok(self
            .write(Method::Post, &self.path("transactions"), body)?
            .into_vec())
    }

    pub fn create_one(&self, transaction: &Transaction) -> Result<TransactionSet> {
        let body = json!({ "transaction": transaction.save_payload() });
        self.write(Method::Post, &self.path("transactions"), body)
    }

    /// Asks the service to import pending transactions from linked accounts.
    ///
    /// The response is an import summary, not a transaction list, so it is
    /// returned as decoded.
    pub fn import_all(&self) -> Result<Value> {
        self.rest
            .send(Method::Post, &self.path("transactions/import"), json!({}))
    }
}

impl AccountTransactions for TransactionsApi {
    fn for_account(
        &self,
        account_id: &str,
        since_date: Option<NaiveDate>,
    ) -> Result<Vec<Transaction>> {
        self.get_by_account(account_id, since_date)
    }
}
