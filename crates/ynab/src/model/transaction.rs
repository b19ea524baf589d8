use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Meta, decode, or_dash};
use crate::{Result, money::format_milliunits};

/// A split of a [`Transaction`] across payees or categories. Only exists
/// inside its parent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Subtransaction {
    pub id: Option<String>,
    pub transaction_id: Option<String>,
    /// Milliunits.
    pub amount: Option<i64>,
    pub memo: Option<String>,
    pub payee_id: Option<String>,
    pub payee_name: Option<String>,
    pub category_id: Option<String>,
    pub category_name: Option<String>,
    pub transfer_account_id: Option<String>,
    pub transfer_transaction_id: Option<String>,
    pub deleted: Option<bool>,
    #[serde(flatten)]
    pub meta: Meta,
}

impl Subtransaction {
    pub fn from_value(raw: Value) -> Result<Self> {
        decode(raw)
    }

    /// The split as the write endpoints accept it: no identifiers.
    pub fn save_payload(&self) -> SaveSubtransaction {
        SaveSubtransaction {
            amount: self.amount,
            payee_id: self.payee_id.clone(),
            category_id: self.category_id.clone(),
            memo: self.memo.clone(),
        }
    }
}

impl fmt::Display for Subtransaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            or_dash(self.payee_name.as_deref()),
            format_milliunits(self.amount.unwrap_or_default()),
            or_dash(self.category_name.as_deref())
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Option<String>,
    /// ISO date (`YYYY-MM-DD`), as sent by the server.
    pub date: Option<String>,
    /// Milliunits.
    pub amount: Option<i64>,
    pub memo: Option<String>,
    pub cleared: Option<String>,
    pub approved: Option<bool>,
    pub flag_color: Option<String>,
    pub account_id: Option<String>,
    pub payee_id: Option<String>,
    pub category_id: Option<String>,
    pub transfer_account_id: Option<String>,
    pub transfer_transaction_id: Option<String>,
    pub matched_transaction_id: Option<String>,
    pub import_id: Option<String>,
    pub deleted: Option<bool>,
    pub account_name: Option<String>,
    pub payee_name: Option<String>,
    pub category_name: Option<String>,
    #[serde(default)]
    pub subtransactions: Vec<Subtransaction>,
    #[serde(flatten)]
    pub meta: Meta,
}

impl Transaction {
    pub fn from_value(raw: Value) -> Result<Self> {
        decode(raw)
    }

    pub fn is_split(&self) -> bool {
        !self.subtransactions.is_empty()
    }

    /// Whether the server already knows this transaction. Decides between
    /// update and create on save.
    pub fn has_id(&self) -> bool {
        self.id.as_deref().is_some_and(|id| !id.is_empty())
    }

    /// Builds the body the write endpoints expect.
    ///
    /// A split transaction is written with the sum of its splits as amount and
    /// no category of its own: the splits carry the categories.
    pub fn save_payload(&self) -> SaveTransaction {
        let (amount, category_id) = if self.is_split() {
            let total = self
                .subtransactions
                .iter()
                .map(|s| s.amount.unwrap_or_default())
                .sum::<i64>();
            (Some(total), None)
        } else {
            (self.amount, self.category_id.clone())
        };

        let payee = match self.payee_id.as_deref() {
            Some(id) if !id.is_empty() => PayeeRef::Id(id.to_string()),
            _ => PayeeRef::Name(self.payee_name.clone()),
        };

        SaveTransaction {
            id: self.has_id().then(|| self.id.clone()).flatten(),
            account_id: self.account_id.clone(),
            date: self.date.clone(),
            amount,
            category_id,
            subtransactions: self
                .subtransactions
                .iter()
                .map(Subtransaction::save_payload)
                .collect(),
            memo: self.memo.clone(),
            flag_color: self.flag_color.clone(),
            payee,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            or_dash(self.date.as_deref()),
            or_dash(self.payee_name.as_deref()),
            format_milliunits(self.amount.unwrap_or_default()),
            or_dash(self.category_name.as_deref())
        )?;
        if self.is_split() {
            write!(f, " ({} splits)", self.subtransactions.len())?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveSubtransaction {
    pub amount: Option<i64>,
    pub payee_id: Option<String>,
    pub category_id: Option<String>,
    pub memo: Option<String>,
}

/// How a written transaction names its payee. The server creates or resolves
/// a payee from the name when no id is given.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum PayeeRef {
    #[serde(rename = "payee_id")]
    Id(String),
    #[serde(rename = "payee_name")]
    Name(Option<String>),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SaveTransaction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub account_id: Option<String>,
    pub date: Option<String>,
    pub amount: Option<i64>,
    pub category_id: Option<String>,
    pub subtransactions: Vec<SaveSubtransaction>,
    pub memo: Option<String>,
    pub flag_color: Option<String>,
    #[serde(flatten)]
    pub payee: PayeeRef,
}

/// Transaction responses carry either a list or a single object.
#[derive(Clone, Debug, PartialEq)]
pub enum TransactionSet {
    One(Transaction),
    Many(Vec<Transaction>),
}

impl TransactionSet {
    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(transactions) => transactions.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_vec(self) -> Vec<Transaction> {
        match self {
            Self::One(transaction) => vec![transaction],
            Self::Many(transactions) => transactions,
        }
    }

    /// The first transaction of the set.
    pub fn into_first(self) -> Option<Transaction> {
        self.into_vec().into_iter().next()
    }
}

impl From<TransactionSet> for Vec<Transaction> {
    fn from(set: TransactionSet) -> Self {
        set.into_vec()
    }
}
