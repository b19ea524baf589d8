//! Records exchanged with the budgeting API.
//!
//! Each record declares the attributes it understands as typed fields and
//! keeps every other key of the payload, verbatim, in `meta`. Decoding never
//! drops data the client does not know about, so a record can be inspected
//! for fields added to the API after this crate was written.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

pub use account::{Account, AccountTransactions};
pub use category::Category;
pub use transaction::{
    PayeeRef, SaveSubtransaction, SaveTransaction, Subtransaction, Transaction, TransactionSet,
};

mod account;
mod category;
mod transaction;

/// Payload keys that are not declared attributes of a record.
pub type Meta = Map<String, Value>;

fn decode<T: DeserializeOwned>(raw: Value) -> crate::Result<T> {
    Ok(serde_json::from_value(raw)?)
}

fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}
