//! Resource clients, one per kind of record.
//!
//! Every successful response is wrapped in a `{"data": {...}}` envelope; the
//! clients unwrap it and decode the records inside.

use chrono::NaiveDate;
use serde::Deserialize;

pub use accounts::AccountsApi;
pub use categories::CategoriesApi;
pub use transactions::{SaveInput, TransactionsApi};

mod accounts;
mod categories;
mod transactions;

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Prefix shared by every endpoint of a budget.
fn budget_uri(budget_id: &str) -> String {
    format!("/budgets/{budget_id}/")
}

fn since_query(since_date: Option<NaiveDate>) -> Vec<(&'static str, String)> {
    since_date
        .map(|date| ("since_date", date.format("%Y-%m-%d").to_string()))
        .into_iter()
        .collect()
}
