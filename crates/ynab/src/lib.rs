//! Typed client for the YNAB budgeting REST API.
//!
//! The client is synchronous: every method performs exactly one blocking
//! request (two for a mixed [`TransactionsApi::save_many`]) and returns the
//! decoded records. Nothing is cached between calls.

pub use api::{AccountsApi, CategoriesApi, SaveInput, TransactionsApi};
pub use client::{API_VERSION, BASE_URL, BudgetClient, BudgetClientBuilder};
pub use error::{Error, Result};
pub use model::{
    Account, AccountTransactions, Category, Meta, PayeeRef, SaveSubtransaction, SaveTransaction,
    Subtransaction, Transaction, TransactionSet,
};
pub use reqwest::StatusCode;
pub use transport::{ApiRequest, ApiResponse, Method, ReqwestTransport, Transport};

pub mod api;
mod client;
mod error;
pub mod model;
pub mod money;
pub mod rest;
pub mod transport;
