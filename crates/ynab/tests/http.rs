//! The default `reqwest` transport against a local mock server.
//!
//! The client is blocking, so each call runs on `spawn_blocking` while the
//! mock server keeps the async runtime.

use chrono::NaiveDate;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use ynab::{BudgetClient, Error, Transaction};

/// Helper: run `f` against a client pointing at the mock server.
async fn with_client<T, F>(server: &MockServer, f: F) -> ynab::Result<T>
where
    T: Send + 'static,
    F: FnOnce(BudgetClient) -> ynab::Result<T> + Send + 'static,
{
    let host = server.uri();
    tokio::task::spawn_blocking(move || {
        let client = BudgetClient::builder()
            .host(&host)
            .budget_id("b1")
            .token("TEST_TOKEN")
            .build()?;
        f(client)
    })
    .await
    .unwrap()
}

#[tokio::test]
async fn get_sends_bearer_token_and_since_date() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/budgets/b1/transactions"))
        .and(query_param("since_date", "2024-01-01"))
        .and(header("authorization", "Bearer TEST_TOKEN"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "transactions": [{"id": "tx-1", "amount": -1000, "cleared": "cleared"}],
                "server_knowledge": 1
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let transactions = with_client(&server, |client| {
        client
            .transactions
            .get_all(NaiveDate::from_ymd_opt(2024, 1, 1))
    })
    .await
    .unwrap();

    assert_eq!(transactions.len(), 1);
    assert_eq!(transactions[0].cleared.as_deref(), Some("cleared"));
}

#[tokio::test]
async fn batch_update_is_a_json_patch() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/v1/budgets/b1/transactions"))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(json!({
            "transactions": [{"id": "tx-1", "amount": -2500, "category_id": null}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"transactions": [{"id": "tx-1", "amount": -2500}]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let saved = with_client(&server, |client| {
        let split = Transaction::from_value(json!({
            "id": "tx-1",
            "amount": 0,
            "category_id": "cat-1",
            "subtransactions": [{"amount": -2000}, {"amount": -500}]
        }))?;
        client.transactions.save_many(&[split])
    })
    .await
    .unwrap();

    assert_eq!(saved[0].amount, Some(-2500));
}

#[tokio::test]
async fn error_body_is_preserved() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/budgets/b1/accounts"))
        .respond_with(ResponseTemplate::new(404).set_body_string(
            r#"{"error":{"id":"404.2","name":"resource_not_found","detail":"Resource not found"}}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let err = with_client(&server, |client| client.accounts.get_all())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Http { .. }));
    assert_eq!(err.status().map(|s| s.as_u16()), Some(404));
    assert!(err.to_string().contains("resource_not_found"));
}
