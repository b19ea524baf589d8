#![allow(dead_code)]

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use serde_json::Value;
use ynab::{ApiRequest, ApiResponse, BudgetClient, StatusCode, Transport};

pub const BUDGET: &str = "budget-1";
pub const TOKEN: &str = "pat-token";

/// Replays queued responses and records every request it receives.
#[derive(Default)]
pub struct FakeTransport {
    requests: Mutex<Vec<ApiRequest>>,
    responses: Mutex<VecDeque<ApiResponse>>,
}

impl FakeTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, status: u16, body: Value) {
        self.respond_raw(status, &body.to_string());
    }

    pub fn respond_raw(&self, status: u16, body: &str) {
        self.responses.lock().unwrap().push_back(ApiResponse {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.to_string(),
        });
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for FakeTransport {
    fn execute(&self, request: ApiRequest) -> ynab::Result<ApiResponse> {
        self.requests.lock().unwrap().push(request);
        Ok(self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| ApiResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: "no response queued".to_string(),
            }))
    }
}

pub fn client(transport: &Arc<FakeTransport>) -> BudgetClient {
    BudgetClient::builder()
        .budget_id(BUDGET)
        .token(TOKEN)
        .transport(transport.clone())
        .build()
        .unwrap()
}

pub fn url(suffix: &str) -> String {
    format!("https://api.ynab.com/v1/budgets/{BUDGET}/{suffix}")
}
