use gloo_net::http::{Request, Response};
use serde_json::Value;

use crate::error::ApiError;
use crate::expense::{expenses_from_json, Expense, ExpenseId, ExpensePayload};

const EXPENSES_PATH: &str = "/expenses";

/// The four calls the app makes against the expenses resource.
///
/// Components talk to [HttpExpenseApi]; the flows in `form` and `ledger` are
/// generic over this trait so they can run against an in-memory backend.
#[allow(async_fn_in_trait)]
pub trait ExpenseApi {
    async fn list(&self) -> Result<Vec<Expense>, ApiError>;
    async fn create(&self, payload: &ExpensePayload) -> Result<Expense, ApiError>;
    async fn update(&self, id: &ExpenseId, payload: &ExpensePayload) -> Result<Expense, ApiError>;
    async fn delete(&self, id: &ExpenseId) -> Result<(), ApiError>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpExpenseApi {
    base_url: String,
}

impl HttpExpenseApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, EXPENSES_PATH)
    }

    fn record_url(&self, id: &ExpenseId) -> String {
        format!("{}{}/{}", self.base_url, EXPENSES_PATH, id)
    }
}

fn checked(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Status(response.status()))
    }
}

/// The backend answers some failures with a 2xx and an `{"error": ...}` body.
fn reported_error(body: &Value) -> Result<(), ApiError> {
    match body.get("error") {
        Some(Value::String(message)) => Err(ApiError::Backend(message.clone())),
        Some(other) if !other.is_null() => Err(ApiError::Backend(other.to_string())),
        _ => Ok(()),
    }
}

/// Delete has no required body; when there is a JSON one, it may still carry
/// an error.
fn delete_reply(text: &str) -> Result<(), ApiError> {
    if text.trim().is_empty() {
        return Ok(());
    }
    match serde_json::from_str::<Value>(text) {
        Ok(body) => reported_error(&body),
        Err(_) => Ok(()),
    }
}

async fn expense_from(response: Response) -> Result<Expense, ApiError> {
    let body = checked(response)?.json::<Value>().await?;
    reported_error(&body)?;
    Expense::from_json(&body)
}

impl ExpenseApi for HttpExpenseApi {
    async fn list(&self) -> Result<Vec<Expense>, ApiError> {
        let url = self.collection_url();
        tracing::debug!("GET {url}");
        let response = checked(Request::get(&url).send().await?)?;
        let body = response.json::<Value>().await?;
        Ok(expenses_from_json(body))
    }

    async fn create(&self, payload: &ExpensePayload) -> Result<Expense, ApiError> {
        let url = self.collection_url();
        tracing::debug!("POST {url}");
        let response = Request::post(&url).json(payload)?.send().await?;
        expense_from(response).await
    }

    async fn update(&self, id: &ExpenseId, payload: &ExpensePayload) -> Result<Expense, ApiError> {
        let url = self.record_url(id);
        tracing::debug!("PUT {url}");
        let response = Request::put(&url).json(payload)?.send().await?;
        expense_from(response).await
    }

    async fn delete(&self, id: &ExpenseId) -> Result<(), ApiError> {
        let url = self.record_url(id);
        tracing::debug!("DELETE {url}");
        let text = checked(Request::delete(&url).send().await?)?.text().await?;
        delete_reply(&text)
    }
}
