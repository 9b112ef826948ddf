//! In-memory backend used by the flow tests.

use std::cell::{Cell, RefCell};

use crate::api::ExpenseApi;
use crate::error::ApiError;
use crate::expense::{Expense, ExpenseId, ExpensePayload};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    List,
    Create(ExpensePayload),
    Update(ExpenseId, ExpensePayload),
    Delete(ExpenseId),
}

/// Records every call and answers from `stored`, or fails every call when
/// built with [MockApi::failing].
#[derive(Default)]
pub struct MockApi {
    pub stored: RefCell<Vec<Expense>>,
    calls: RefCell<Vec<Call>>,
    fail: Cell<bool>,
    next_id: Cell<u64>,
}

impl MockApi {
    pub fn with(stored: Vec<Expense>) -> Self {
        Self {
            stored: RefCell::new(stored),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        let api = Self::default();
        api.fail.set(true);
        api
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.set(fail);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call);
        if self.fail.get() {
            Err(ApiError::Status(500))
        } else {
            Ok(())
        }
    }

    fn expense_from(id: ExpenseId, payload: &ExpensePayload) -> Expense {
        Expense {
            id: Some(id),
            serial_no: None,
            title: payload.title.clone(),
            amount: payload.amount,
            category: Some(payload.category.clone()),
            date: Some(payload.date.clone()),
        }
    }
}

impl ExpenseApi for MockApi {
    async fn list(&self) -> Result<Vec<Expense>, ApiError> {
        self.record(Call::List)?;
        Ok(self.stored.borrow().clone())
    }

    async fn create(&self, payload: &ExpensePayload) -> Result<Expense, ApiError> {
        self.record(Call::Create(payload.clone()))?;
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let expense = Self::expense_from(ExpenseId::new(format!("mock-{id}")), payload);
        self.stored.borrow_mut().push(expense.clone());
        Ok(expense)
    }

    async fn update(&self, id: &ExpenseId, payload: &ExpensePayload) -> Result<Expense, ApiError> {
        self.record(Call::Update(id.clone(), payload.clone()))?;
        let expense = Self::expense_from(id.clone(), payload);
        let mut stored = self.stored.borrow_mut();
        match stored.iter_mut().find(|e| e.id.as_ref() == Some(id)) {
            Some(existing) => *existing = expense.clone(),
            None => return Err(ApiError::Status(404)),
        }
        Ok(expense)
    }

    async fn delete(&self, id: &ExpenseId) -> Result<(), ApiError> {
        self.record(Call::Delete(id.clone()))?;
        self.stored.borrow_mut().retain(|e| e.id.as_ref() != Some(id));
        Ok(())
    }
}
