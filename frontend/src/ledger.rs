//! State behind the expense list: the loaded collection, its summary, and
//! the record currently selected for editing.

use std::rc::Rc;

use yew::Reducible;

use crate::api::ExpenseApi;
use crate::error::ApiError;
use crate::expense::Expense;
use crate::summary::Summary;
use crate::toast::Notify;

pub const DELETE_PROMPT: &str = "Delete this expense?";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ledger {
    pub expenses: Vec<Expense>,
    pub summary: Summary,
    pub editing: Option<Expense>,
    /// False until the first fetch settles, successfully or not.
    pub settled: bool,
}

pub enum LedgerAction {
    /// Replaces the whole collection with a fresh fetch.
    Loaded(Vec<Expense>),
    /// A fetch failed; the collection stays as it was.
    LoadFailed,
    Edit(Expense),
    /// Back to create mode, after a save or an explicit cancel.
    ClearEditing,
}

impl Reducible for Ledger {
    type Action = LedgerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            LedgerAction::Loaded(expenses) => {
                next.summary = Summary::of(&expenses);
                next.expenses = expenses;
                next.settled = true;
            }
            LedgerAction::LoadFailed => {
                if next.settled {
                    return self;
                }
                next.settled = true;
            }
            LedgerAction::Edit(expense) => next.editing = Some(expense),
            LedgerAction::ClearEditing => next.editing = None,
        }
        Rc::new(next)
    }
}

/// Fetches the full collection, reporting a failure to the user.
pub async fn fetch(api: &impl ExpenseApi, notify: &impl Notify) -> LedgerAction {
    match api.list().await {
        Ok(expenses) => LedgerAction::Loaded(expenses),
        Err(err) => {
            tracing::error!("failed to load expenses: {err}");
            notify.error("Failed to load expenses (check backend).");
            LedgerAction::LoadFailed
        }
    }
}

/// Deletes `expense` once `confirm` accepts the prompt. Returns whether the
/// record was deleted; a refused prompt sends nothing.
pub async fn delete(
    api: &impl ExpenseApi,
    notify: &impl Notify,
    expense: &Expense,
    confirm: impl FnOnce(&str) -> bool,
) -> bool {
    if !confirm(DELETE_PROMPT) {
        return false;
    }

    let result = match &expense.id {
        Some(id) => api.delete(id).await,
        None => Err(ApiError::MissingId),
    };

    match result {
        Ok(()) => {
            notify.success("Deleted");
            true
        }
        Err(err) => {
            tracing::error!("failed to delete expense: {err}");
            notify.error("Failed to delete");
            false
        }
    }
}
