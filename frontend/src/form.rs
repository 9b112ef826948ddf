//! Form state for creating and updating expenses.
//!
//! The form is in Edit mode exactly when it was opened on a record that has
//! an identifier, and in Create mode otherwise. Submitting validates the four
//! fields and turns them into one create or one update call.

use crate::api::ExpenseApi;
use crate::error::{Field, FormError};
use crate::expense::{parse_amount, Expense, ExpenseId, ExpensePayload};
use crate::toast::Notify;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(ExpenseId),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpenseForm {
    pub title: String,
    pub amount: String,
    pub category: String,
    pub date: String,
    target: Option<ExpenseId>,
}

/// What a valid form turns into.
#[derive(Clone, Debug, PartialEq)]
pub enum Submission {
    Create(ExpensePayload),
    Update(ExpenseId, ExpensePayload),
}

impl ExpenseForm {
    /// Fields for the given edit target, or an empty form when there is none.
    pub fn for_target(target: Option<&Expense>) -> Self {
        let Some(expense) = target else {
            return Self::default();
        };
        Self {
            title: expense.title.clone(),
            amount: amount_text(expense.amount),
            category: expense.category.clone().unwrap_or_default(),
            date: expense.date_prefix().unwrap_or_default().to_string(),
            target: expense.id.clone(),
        }
    }

    pub fn mode(&self) -> FormMode {
        match &self.target {
            Some(id) => FormMode::Edit(id.clone()),
            None => FormMode::Create,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Title => self.title = value,
            Field::Amount => self.amount = value,
            Field::Category => self.category = value,
            Field::Date => self.date = value,
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Amount => &self.amount,
            Field::Category => &self.category,
            Field::Date => &self.date,
        }
    }

    /// # Errors
    /// Returns [FormError::MissingField] for the first empty field.
    pub fn submission(&self) -> Result<Submission, FormError> {
        for field in [Field::Title, Field::Amount, Field::Category, Field::Date] {
            if self.value(field).is_empty() {
                return Err(FormError::MissingField(field));
            }
        }

        let payload = ExpensePayload {
            title: self.title.clone(),
            amount: parse_amount(&self.amount),
            category: self.category.clone(),
            date: self.date.clone(),
        };

        Ok(match &self.target {
            Some(id) => Submission::Update(id.clone(), payload),
            None => Submission::Create(payload),
        })
    }
}

/// Heading, submit label and cancel visibility, all keyed on whether a
/// record is selected for editing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormLabels {
    pub heading: &'static str,
    pub submit: &'static str,
    pub can_cancel: bool,
}

impl FormLabels {
    pub fn for_editing(editing: Option<&Expense>) -> Self {
        match editing {
            Some(_) => Self {
                heading: "Edit Expense",
                submit: "Update Expense",
                can_cancel: true,
            },
            None => Self {
                heading: "Add New Expense",
                submit: "Add Expense",
                can_cancel: false,
            },
        }
    }
}

fn amount_text(amount: f64) -> String {
    if amount == 0.0 {
        String::new()
    } else {
        amount.to_string()
    }
}

#[derive(Debug, PartialEq)]
pub enum SubmitOutcome {
    Created(Expense),
    Updated(Expense),
    Rejected(FormError),
    Failed,
}

/// Validates and sends the form. The caller clears the form and refreshes
/// the list on `Created`/`Updated`; on any other outcome the input is left
/// as it was.
pub async fn submit(api: &impl ExpenseApi, notify: &impl Notify, form: &ExpenseForm) -> SubmitOutcome {
    let submission = match form.submission() {
        Ok(submission) => submission,
        Err(err) => {
            let FormError::MissingField(field) = &err;
            tracing::debug!("expense form submitted without a {field}");
            notify.error(&err.to_string());
            return SubmitOutcome::Rejected(err);
        }
    };

    let result = match &submission {
        Submission::Create(payload) => api.create(payload).await.map(SubmitOutcome::Created),
        Submission::Update(id, payload) => api.update(id, payload).await.map(SubmitOutcome::Updated),
    };

    match result {
        Ok(outcome) => {
            let message = match &outcome {
                SubmitOutcome::Updated(_) => "Expense updated!",
                _ => "Expense added!",
            };
            notify.success(message);
            outcome
        }
        Err(err) => {
            tracing::error!("failed to save expense: {err}");
            notify.error("Failed to save expense (check backend).");
            SubmitOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, MockApi};
    use crate::toast::tests::RecordingNotifier;

    fn filled(amount: &str) -> ExpenseForm {
        ExpenseForm {
            title: "Lunch".into(),
            amount: amount.into(),
            category: "Food".into(),
            date: "2024-03-01".into(),
            target: None,
        }
    }

    fn stored(id: Option<&str>) -> Expense {
        Expense {
            id: id.map(ExpenseId::new),
            serial_no: Some(1),
            title: "Rent".into(),
            amount: 900.0,
            category: Some("Housing".into()),
            date: Some("2024-03-01T00:00:00".into()),
        }
    }

    #[test]
    fn empty_target_gives_create_mode_with_blank_fields() {
        let form = ExpenseForm::for_target(None);

        assert_eq!(form.mode(), FormMode::Create);
        assert_eq!(form, ExpenseForm::default());
    }

    #[test]
    fn target_fills_fields_and_truncates_date() {
        let form = ExpenseForm::for_target(Some(&stored(Some("abc"))));

        assert_eq!(form.mode(), FormMode::Edit(ExpenseId::new("abc")));
        assert_eq!(form.title, "Rent");
        assert_eq!(form.amount, "900");
        assert_eq!(form.category, "Housing");
        assert_eq!(form.date, "2024-03-01");
    }

    #[test]
    fn target_without_identifier_stays_in_create_mode() {
        let form = ExpenseForm::for_target(Some(&stored(None)));

        assert_eq!(form.mode(), FormMode::Create);
        assert_eq!(form.title, "Rent");
    }

    #[test]
    fn labels_follow_the_selection_even_without_identifier() {
        let without_id = FormLabels::for_editing(Some(&stored(None)));

        assert_eq!(without_id, FormLabels::for_editing(Some(&stored(Some("abc")))));
        assert_eq!(without_id.heading, "Edit Expense");
        assert_eq!(without_id.submit, "Update Expense");
        assert!(without_id.can_cancel);
    }

    #[test]
    fn labels_without_selection_are_for_adding() {
        let labels = FormLabels::for_editing(None);

        assert_eq!(labels.heading, "Add New Expense");
        assert_eq!(labels.submit, "Add Expense");
        assert!(!labels.can_cancel);
    }

    #[test]
    fn any_empty_field_is_rejected() {
        for field in [Field::Title, Field::Amount, Field::Category, Field::Date] {
            let mut form = filled("12.50");
            form.set(field, String::new());

            assert_eq!(form.submission(), Err(FormError::MissingField(field)));
        }
    }

    #[tokio::test]
    async fn create_sends_numeric_amount_once() {
        let api = MockApi::default();
        let notifier = RecordingNotifier::default();

        let outcome = submit(&api, &notifier, &filled("12.50")).await;

        assert!(matches!(outcome, SubmitOutcome::Created(_)));
        let calls = api.calls();
        assert_eq!(calls.len(), 1);
        let Call::Create(payload) = &calls[0] else {
            panic!("expected a create call, got {calls:?}");
        };
        assert_eq!(payload.amount, 12.5);
        assert_eq!(notifier.successes(), ["Expense added!"]);
    }

    #[tokio::test]
    async fn edit_mode_updates_and_never_creates() {
        let api = MockApi::with(vec![stored(Some("abc"))]);
        let notifier = RecordingNotifier::default();
        let mut form = ExpenseForm::for_target(Some(&stored(Some("abc"))));
        form.set(Field::Amount, "950".into());

        let outcome = submit(&api, &notifier, &form).await;

        assert!(matches!(outcome, SubmitOutcome::Updated(_)));
        let calls = api.calls();
        assert_eq!(calls.len(), 1);
        let Call::Update(id, payload) = &calls[0] else {
            panic!("expected an update call, got {calls:?}");
        };
        assert_eq!(id, &ExpenseId::new("abc"));
        assert_eq!(payload.amount, 950.0);
        assert_eq!(notifier.successes(), ["Expense updated!"]);
    }

    #[tokio::test]
    async fn invalid_form_makes_no_calls() {
        let api = MockApi::default();
        let notifier = RecordingNotifier::default();
        let mut form = filled("5");
        form.set(Field::Category, String::new());

        let outcome = submit(&api, &notifier, &form).await;

        assert_eq!(outcome, SubmitOutcome::Rejected(FormError::MissingField(Field::Category)));
        assert!(api.calls().is_empty());
        assert_eq!(notifier.errors(), ["Please fill all fields."]);
    }

    #[tokio::test]
    async fn backend_failure_reports_and_keeps_input() {
        let api = MockApi::failing();
        let notifier = RecordingNotifier::default();
        let form = filled("7");

        let outcome = submit(&api, &notifier, &form).await;

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(form, filled("7"));
        assert_eq!(notifier.errors(), ["Failed to save expense (check backend)."]);
    }
}
