use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::error::Field;
use crate::expense::Expense;
use crate::form::{self, FormLabels, SubmitOutcome};
use crate::toast::Notifier;

use super::use_api;

#[derive(Properties, PartialEq)]
pub struct ExpenseFormProps {
    #[prop_or_default]
    pub editing: Option<Expense>,
    pub notifier: Notifier,
    pub on_saved: Callback<()>,
    pub on_cancel: Callback<()>,
}

fn field_input(
    state: &UseStateHandle<form::ExpenseForm>,
    field: Field,
    input_type: &'static str,
    placeholder: &'static str,
) -> Html {
    let oninput = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut next = (*state).clone();
            next.set(field, input.value());
            state.set(next);
        })
    };

    html! {
        <input
            type={input_type}
            {placeholder}
            value={state.value(field).to_string()}
            {oninput}
            class="w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-[12px] text-[#173E63] border-none"
        />
    }
}

#[function_component(ExpenseForm)]
pub fn expense_form(props: &ExpenseFormProps) -> Html {
    let api = use_api();
    let state = use_state(form::ExpenseForm::default);
    let form_error = use_state(|| None::<String>);

    {
        let state = state.clone();
        let form_error = form_error.clone();
        use_effect_with_deps(
            move |editing: &Option<Expense>| {
                state.set(form::ExpenseForm::for_target(editing.as_ref()));
                form_error.set(None);
                || ()
            },
            props.editing.clone(),
        );
    }

    let onsubmit = {
        let state = state.clone();
        let form_error = form_error.clone();
        let notifier = props.notifier.clone();
        let on_saved = props.on_saved.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let current = (*state).clone();
            let api = api.clone();
            let state = state.clone();
            let form_error = form_error.clone();
            let notifier = notifier.clone();
            let on_saved = on_saved.clone();
            spawn_local(async move {
                match form::submit(&api, &notifier, &current).await {
                    SubmitOutcome::Created(_) | SubmitOutcome::Updated(_) => {
                        form_error.set(None);
                        state.set(form::ExpenseForm::default());
                        on_saved.emit(());
                    }
                    SubmitOutcome::Rejected(err) => form_error.set(Some(err.to_string())),
                    SubmitOutcome::Failed => {}
                }
            });
        })
    };

    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    let labels = FormLabels::for_editing(props.editing.as_ref());

    html! {
        <form {onsubmit} class="bg-white p-5 rounded-[10px] shadow-sm border border-white/50">
            <h4 class="text-[#1D617A] font-bold text-[15px] mb-3 tracking-wider">
                { labels.heading }
            </h4>
            <div class="grid grid-cols-2 md:grid-cols-4 gap-3 mb-4">
                { field_input(&state, Field::Title, "text", "Title") }
                { field_input(&state, Field::Amount, "number", "Amount") }
                { field_input(&state, Field::Category, "text", "Category") }
                { field_input(&state, Field::Date, "date", "Date") }
            </div>
            <div class="flex gap-3">
                <button type="submit" class="flex-1 bg-[#173E63] text-white py-2 rounded-[10px] text-[11px] font-bold">{ labels.submit }</button>
                {
                    if labels.can_cancel {
                        html! {
                            <button type="button" onclick={on_cancel} class="flex-1 bg-[#B2CBDE] text-[#173E63] py-2 rounded-[10px] text-[11px] font-bold">{"Cancel"}</button>
                        }
                    } else { html! {} }
                }
            </div>
            {
                if let Some(msg) = &*form_error {
                    html! { <p class="text-sm text-red-500 mt-3">{ msg.clone() }</p> }
                } else { html! {} }
            }
        </form>
    }
}
