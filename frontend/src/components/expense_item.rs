use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::CURRENCY_SYMBOL;
use crate::expense::Expense;
use crate::format::{format_currency, or_placeholder};
use crate::ledger::delete;
use crate::toast::Notifier;

use super::icons::{icon_pencil, icon_trash};
use super::use_api;

/// Blocking browser prompt. Anything but an explicit OK counts as no.
fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[derive(Properties, PartialEq)]
pub struct ExpenseItemProps {
    pub expense: Expense,
    pub notifier: Notifier,
    pub on_edit: Callback<Expense>,
    pub on_deleted: Callback<()>,
}

#[function_component(ExpenseItem)]
pub fn expense_item(props: &ExpenseItemProps) -> Html {
    let api = use_api();
    let expense = &props.expense;

    let on_edit = {
        let expense = expense.clone();
        let on_edit = props.on_edit.clone();
        Callback::from(move |_: MouseEvent| on_edit.emit(expense.clone()))
    };

    let on_delete = {
        let expense = expense.clone();
        let notifier = props.notifier.clone();
        let on_deleted = props.on_deleted.clone();
        Callback::from(move |_: MouseEvent| {
            let api = api.clone();
            let expense = expense.clone();
            let notifier = notifier.clone();
            let on_deleted = on_deleted.clone();
            spawn_local(async move {
                if delete(&api, &notifier, &expense, confirm).await {
                    on_deleted.emit(());
                }
            });
        })
    };

    html! {
        <div class="bg-white p-5 rounded-[10px] shadow-sm border border-white/50">
            <div class="flex items-center justify-between">
                <div class="flex items-center gap-2">
                    {
                        match expense.serial_no {
                            Some(serial_no) => html! { <span class="text-[10px] font-bold text-muted-foreground">{ format!("#{serial_no}") }</span> },
                            None => html! {},
                        }
                    }
                    <span class="font-semibold text-[#173E63]">{ expense.title.clone() }</span>
                </div>
                <span class="font-bold text-[#1D617A]">{ format_currency(expense.amount, CURRENCY_SYMBOL) }</span>
            </div>
            <div class="flex gap-6 mt-2 text-sm text-muted-foreground">
                <div>{"Category: "}<strong>{ or_placeholder(expense.category.as_deref()) }</strong></div>
                <div>{"Date: "}<strong>{ or_placeholder(expense.date_prefix()) }</strong></div>
            </div>
            <div class="flex gap-2 mt-3">
                <button onclick={on_edit} class="flex items-center gap-1 bg-[#B2CBDE] text-[#173E63] px-3 py-1 rounded-[10px] text-[11px] font-bold">
                    { icon_pencil() }{"Edit"}
                </button>
                <button onclick={on_delete} class="flex items-center gap-1 bg-red-500 text-white px-3 py-1 rounded-[10px] text-[11px] font-bold">
                    { icon_trash() }{"Delete"}
                </button>
            </div>
        </div>
    }
}
