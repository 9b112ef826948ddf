use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::CURRENCY_SYMBOL;
use crate::expense::Expense;
use crate::format::format_currency;
use crate::ledger::{fetch, Ledger, LedgerAction};
use crate::summary::Summary;
use crate::toast::Notifier;

use super::expense_form::ExpenseForm;
use super::expense_item::ExpenseItem;
use super::icons::{icon_credit_card, icon_wallet};
use super::use_api;

fn summary_cards(summary: &Summary) -> Html {
    html! {
        <div class="grid grid-cols-1 md:grid-cols-12 gap-6 items-stretch">
            <div class="md:col-span-5 bg-white p-5 rounded-[10px] shadow-sm border border-white/50 flex flex-col justify-center">
                <div class="flex items-center gap-2 mb-1">
                    <div class="p-1.5 bg-[#f1f5f9] rounded-lg">{ icon_wallet() }</div>
                    <span class="text-muted-foreground text-[10px] font-bold tracking-widest">{"Total Expenses"}</span>
                </div>
                <h3 class="text-2xl font-bold text-[#1D617A] tracking-tight">{ format_currency(summary.total, CURRENCY_SYMBOL) }</h3>
            </div>
            <div class="md:col-span-7 bg-white p-5 rounded-[10px] shadow-sm border border-white/50">
                <div class="flex items-center gap-2 mb-3">
                    <div class="p-1.5 bg-[#f1f5f9] rounded-lg">{ icon_credit_card() }</div>
                    <span class="text-muted-foreground text-[10px] font-bold tracking-widest">{"Categories"}</span>
                </div>
                {
                    if summary.is_empty() {
                        html! { <p class="text-sm text-muted-foreground">{"No categories yet"}</p> }
                    } else {
                        html! {
                            <ul class="space-y-1">
                                { for summary.by_category.iter().map(|(category, amount)| html! {
                                    <li key={category.clone()} class="flex justify-between text-sm text-[#173E63]">
                                        <span>{ category.clone() }</span>
                                        <span class="font-semibold">{ format_currency(*amount, CURRENCY_SYMBOL) }</span>
                                    </li>
                                }) }
                            </ul>
                        }
                    }
                }
            </div>
        </div>
    }
}

fn row_key(index: usize, expense: &Expense) -> String {
    match &expense.id {
        Some(id) => id.to_string(),
        None => format!("row-{index}"),
    }
}

#[derive(Properties, PartialEq)]
pub struct ExpenseListProps {
    pub notifier: Notifier,
}

#[function_component(ExpenseList)]
pub fn expense_list(props: &ExpenseListProps) -> Html {
    let api = use_api();
    let ledger = use_reducer(Ledger::default);

    let refresh = {
        let api = api.clone();
        let notifier = props.notifier.clone();
        let dispatcher = ledger.dispatcher();
        Callback::from(move |_: ()| {
            let api = api.clone();
            let notifier = notifier.clone();
            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                dispatcher.dispatch(fetch(&api, &notifier).await);
            });
        })
    };

    {
        let refresh = refresh.clone();
        use_effect_with_deps(
            move |_| {
                refresh.emit(());
                || ()
            },
            (),
        );
    }

    let on_saved = {
        let dispatcher = ledger.dispatcher();
        let refresh = refresh.clone();
        Callback::from(move |_: ()| {
            dispatcher.dispatch(LedgerAction::ClearEditing);
            refresh.emit(());
        })
    };

    let on_cancel = {
        let dispatcher = ledger.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(LedgerAction::ClearEditing))
    };

    let on_edit = {
        let dispatcher = ledger.dispatcher();
        Callback::from(move |expense: Expense| dispatcher.dispatch(LedgerAction::Edit(expense)))
    };

    html! {
        <div class="space-y-6">
            { summary_cards(&ledger.summary) }

            <ExpenseForm
                editing={ledger.editing.clone()}
                notifier={props.notifier.clone()}
                {on_saved}
                {on_cancel}
            />

            <div class="space-y-3">
                {
                    if !ledger.settled {
                        html! { <p class="text-center text-muted-foreground py-6">{"Loading..."}</p> }
                    } else if ledger.expenses.is_empty() {
                        html! { <p class="text-center text-muted-foreground py-6">{"No expenses found. Add one above."}</p> }
                    } else {
                        html! {
                            <>
                                { for ledger.expenses.iter().enumerate().map(|(index, expense)| html! {
                                    <ExpenseItem
                                        key={row_key(index, expense)}
                                        expense={expense.clone()}
                                        notifier={props.notifier.clone()}
                                        on_edit={on_edit.clone()}
                                        on_deleted={refresh.clone()}
                                    />
                                }) }
                            </>
                        }
                    }
                }
            </div>
        </div>
    }
}
