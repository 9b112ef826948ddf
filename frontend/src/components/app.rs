use yew::prelude::*;

use crate::api::HttpExpenseApi;
use crate::config::api_base_url;
use crate::toast::{Notifier, ToastAction, ToastContainer, Toasts};

use super::expense_list::ExpenseList;

#[function_component(Header)]
fn header() -> Html {
    html! {
        <header class="flex items-center gap-3">
            <span class="text-2xl">{"💰"}</span>
            <h1 class="text-2xl font-bold text-[#173E63]">{"Expense Tracker"}</h1>
        </header>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let toasts = use_reducer(Toasts::default);
    let notifier = Notifier::new(toasts.dispatcher());
    let api = HttpExpenseApi::new(api_base_url());

    let on_dismiss = {
        let dispatcher = toasts.dispatcher();
        Callback::from(move |id: u64| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<HttpExpenseApi> context={api}>
            <div class="min-h-screen bg-[#f1f4f9]">
                <div class="max-w-4xl mx-auto p-6 space-y-6">
                    <Header />
                    <main>
                        <ExpenseList {notifier} />
                    </main>
                </div>
                <ToastContainer toasts={toasts.items.clone()} {on_dismiss} />
            </div>
        </ContextProvider<HttpExpenseApi>>
    }
}
