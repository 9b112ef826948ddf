use yew::prelude::*;

use crate::api::HttpExpenseApi;
use crate::config::api_base_url;

pub mod app;
mod expense_form;
mod expense_item;
mod expense_list;
mod icons;

/// The backend client provided by [app::App], or one for the configured base
/// URL when rendered outside of it.
#[hook]
fn use_api() -> HttpExpenseApi {
    use_context::<HttpExpenseApi>().unwrap_or_else(|| HttpExpenseApi::new(api_base_url()))
}
