mod api;
mod components;
mod config;
mod error;
mod expense;
mod form;
mod format;
mod ledger;
mod summary;
mod toast;

#[cfg(test)]
mod testing;

use components::app::App;

fn main() {
    tracing_wasm::set_as_global_default();
    tracing::info!("expense tracker talking to {}", config::api_base_url());
    yew::Renderer::<App>::new().render();
}
