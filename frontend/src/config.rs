pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Amounts are stored as bare numbers and always shown in rupees.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Base URL of the expenses backend, overridable at build time with
/// `EXPENSE_API_URL`.
pub fn api_base_url() -> &'static str {
    option_env!("EXPENSE_API_URL").unwrap_or(DEFAULT_API_BASE_URL)
}
