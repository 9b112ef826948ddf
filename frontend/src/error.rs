//! Errors raised while talking to the backend or validating the form.
//!
//! None of these are shown to the user verbatim except [FormError]; API
//! failures are logged in full and surfaced as a generic toast.

use std::fmt;

/// A failed call against the expenses resource.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a usable response: connection refused,
    /// CORS rejection, or an unreadable body.
    #[error("request failed: {0}")]
    Transport(#[from] gloo_net::Error),

    /// The backend answered with a non-2xx status.
    #[error("backend responded with status {0}")]
    Status(u16),

    /// The response body did not have the expected shape.
    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The backend answered 2xx but reported a failure in the body.
    #[error("backend reported an error: {0}")]
    Backend(String),

    /// The operation targets a record the backend never gave an identifier.
    #[error("expense has no identifier")]
    MissingId,
}

/// One of the four form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Amount,
    Category,
    Date,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Title => "title",
            Field::Amount => "amount",
            Field::Category => "category",
            Field::Date => "date",
        };
        f.write_str(name)
    }
}

/// Client-side validation failure. Blocks the submission before any request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please fill all fields.")]
    MissingField(Field),
}
