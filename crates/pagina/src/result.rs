//! Result and error types for Pagina.

use thiserror::Error;

/// Result type for Pagina operations
pub type PaginaResult<T> = Result<T, PaginaError>;

/// Errors that can occur in Pagina
#[derive(Debug, Error)]
pub enum PaginaError {
    /// No descriptor registered under the name, or the selector matched
    /// zero elements at time of use
    #[error("Element '{element}' not found on page '{page}'")]
    ElementNotFound {
        /// Semantic element name
        element: String,
        /// Page the lookup ran against
        page: String,
    },

    /// Selector matched more than one element when exactly one was expected
    #[error("Selector for '{element}' matched {count} elements, expected exactly 1")]
    AmbiguousElement {
        /// Semantic element name
        element: String,
        /// Number of matches observed
        count: usize,
    },

    /// Interaction or resolution exceeded the allotted wait
    #[error("Timed out after {ms}ms waiting for '{action}' on '{element}'")]
    Timeout {
        /// Semantic element name
        element: String,
        /// Action that was in flight
        action: String,
        /// Timeout in milliseconds
        ms: u64,
    },

    /// Target location unreachable
    #[error("Navigation to {url} failed: {message}")]
    Navigation {
        /// URL that failed
        url: String,
        /// Error message
        message: String,
    },

    /// Observed state did not match expected (from `expect()`)
    #[error("Assertion error: {message}")]
    AssertionError {
        /// Error message
        message: String,
    },

    /// Action input was malformed (e.g. empty credential field)
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Error message
        message: String,
    },

    /// Fixture lookup or setup failed
    #[error("Fixture error: {message}")]
    Fixture {
        /// Error message
        message: String,
    },

    /// Underlying page capability reported an error
    #[error("Page error: {message}")]
    Page {
        /// Error message
        message: String,
    },

    /// JSON error (fixture de/serialization)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
