use leptos::use_context;

/// Minimum review length after trimming. The backend rejects anything
/// shorter than 10 characters, so a stricter client minimum would only
/// reject input the service itself accepts.
pub const MIN_REVIEW_LEN: usize = 10;

/// Per-request deadline. A request that has not completed by then is
/// surfaced as a retryable failure instead of leaving the UI stuck.
pub const REQUEST_TIMEOUT_MS: u32 = 30_000;

/// Origin of the Analysis Service during development.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Where the Analysis Service lives. Provided to the component tree via
/// context; tests inject a same-origin base against a mocked fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Reads the config from Leptos context, falling back to the default
    /// development origin when none was provided.
    pub fn from_context() -> Self {
        use_context::<ApiConfig>().unwrap_or_default()
    }
}
