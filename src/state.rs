/// Session state for the review analyzer, owned in one place and updated
/// through [`reduce`] only. Components dispatch [`Action`]s; nothing else
/// mutates the state, so every transition is testable without a DOM.
use crate::config::MIN_REVIEW_LEN;
use crate::error::{ApiError, ValidationError};
use crate::models::review::{AnalyzeRequest, ReviewRecord};

/// The submission state machine: `Idle -> Submitting -> {Success, Failure}`.
/// Either terminal state re-enters `Submitting` on the next submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Success,
    Failure,
}

/// What the user has typed but not yet submitted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReviewDraft {
    pub review_text: String,
    pub product_name: String,
    pub skin_type: String,
}

impl ReviewDraft {
    pub fn clear(&mut self) {
        *self = ReviewDraft::default();
    }

    /// Trims and validates the draft. `Ok` carries the request body to
    /// send; `Err` means no network call may be issued.
    pub fn to_request(&self) -> Result<AnalyzeRequest, ValidationError> {
        let text = self.review_text.trim();
        if text.is_empty() {
            return Err(ValidationError::Empty);
        }
        if text.chars().count() < MIN_REVIEW_LEN {
            return Err(ValidationError::TooShort);
        }

        let optional = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        };

        Ok(AnalyzeRequest {
            review_text: text.to_string(),
            product_name: optional(&self.product_name),
            skin_type: optional(&self.skin_type),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub draft: ReviewDraft,
    pub submit: SubmitState,
    /// The record returned by the most recent successful analyze call.
    pub result: Option<ReviewRecord>,
    /// Newest first. Replaced wholesale by a history load, prepended to
    /// by a successful submission.
    pub history: Vec<ReviewRecord>,
    pub history_loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ReviewTextChanged(String),
    ProductNameChanged(String),
    SkinTypeChanged(String),
    /// Input failed local validation; no request was issued.
    ValidationFailed(ValidationError),
    SubmitStarted,
    SubmitSucceeded(ReviewRecord),
    SubmitFailed(ApiError),
    HistoryLoadStarted,
    HistoryLoaded(Vec<ReviewRecord>),
    HistoryLoadFailed(ApiError),
}

pub fn reduce(state: &mut AppState, action: Action) {
    match action {
        Action::ReviewTextChanged(text) => state.draft.review_text = text,
        Action::ProductNameChanged(name) => state.draft.product_name = name,
        Action::SkinTypeChanged(skin_type) => state.draft.skin_type = skin_type,

        Action::ValidationFailed(err) => {
            state.error = Some(err.to_string());
        }

        Action::SubmitStarted => {
            state.submit = SubmitState::Submitting;
            state.error = None;
            state.result = None;
        }

        Action::SubmitSucceeded(record) => {
            state.submit = SubmitState::Success;
            state.history.insert(0, record.clone());
            state.result = Some(record);
            // Cleared so the next review starts fresh
            state.draft.clear();
        }

        Action::SubmitFailed(err) => {
            state.submit = SubmitState::Failure;
            // Draft and history untouched so the user can retry as-is
            state.error = Some(err.user_message());
        }

        Action::HistoryLoadStarted => {
            state.history_loading = true;
        }

        Action::HistoryLoaded(records) => {
            state.history_loading = false;
            state.history = records;
        }

        Action::HistoryLoadFailed(_) => {
            state.history_loading = false;
            state.history = Vec::new();
            state.error = Some("Failed to load reviews".to_string());
        }
    }
}
