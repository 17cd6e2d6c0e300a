use leptos::*;

use crate::components::sentiment::{presentation, SentimentBadge};
use crate::models::review::ReviewRecord;
use crate::state::AppState;
use crate::utils::format::{format_confidence, format_timestamp};

/// History of analyzed reviews, newest first. Loaded wholesale on mount
/// and prepended to by each successful submission.
#[component]
pub fn ReviewsList(state: RwSignal<AppState>) -> impl IntoView {
    view! {
        <div class="reviews-list">
            <h2>{ "Recent Reviews" }</h2>
            {move || {
                if state.with(|s| s.history_loading) {
                    view! { <p class="loading">{ "Loading reviews..." }</p> }.into_view()
                } else if state.with(|s| s.history.is_empty()) {
                    view! {
                        <p class="empty">{ "No reviews yet. Submit your first review above!" }</p>
                    }
                    .into_view()
                } else {
                    state
                        .with(|s| s.history.clone())
                        .into_iter()
                        .map(|record| view! { <ReviewEntry record=record /> })
                        .collect::<Vec<_>>()
                        .into_view()
                }
            }}
        </div>
    }
}

#[component]
fn ReviewEntry(record: ReviewRecord) -> impl IntoView {
    let style = presentation(record.sentiment);
    let timestamp = record.created_at.as_deref().map(format_timestamp);

    view! {
        <div class={format!("review-entry {}", style.panel_class)}>
            <div class="entry-header">
                <SentimentBadge sentiment=record.sentiment />
                <span class="confidence">{ format_confidence(record.confidence) }</span>
                {timestamp.map(|ts| view! { <span class="entry-date">{ ts }</span> })}
            </div>
            <p class="entry-text">{ record.review_text.clone() }</p>
            {(!record.key_points.is_empty()).then(|| view! {
                <details class="entry-key-points">
                    <summary>{ "View key points" }</summary>
                    <ul>
                        {record.key_points.iter().map(|point| view! {
                            <li>{ point.clone() }</li>
                        }).collect::<Vec<_>>()}
                    </ul>
                </details>
            })}
        </div>
    }
}
