use leptos::*;
use leptos_dom::ev::SubmitEvent;

use crate::state::{Action, AppState, SubmitState};

/// Skin types offered by the form. The record field stays a free string;
/// this list only constrains what the select can produce.
pub const SKIN_TYPES: [&str; 5] = ["normal", "dry", "oily", "combination", "sensitive"];

#[component]
pub fn ReviewForm(
    state: RwSignal<AppState>,
    #[prop(into)] dispatch: Callback<Action>,
    #[prop(into)] on_submit: Callback<()>,
) -> impl IntoView {
    let submitting = move || state.with(|s| s.submit == SubmitState::Submitting);

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };

    view! {
        <form class="review-form" on:submit=handle_submit>
            <label for="review-text">{ "Enter Product Review" }</label>
            <textarea
                id="review-text"
                placeholder="Type your product review here... (minimum 10 characters)"
                prop:value=move || state.with(|s| s.draft.review_text.clone())
                prop:disabled=submitting
                on:input=move |e| dispatch.call(Action::ReviewTextChanged(event_target_value(&e)))
            />

            <input
                type="text"
                id="product-name"
                placeholder="Product name (optional)"
                prop:value=move || state.with(|s| s.draft.product_name.clone())
                prop:disabled=submitting
                on:input=move |e| dispatch.call(Action::ProductNameChanged(event_target_value(&e)))
            />

            <select
                id="skin-type"
                prop:value=move || state.with(|s| s.draft.skin_type.clone())
                prop:disabled=submitting
                on:change=move |e| dispatch.call(Action::SkinTypeChanged(event_target_value(&e)))
            >
                <option value="">{ "Skin type (optional)" }</option>
                {SKIN_TYPES.iter().map(|skin_type| view! {
                    <option value={*skin_type}>{ *skin_type }</option>
                }).collect::<Vec<_>>()}
            </select>

            {move || state.with(|s| s.error.clone()).map(|message| view! {
                <div class="form-error" role="alert">{ message }</div>
            })}

            <button type="submit" prop:disabled=submitting>
                {move || if submitting() { "Analyzing..." } else { "Analyze Review" }}
            </button>
        </form>
    }
}
