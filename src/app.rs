/// Application root. Owns the session state, provides the API config,
/// and wires the submit and history-load side effects around the pure
/// reducer in `state`.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::api::ApiClient;
use crate::components::analysis_result::AnalysisResult;
use crate::components::health_indicator::HealthIndicator;
use crate::components::review_form::ReviewForm;
use crate::components::reviews_list::ReviewsList;
use crate::config::ApiConfig;
use crate::state::{reduce, Action, AppState};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    if use_context::<ApiConfig>().is_none() {
        provide_context(ApiConfig::default());
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/review-analyzer.css"/>
        <Title text="Product Review Analyzer"/>
        <Router>
            <main>
                <Routes>
                    <Route path="" view=ReviewAnalyzerPage/>
                </Routes>
            </main>
        </Router>
    }
}

/// The single page: form, current result, history.
#[component]
pub fn ReviewAnalyzerPage() -> impl IntoView {
    let client = ApiClient::new(&ApiConfig::from_context());
    let state = create_rw_signal(AppState::default());

    // Single mutation path. `try_update` so a response landing after the
    // page is gone is dropped instead of panicking.
    let dispatch = move |action: Action| {
        state.try_update(|s| reduce(s, action));
    };

    // Wholesale history load on client mount; not retried, not refreshed.
    {
        let client = client.clone();
        create_effect(move |_| {
            let client = client.clone();
            dispatch(Action::HistoryLoadStarted);
            spawn_local(async move {
                match client.fetch_reviews().await {
                    Ok(records) => dispatch(Action::HistoryLoaded(records)),
                    Err(err) => dispatch(Action::HistoryLoadFailed(err)),
                }
            });
        });
    }

    let on_submit = move |_: ()| {
        let request = match state.with_untracked(|s| s.draft.to_request()) {
            Ok(request) => request,
            Err(err) => {
                dispatch(Action::ValidationFailed(err));
                return;
            }
        };

        dispatch(Action::SubmitStarted);
        let client = client.clone();
        spawn_local(async move {
            match client.analyze_review(&request).await {
                Ok(record) => dispatch(Action::SubmitSucceeded(record)),
                Err(err) => dispatch(Action::SubmitFailed(err)),
            }
        });
    };

    view! {
        <div class="review-analyzer">
            <header>
                <h1>{ "Product Review Analyzer" }</h1>
                <p>{ "AI-powered sentiment analysis and key points extraction" }</p>
            </header>

            <ReviewForm state=state dispatch=dispatch on_submit=on_submit />

            {move || state.with(|s| s.result.clone()).map(|record| view! {
                <AnalysisResult record=record />
            })}

            <ReviewsList state=state />

            <footer>
                <HealthIndicator />
            </footer>
        </div>
    }
}
