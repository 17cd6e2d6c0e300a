use leptos::*;

use crate::api::ApiClient;
use crate::config::ApiConfig;

/// One-shot probe of `GET /api/health`, shown as a footer status line.
/// A failed probe only changes the line; it never blocks the app.
#[component]
pub fn HealthIndicator() -> impl IntoView {
    let client = ApiClient::new(&ApiConfig::from_context());
    let (status, set_status) = create_signal(None::<Result<String, ()>>);

    create_effect(move |_| {
        let client = client.clone();
        spawn_local(async move {
            let outcome = client.health().await;
            set_status.try_set(Some(outcome.map(|h| h.status).map_err(|_| ())));
        });
    });

    view! {
        <p class="health-indicator">
            {move || match status.get() {
                None => view! { <span class="checking">{ "Checking service..." }</span> },
                Some(Ok(s)) => view! { <span class="healthy">{ format!("Service: {s}") }</span> },
                Some(Err(())) => view! { <span class="unreachable">{ "Service unreachable" }</span> },
            }}
        </p>
    }
}
