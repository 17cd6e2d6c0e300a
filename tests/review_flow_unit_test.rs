#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;
use leptos::*;
use std::time::Duration;
use gloo_timers::future::sleep;
use wasm_bindgen::JsCast;

use review_analyzer::app::ReviewAnalyzerPage;
use review_analyzer::config::ApiConfig;

// Import mock module
mod mocks;
use mocks::fetch_mock::{
    call_count, mock_network_failure, mock_route, recorded_calls, setup_fetch_mock,
};

wasm_bindgen_test_configure!(run_in_browser);

const ANALYZE_RESPONSE: &str = r#"{
    "id": 1,
    "review_text": "Great product, works well!",
    "sentiment": "positive",
    "confidence": 0.92,
    "key_points": ["effective"],
    "created_at": "2024-05-01T12:00:00"
}"#;

// Helper to mount the page against the mocked same-origin fetch
fn mount_page(container_id: &str) -> web_sys::Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document.create_element("div").unwrap();
    container.set_id(container_id);
    document.body().unwrap().append_child(&container).unwrap();

    let html_element = container
        .clone()
        .dyn_into::<web_sys::HtmlElement>()
        .expect("container was not an HtmlElement");
    leptos::mount_to(html_element, || {
        provide_context(ApiConfig::new(""));
        view! { <ReviewAnalyzerPage /> }
    });

    container
}

fn unmount(container: web_sys::Element) {
    let document = web_sys::window().unwrap().document().unwrap();
    document.body().unwrap().remove_child(&container).unwrap();
}

fn query(selector: &str) -> web_sys::Element {
    web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {selector}"))
}

fn body_text() -> String {
    web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .body()
        .unwrap()
        .text_content()
        .unwrap_or_default()
}

fn entry_count() -> u32 {
    web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .query_selector_all(".review-entry")
        .unwrap()
        .length()
}

// Dispatches a bubbling event so Leptos's delegated listeners see it
fn dispatch_bubbling(target: &web_sys::Element, event_type: &str) {
    let init = web_sys::EventInit::new();
    init.set_bubbles(true);
    let event = web_sys::Event::new_with_event_init_dict(event_type, &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

fn type_review(text: &str) {
    let textarea = query("#review-text");
    textarea
        .clone()
        .dyn_into::<web_sys::HtmlTextAreaElement>()
        .unwrap()
        .set_value(text);
    dispatch_bubbling(&textarea, "input");
}

fn click_submit() {
    query("button[type=submit]")
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap()
        .click();
}

#[wasm_bindgen_test]
async fn short_review_is_rejected_without_a_request() {
    assert!(setup_fetch_mock(), "Failed to install fetch mock");
    mock_route("GET", "/api/reviews", 200, "[]");
    mock_route("GET", "/api/health", 200, r#"{"status": "healthy"}"#);

    let container = mount_page("validation-test-container");
    sleep(Duration::from_millis(200)).await;

    type_review("bad");
    click_submit();
    sleep(Duration::from_millis(200)).await;

    assert_eq!(
        call_count("POST", "/api/analyze-review"),
        0,
        "validation failures must not reach the network"
    );
    assert!(body_text().contains("Review must be at least 10 characters"));
    assert!(body_text().contains("No reviews yet"));

    unmount(container);
}

#[wasm_bindgen_test]
async fn empty_review_is_rejected_without_a_request() {
    assert!(setup_fetch_mock(), "Failed to install fetch mock");
    mock_route("GET", "/api/reviews", 200, "[]");
    mock_route("GET", "/api/health", 200, r#"{"status": "healthy"}"#);

    let container = mount_page("empty-test-container");
    sleep(Duration::from_millis(200)).await;

    type_review("   ");
    click_submit();
    sleep(Duration::from_millis(200)).await;

    assert_eq!(call_count("POST", "/api/analyze-review"), 0);
    assert!(body_text().contains("Please enter a review"));

    unmount(container);
}

#[wasm_bindgen_test]
async fn successful_analysis_shows_result_and_grows_history() {
    assert!(setup_fetch_mock(), "Failed to install fetch mock");
    mock_route("GET", "/api/reviews", 200, "[]");
    mock_route("GET", "/api/health", 200, r#"{"status": "healthy"}"#);
    mock_route("POST", "/api/analyze-review", 201, ANALYZE_RESPONSE);

    let container = mount_page("submit-test-container");
    sleep(Duration::from_millis(200)).await;
    assert_eq!(entry_count(), 0);

    // Untrimmed on purpose; the request must carry the trimmed text
    type_review("  Great product, works well!  ");
    click_submit();
    sleep(Duration::from_millis(300)).await;

    assert_eq!(call_count("POST", "/api/analyze-review"), 1);
    let post = recorded_calls()
        .into_iter()
        .find(|call| call.method == "POST")
        .unwrap();
    let body: serde_json::Value = serde_json::from_str(&post.body).unwrap();
    assert_eq!(body["review_text"], "Great product, works well!");
    assert!(body.get("product_name").is_none());

    let text = body_text();
    assert!(text.contains("Analysis Result"));
    assert!(text.contains("POSITIVE"));
    assert!(text.contains("92% confidence"));
    assert!(text.contains("effective"));
    assert!(text.contains("May 1, 2024"));
    assert_eq!(entry_count(), 1, "history must gain the new record");

    // Input is cleared for the next review
    let textarea = query("#review-text")
        .dyn_into::<web_sys::HtmlTextAreaElement>()
        .unwrap();
    assert_eq!(textarea.value(), "");

    unmount(container);
}

#[wasm_bindgen_test]
async fn server_error_message_is_shown_and_draft_survives() {
    assert!(setup_fetch_mock(), "Failed to install fetch mock");
    mock_route("GET", "/api/reviews", 200, "[]");
    mock_route("GET", "/api/health", 200, r#"{"status": "healthy"}"#);
    mock_route(
        "POST",
        "/api/analyze-review",
        500,
        r#"{"error": "Internal server error", "detail": "model unavailable"}"#,
    );

    let container = mount_page("error-test-container");
    sleep(Duration::from_millis(200)).await;

    type_review("This cleanser ruined my week");
    click_submit();
    sleep(Duration::from_millis(300)).await;

    assert!(body_text().contains("Internal server error"));
    assert_eq!(entry_count(), 0, "failed submissions must not touch history");

    // Draft preserved so the user can retry without retyping
    let textarea = query("#review-text")
        .dyn_into::<web_sys::HtmlTextAreaElement>()
        .unwrap();
    assert_eq!(textarea.value(), "This cleanser ruined my week");

    unmount(container);
}

#[wasm_bindgen_test]
async fn history_loads_on_mount_newest_first() {
    assert!(setup_fetch_mock(), "Failed to install fetch mock");
    mock_route(
        "GET",
        "/api/reviews",
        200,
        r#"[
            {"id": 2, "review_text": "newest entry", "sentiment": "negative",
             "confidence": 0.61, "key_points": []},
            {"id": 1, "review_text": "older entry", "sentiment": "positive",
             "confidence": 0.88}
        ]"#,
    );
    mock_route("GET", "/api/health", 200, r#"{"status": "healthy"}"#);

    let container = mount_page("history-test-container");
    sleep(Duration::from_millis(300)).await;

    assert_eq!(call_count("GET", "/api/reviews"), 1);
    assert_eq!(entry_count(), 2);

    // Missing key_points renders as empty rather than failing
    let first_entry = query(".review-entry");
    let first_text = first_entry.text_content().unwrap_or_default();
    assert!(first_text.contains("newest entry"));
    assert!(first_text.contains("61%"));

    unmount(container);
}

#[wasm_bindgen_test]
async fn failed_history_load_leaves_list_empty_with_message() {
    assert!(setup_fetch_mock(), "Failed to install fetch mock");
    mock_network_failure("GET", "/api/reviews");

    let container = mount_page("history-failure-test-container");
    sleep(Duration::from_millis(300)).await;

    assert_eq!(entry_count(), 0);
    let text = body_text();
    assert!(text.contains("Failed to load reviews"));
    assert!(text.contains("No reviews yet"));
    // Unmocked health probe fails too; only the footer line changes
    assert!(text.contains("Service unreachable"));

    unmount(container);
}
