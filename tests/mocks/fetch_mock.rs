use serde::Deserialize;
use wasm_bindgen::prelude::*;

/// This module replaces `window.fetch` with a recording mock so the
/// browser tests can assert which requests the app issued and script
/// the Analysis Service's responses, without a backend.

/// One request the app issued against the mock.
#[derive(Deserialize, Debug, Clone)]
pub struct RecordedCall {
    pub url: String,
    pub method: String,
    pub body: String,
}

/// Installs the fetch mock and clears any routes and recorded calls
/// from a previous test.
pub fn setup_fetch_mock() -> bool {
    #[wasm_bindgen(inline_js = r#"
    export function setup_fetch_mock() {
        if (!window.__fetchMock) {
            window.__fetchMock = {};
            window.__realFetch = window.fetch.bind(window);
        }
        window.__fetchMock.calls = [];
        window.__fetchMock.routes = [];

        window.fetch = function(input, init) {
            const url = (typeof input === 'string') ? input : input.url;
            const method = (init && init.method) || (input && input.method) || 'GET';
            const bodyPromise = (typeof input === 'string' || !input.clone)
                ? Promise.resolve((init && init.body) || '')
                : input.clone().text();

            return bodyPromise.then(function(body) {
                window.__fetchMock.calls.push({ url: url, method: method, body: body });

                const route = window.__fetchMock.routes.find(function(r) {
                    return r.method === method && url.indexOf(r.path) !== -1;
                });
                if (!route || route.fail) {
                    return Promise.reject(new TypeError('Failed to fetch'));
                }
                return new Response(route.body, {
                    status: route.status,
                    headers: { 'Content-Type': 'application/json' },
                });
            });
        };
        return true;
    }
    "#)]
    extern "C" {
        fn setup_fetch_mock() -> bool;
    }

    setup_fetch_mock()
}

/// Scripts a JSON response for requests whose URL contains `path`.
pub fn mock_route(method: &str, path: &str, status: u16, body: &str) {
    #[wasm_bindgen(inline_js = r#"
    export function mock_route(method, path, status, body) {
        window.__fetchMock.routes.push({
            method: method, path: path, status: status, body: body, fail: false
        });
    }
    "#)]
    extern "C" {
        fn mock_route(method: &str, path: &str, status: u16, body: &str);
    }

    mock_route(method, path, status, body)
}

/// Makes requests whose URL contains `path` fail at the network level.
pub fn mock_network_failure(method: &str, path: &str) {
    #[wasm_bindgen(inline_js = r#"
    export function mock_network_failure(method, path) {
        window.__fetchMock.routes.push({
            method: method, path: path, status: 0, body: '', fail: true
        });
    }
    "#)]
    extern "C" {
        fn mock_network_failure(method: &str, path: &str);
    }

    mock_network_failure(method, path)
}

fn recorded_calls_json() -> String {
    #[wasm_bindgen(inline_js = r#"
    export function recorded_calls_json() {
        return JSON.stringify(window.__fetchMock ? window.__fetchMock.calls : []);
    }
    "#)]
    extern "C" {
        fn recorded_calls_json() -> String;
    }

    recorded_calls_json()
}

/// Every request recorded since the mock was (re)installed.
pub fn recorded_calls() -> Vec<RecordedCall> {
    serde_json::from_str(&recorded_calls_json()).unwrap_or_default()
}

/// How many recorded requests match the given method and URL fragment.
pub fn call_count(method: &str, path: &str) -> usize {
    recorded_calls()
        .iter()
        .filter(|call| call.method == method && call.url.contains(path))
        .count()
}
