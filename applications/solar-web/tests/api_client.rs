#![cfg(target_arch = "wasm32")]

use solar_web::{ApiClient, ApiError, SnapshotSource};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn missing_document_is_http_error() {
    let client = ApiClient::new("data/does-not-exist.json");

    let result = client.fetch_snapshot().await;

    assert!(
        matches!(result, Err(ApiError::Http { status: 404, .. })),
        "unexpected result: {:?}",
        result
    );
}

#[wasm_bindgen_test]
async fn html_document_is_deserialization_error() {
    // The test runner serves its HTML harness page at the root
    let client = ApiClient::new("/");

    let result = client.fetch_snapshot().await;

    assert!(
        matches!(result, Err(ApiError::Deserialization(_))),
        "unexpected result: {:?}",
        result
    );
}
