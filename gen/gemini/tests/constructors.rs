//! Tests for Gemini adapter constructors.

use easel_gemini::{Gemini, endpoint};

#[test]
fn api_constructor_uses_default_endpoint() {
    let client = ecore::Client::new();
    let adapter = Gemini::api(client, "test-key");
    assert_eq!(adapter.transport().base(), endpoint::GEMINI);
}

#[test]
fn custom_constructor_sets_base() {
    let client = ecore::Client::new();
    let custom = "http://localhost:9999/v1beta";
    let adapter = Gemini::custom(client, "test-key", custom);
    assert_eq!(adapter.transport().base(), custom);
}

#[test]
fn key_travels_in_the_query_not_the_headers() {
    let client = ecore::Client::new();
    let adapter = Gemini::api(client, "secret");
    assert!(adapter.transport().headers().get("authorization").is_none());
}
