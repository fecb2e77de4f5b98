//! Tests for OpenAI adapter constructors.

use easel_openai::{OpenAI, endpoint};

#[test]
fn api_constructor_uses_default_endpoint() {
    let client = ecore::Client::new();
    let adapter = OpenAI::api(client, "test-key").expect("adapter");
    assert_eq!(adapter.transport().base(), endpoint::OPENAI);
}

#[test]
fn custom_constructor_sets_base() {
    let client = ecore::Client::new();
    let custom = "http://localhost:9999";
    let adapter = OpenAI::custom(client, "test-key", custom).expect("adapter");
    assert_eq!(adapter.transport().base(), custom);
}

#[test]
fn bearer_header_carries_the_key() {
    let client = ecore::Client::new();
    let adapter = OpenAI::api(client, "sk-test").expect("adapter");
    let auth = adapter
        .transport()
        .headers()
        .get("authorization")
        .expect("authorization header");
    assert_eq!(auth.to_str().unwrap(), "Bearer sk-test");
}
