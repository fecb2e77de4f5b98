//! Tests for Transport header construction.

use easel_gen::{GenError, ProviderId, Transport};

#[test]
fn bearer_sets_authorization_header() {
    let client = easel_gen::Client::new();
    let transport = Transport::bearer(
        ProviderId::OpenAI,
        client,
        "test-key",
        "http://example.com/v1",
    )
    .expect("bearer transport");

    let auth = transport
        .headers()
        .get("authorization")
        .expect("authorization header");
    assert_eq!(auth.to_str().unwrap(), "Bearer test-key");
    assert_eq!(transport.base(), "http://example.com/v1");
}

#[test]
fn bearer_sets_content_type_and_accept() {
    let client = easel_gen::Client::new();
    let transport =
        Transport::bearer(ProviderId::OpenAI, client, "k", "http://example.com").expect("transport");

    let ct = transport
        .headers()
        .get("content-type")
        .expect("content-type");
    assert_eq!(ct.to_str().unwrap(), "application/json");
    let accept = transport.headers().get("accept").expect("accept");
    assert_eq!(accept.to_str().unwrap(), "application/json");
}

#[test]
fn custom_header_sets_named_header() {
    let client = easel_gen::Client::new();
    let transport = Transport::custom_header(
        ProviderId::Claude,
        client,
        "x-api-key",
        "sk-123",
        "http://example.com",
    )
    .expect("custom header transport");

    let key = transport.headers().get("x-api-key").expect("x-api-key");
    assert_eq!(key.to_str().unwrap(), "sk-123");
    assert!(transport.headers().get("authorization").is_none());
}

#[test]
fn key_only_omits_json_headers() {
    let client = easel_gen::Client::new();
    let transport = Transport::key_only(
        ProviderId::Clipdrop,
        client,
        "x-api-key",
        "sk-456",
        "http://example.com",
    )
    .expect("key-only transport");

    assert!(transport.headers().get("content-type").is_none());
    assert_eq!(
        transport.headers().get("x-api-key").unwrap().to_str().unwrap(),
        "sk-456"
    );
}

#[test]
fn query_key_keeps_headers_credential_free() {
    let client = easel_gen::Client::new();
    let transport = Transport::query_key(
        ProviderId::Gemini,
        client,
        "key",
        "g-key",
        "http://example.com/v1beta",
    );

    assert!(transport.headers().get("authorization").is_none());
    assert_eq!(transport.base(), "http://example.com/v1beta");
}

#[test]
fn with_static_header_adds_version_header() {
    let client = easel_gen::Client::new();
    let transport = Transport::custom_header(
        ProviderId::Claude,
        client,
        "x-api-key",
        "k",
        "http://example.com",
    )
    .expect("transport")
    .with_static_header("anthropic-version", "2023-06-01");

    let version = transport
        .headers()
        .get("anthropic-version")
        .expect("version header");
    assert_eq!(version.to_str().unwrap(), "2023-06-01");
}

#[test]
fn unusable_secret_is_reported_as_missing_credential() {
    let client = easel_gen::Client::new();
    let result = Transport::bearer(
        ProviderId::OpenAI,
        client,
        "bad\nkey",
        "http://example.com",
    );

    assert!(matches!(
        result,
        Err(GenError::MissingCredential(ProviderId::OpenAI))
    ));
}

#[test]
fn trailing_slash_is_normalized_off_the_base() {
    let client = easel_gen::Client::new();
    let transport = Transport::bearer(
        ProviderId::HuggingFace,
        client,
        "k",
        "http://example.com/models/",
    )
    .expect("transport");
    assert_eq!(transport.base(), "http://example.com/models");
}
