//! Tests for `build_adapter()` and the operation support matrix.

use easel_provider::{Adapter, build_adapter};
use ecore::{GenError, Operation, ProviderId, SpeechParams, TextParams};

fn build(provider: ProviderId) -> Adapter {
    build_adapter(provider, ecore::Client::new(), "test-key", None).expect("adapter")
}

#[test]
fn build_adapter_selects_the_matching_variant() {
    assert!(matches!(build(ProviderId::Gemini), Adapter::Gemini(_)));
    assert!(matches!(build(ProviderId::OpenAI), Adapter::OpenAI(_)));
    assert!(matches!(build(ProviderId::Claude), Adapter::Claude(_)));
    assert!(matches!(
        build(ProviderId::HuggingFace),
        Adapter::HuggingFace(_)
    ));
    assert!(matches!(
        build(ProviderId::ElevenLabs),
        Adapter::ElevenLabs(_)
    ));
    assert!(matches!(build(ProviderId::Clipdrop), Adapter::Clipdrop(_)));
}

#[test]
fn build_adapter_honors_base_override() {
    let adapter = build_adapter(
        ProviderId::OpenAI,
        ecore::Client::new(),
        "k",
        Some("http://localhost:8080"),
    )
    .expect("adapter");
    match adapter {
        Adapter::OpenAI(inner) => assert_eq!(inner.transport().base(), "http://localhost:8080"),
        _ => panic!("expected OpenAI adapter"),
    }
}

#[test]
fn support_matrix_matches_the_vendors() {
    use Operation::*;

    let gemini = build(ProviderId::Gemini);
    assert!(gemini.supports(Text) && gemini.supports(Chat) && gemini.supports(Code));
    assert!(!gemini.supports(Image) && !gemini.supports(Speech));

    let openai = build(ProviderId::OpenAI);
    assert!(openai.supports(Image));
    assert!(!openai.supports(Speech));

    let huggingface = build(ProviderId::HuggingFace);
    assert!(huggingface.supports(Text) && huggingface.supports(Image));
    assert!(!huggingface.supports(Chat));

    let elevenlabs = build(ProviderId::ElevenLabs);
    assert!(elevenlabs.supports(Speech) && elevenlabs.supports(Voices));
    assert!(!elevenlabs.supports(Text));

    let clipdrop = build(ProviderId::Clipdrop);
    assert!(clipdrop.supports(Image));
    assert!(!clipdrop.supports(Code));
}

#[tokio::test]
async fn unsupported_operations_fail_without_dispatching() {
    let clipdrop = build(ProviderId::Clipdrop);
    let err = clipdrop
        .generate_text(&TextParams::new("a story"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        GenError::Unsupported {
            provider: ProviderId::Clipdrop,
            operation: Operation::Text,
        }
    ));

    let gemini = build(ProviderId::Gemini);
    let err = gemini
        .generate_speech(&SpeechParams::new("say this"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        GenError::Unsupported {
            provider: ProviderId::Gemini,
            operation: Operation::Speech,
        }
    ));
}
