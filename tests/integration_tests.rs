//! Integration tests for the wirelabel converter
//!
//! These tests verify end-to-end behavior through the public API: the round-trip and injectivity laws, unknown-label handling, match policies, cache stability, and the shipped Azure chat-completion schemas.

use rstest::*;
use wirelabel::schemas::chat_completions::{
    ChatCompletionResponse, ChatCompletionResponseObject, ContentFilterSeverity, ToolCallType,
};
use wirelabel::{wire_enum, Codec, DecodeError, MatchPolicy, Registry, UnknownLabels, WireEnum};

#[fixture]
#[once]
fn init_tracing() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init()
        .ok();
    true
}

wire_enum! {
    enum FinishReason {
        Stop => "stop",
        Length => "length",
        ContentFilter => "content_filter",
        Unknown => "unknown",
    }
    fallback = Unknown
}

wire_enum! {
    enum Clashing {
        First => "same",
        Second => "same",
    }
}

#[rstest]
fn test_round_trip_law_holds_for_all_registered_enums(init_tracing: &bool) {
    let codec = Codec::builder().registry(Registry::new()).build();

    // decode(encode(m)) == m for every declared member.
    for &(member, _) in ContentFilterSeverity::LABELS {
        let label = codec.encode(member).unwrap();
        assert_eq!(codec.decode::<ContentFilterSeverity>(label).unwrap(), member);
    }
    for &(member, _) in FinishReason::LABELS {
        let label = codec.encode(member).unwrap();
        assert_eq!(codec.decode::<FinishReason>(label).unwrap(), member);
    }
    for &(member, _) in ToolCallType::LABELS {
        let label = codec.encode(member).unwrap();
        assert_eq!(codec.decode::<ToolCallType>(label).unwrap(), member);
    }
}

#[rstest]
fn test_encode_is_injective_across_members(init_tracing: &bool) {
    let codec = Codec::builder().registry(Registry::new()).build();

    let labels: Vec<_> = ContentFilterSeverity::LABELS
        .iter()
        .map(|&(member, _)| codec.encode(member).unwrap())
        .collect();

    for (i, a) in labels.iter().enumerate() {
        for b in &labels[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[rstest]
fn test_ambiguous_label_table_fails_the_startup_check(init_tracing: &bool) {
    let registry = Registry::new();

    let err = registry.check::<Clashing>().unwrap_err();
    assert_eq!(
        err.to_string(),
        format!(
            "{} declares the wire label \"same\" for more than one member",
            std::any::type_name::<Clashing>()
        )
    );
}

#[rstest]
#[case(ContentFilterSeverity::Safe, "safe")]
#[case(ContentFilterSeverity::Low, "low")]
#[case(ContentFilterSeverity::Medium, "medium")]
#[case(ContentFilterSeverity::High, "high")]
fn test_content_filter_severity_wire_tokens(
    init_tracing: &bool,
    #[case] member: ContentFilterSeverity,
    #[case] label: &str,
) {
    let codec = Codec::default();

    assert_eq!(codec.encode(member).unwrap(), label);
    assert_eq!(codec.decode::<ContentFilterSeverity>(label).unwrap(), member);
}

#[rstest]
fn test_unknown_label_surfaces_as_decode_error(init_tracing: &bool) {
    let codec = Codec::default();

    let err = codec
        .decode::<ContentFilterSeverity>("totally-unrecognized-token")
        .unwrap_err();

    // The failure is the dedicated decode variant, not some internal error.
    assert!(matches!(err, DecodeError::UnknownLabel { .. }));
}

#[rstest]
fn test_decode_is_case_sensitive_by_default(init_tracing: &bool) {
    let codec = Codec::default();

    assert!(codec.decode::<ContentFilterSeverity>("HIGH").is_err());
    // ToolCallType declares only "function"; "Function" is the wrong case.
    assert!(codec.decode::<ToolCallType>("Function").is_err());
    assert_eq!(
        codec.decode::<ToolCallType>("function").unwrap(),
        ToolCallType::Function
    );
}

#[rstest]
fn test_case_insensitive_policy_accepts_either_case(init_tracing: &bool) {
    let codec = Codec::builder()
        .match_policy(MatchPolicy::IgnoreAsciiCase)
        .build();

    assert_eq!(
        codec.decode::<ContentFilterSeverity>("HIGH").unwrap(),
        ContentFilterSeverity::High
    );
    assert_eq!(
        codec.decode::<ContentFilterSeverity>("HIGH").unwrap(),
        codec.decode::<ContentFilterSeverity>("high").unwrap()
    );
}

#[rstest]
fn test_fallback_policy_absorbs_new_provider_tokens(init_tracing: &bool) {
    let codec = Codec::builder()
        .registry(Registry::new())
        .unknown_labels(UnknownLabels::Fallback)
        .build();

    // A token introduced upstream before this side was updated.
    assert_eq!(
        codec.decode::<FinishReason>("model_length").unwrap(),
        FinishReason::Unknown
    );

    // The default policy still rejects it.
    let strict = Codec::builder().registry(Registry::new()).build();
    assert!(strict.decode::<FinishReason>("model_length").is_err());
}

#[rstest]
fn test_label_maps_are_stable_across_repeated_lookups(init_tracing: &bool) {
    let registry = Registry::new();

    let first = registry.label_map::<ContentFilterSeverity>().unwrap();
    let second = registry.label_map::<ContentFilterSeverity>().unwrap();

    assert!(std::sync::Arc::ptr_eq(&first, &second));
    for &(member, label) in ContentFilterSeverity::LABELS {
        assert_eq!(first.label(member), second.label(member));
        assert_eq!(first.member(label), second.member(label));
    }
}

#[rstest]
fn test_schema_preload_validates_every_enum(init_tracing: &bool) {
    let registry = Registry::new();
    wirelabel::schemas::preload(&registry).unwrap();
}

#[rstest]
fn test_azure_response_round_trips_through_serde(init_tracing: &bool) {
    let json = serde_json::json!({
        "id": "chatcmpl-8xyz",
        "object": "chat.completion",
        "created": 1720000000u64,
        "model": "gpt-4o",
        "prompt_filter_results": [
            {
                "prompt_index": 0,
                "content_filter_results": {
                    "hate": {"filtered": false, "severity": "safe"},
                    "jailbreak": {"filtered": false, "detected": false}
                }
            }
        ],
        "choices": [
            {
                "index": 0,
                "finish_reason": "tool_calls",
                "message": {
                    "role": "assistant",
                    "tool_calls": [
                        {
                            "id": "call_1",
                            "type": "function",
                            "function": {"name": "lookup", "arguments": "{}"}
                        }
                    ]
                },
                "content_filter_results": {
                    "sexual": {"filtered": false, "severity": "safe"},
                    "violence": {"filtered": true, "severity": "high"}
                }
            }
        ],
        "usage": {"prompt_tokens": 20, "completion_tokens": 10, "total_tokens": 30}
    });

    let response: ChatCompletionResponse = serde_json::from_value(json.clone()).unwrap();
    assert_eq!(response.object, ChatCompletionResponseObject::ChatCompletion);

    let filters = response.choices[0].content_filter_results.as_ref().unwrap();
    assert_eq!(
        filters.violence.as_ref().unwrap().severity,
        ContentFilterSeverity::High
    );

    // Re-serializing produces the same wire tokens the payload came with.
    let back = serde_json::to_value(&response).unwrap();
    assert_eq!(back, json);
}

#[rstest]
fn test_unrecognized_severity_rejects_the_field_not_the_process(init_tracing: &bool) {
    let json = r#"{
        "id": "chatcmpl-8xyz",
        "object": "chat.completion",
        "created": 1720000000,
        "model": "gpt-4o",
        "choices": [
            {
                "content_filter_results": {
                    "violence": {"filtered": false, "severity": "extreme"}
                }
            }
        ]
    }"#;

    let result: Result<ChatCompletionResponse, _> = serde_json::from_str(json);
    let err = result.unwrap_err().to_string();
    assert!(err.contains("unrecognized wire label"), "got: {err}");
    assert!(err.contains("extreme"), "got: {err}");
}

#[rstest]
fn test_concurrent_first_use_yields_one_published_map(init_tracing: &bool) {
    let registry = Registry::new();

    let maps: Vec<_> = std::thread::scope(|scope| {
        (0..16)
            .map(|_| {
                let registry = &registry;
                scope.spawn(move || registry.label_map::<ContentFilterSeverity>().unwrap())
            })
            .collect::<Vec<_>>()
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    for map in &maps[1..] {
        assert!(std::sync::Arc::ptr_eq(&maps[0], map));
    }
}
