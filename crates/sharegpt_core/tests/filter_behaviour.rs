mod common;

use common::{filter_with, init_logging, page, FailOn, PassThrough};
use pretty_assertions::assert_eq;
use serde_json::json;
use sharegpt_core::{
    extract_record, ConversionFailure, Decision, Denylist, Normalizer, RecordFilter, SkipReason,
    StructuralError,
};

#[test]
fn single_message_record_is_too_short() {
    init_logging();
    let filter = filter_with(PassThrough);
    let decision = filter.decide(extract_record(page("one", &["hello"])));
    assert_eq!(decision, Decision::Skip(SkipReason::TooShort { messages: 1 }));

    let empty = filter.decide(extract_record(page("none", &[])));
    assert_eq!(empty, Decision::Skip(SkipReason::TooShort { messages: 0 }));
}

#[test]
fn two_clean_messages_are_kept_and_normalized() {
    init_logging();
    let filter = filter_with(PassThrough);
    let decision = filter.decide(extract_record(page(
        "two",
        &["<div>question</div>", "2 / 2\nanswer Copy3 chars / 1 words"],
    )));
    let Decision::Keep(record) = decision else {
        panic!("expected keep, got {decision:?}");
    };
    assert_eq!(record.id, json!("two"));
    assert_eq!(record.conversations[0].text(), Some("question"));
    assert_eq!(record.conversations[1].text(), Some("answer"));
    assert_eq!(record.conversations[1].fields()["from"], json!("gpt"));
}

#[test]
fn denylisted_term_in_any_case_skips_whole_record() {
    init_logging();
    let filter = filter_with(PassThrough);
    let decision = filter.decide(extract_record(page(
        "deny",
        &["clean question", "As a model trained by OpenAI..."],
    )));
    assert_eq!(
        decision,
        Decision::Skip(SkipReason::Denylisted {
            term: "openai".to_string(),
            turn: 1,
        })
    );

    let shouting = filter.decide(extract_record(page("deny2", &["CHATGPT?", "yes"])));
    assert!(matches!(
        shouting,
        Decision::Skip(SkipReason::Denylisted { turn: 0, .. })
    ));
}

#[test]
fn denylist_looks_at_raw_text_only() {
    init_logging();
    let filter = filter_with(PassThrough);
    // The term only appears once the span tags are stripped.
    let decision = filter.decide(extract_record(page(
        "raw",
        &["<span>Open</span>AI", "fine"],
    )));
    let Decision::Keep(record) = decision else {
        panic!("expected keep, got {decision:?}");
    };
    assert_eq!(record.conversations[0].text(), Some("OpenAI"));
}

#[test]
fn conversion_failure_discards_partially_normalized_record() {
    init_logging();
    let filter = filter_with(FailOn {
        trigger: "<broken",
        failure: ConversionFailure::InternalAssertion,
    });
    let mut seen = Vec::new();
    let decision = filter.decide_with(
        extract_record(page("partial", &["<div>ok</div>", "<broken", "never"])),
        |raw, normalized| seen.push((raw.to_string(), normalized.to_string())),
    );
    assert_eq!(
        decision,
        Decision::Skip(SkipReason::Conversion {
            failure: ConversionFailure::InternalAssertion,
            turn: 1,
        })
    );
    assert_eq!(seen, vec![("<div>ok</div>".to_string(), "ok".to_string())]);
}

#[test]
fn non_string_value_skips_with_type_mismatch() {
    init_logging();
    let filter = filter_with(PassThrough);
    let raw = json!({"pageProps": {"id": 9, "content": {"items": [
        {"from": "human", "value": "q"},
        {"from": "gpt", "value": null}
    ]}}});
    assert_eq!(
        filter.decide(extract_record(raw)),
        Decision::Skip(SkipReason::Conversion {
            failure: ConversionFailure::TypeMismatch,
            turn: 1,
        })
    );
}

#[test]
fn structural_error_becomes_skip() {
    init_logging();
    let filter = filter_with(PassThrough);
    let decision = filter.decide(extract_record(json!({"pageProps": {"content": {}}})));
    assert_eq!(
        decision,
        Decision::Skip(SkipReason::Structural(StructuralError::MissingField(
            "pageProps.id"
        )))
    );
}

#[test]
fn custom_denylist_replaces_defaults() {
    init_logging();
    let filter = RecordFilter::new(
        Normalizer::new(PassThrough).unwrap(),
        Denylist::new(["Bard"]),
    );
    assert!(filter
        .decide(extract_record(page("a", &["chatgpt", "fine"])))
        .is_keep());
    assert!(!filter
        .decide(extract_record(page("b", &["hi", "I am bard"])))
        .is_keep());
}

#[test]
fn passthrough_fields_survive_untouched() {
    init_logging();
    let filter = filter_with(PassThrough);
    let raw = json!({"pageProps": {"id": "p", "content": {"items": [
        {"from": "human", "value": "<p>q</p>", "markdown": false},
        {"from": "gpt", "value": "a", "meta": {"k": [1, 2]}}
    ]}}});
    let Decision::Keep(record) = filter.decide(extract_record(raw)) else {
        panic!("expected keep");
    };
    assert_eq!(
        serde_json::to_value(&record.conversations).unwrap(),
        json!([
            {"from": "human", "value": "<p>q</p>", "markdown": false},
            {"from": "gpt", "value": "a", "meta": {"k": [1, 2]}}
        ])
    );
}
