// tests/integration_tests/pipeline_test.rs
use super::common::{Broken, Truncating, article};
use synopsis::{
    GenerationSettings, ModelChoice, ModelError, Sample, SessionCounters, SummarizeError,
    summarize,
};

#[test]
fn test_summaries_accumulate_in_counters() {
    let service = Truncating::new(10);
    let mut counters = SessionCounters::new();
    let settings = GenerationSettings::default();

    let first = article(40);
    let second = article(80);
    let a = summarize(&service, ModelChoice::Bart, &first, &settings, &mut counters).unwrap();
    let b = summarize(&service, ModelChoice::T5Base, &second, &settings, &mut counters).unwrap();

    assert_eq!(a.comparison.compression_ratio, 75.0);
    assert_eq!(b.comparison.compression_ratio, 87.5);
    assert_eq!(b.model_id, "t5-base");
    assert_eq!(counters.summaries_created, 2);
    assert_eq!(
        counters.characters_processed,
        (first.chars().count() + second.chars().count()) as u64
    );

    counters.reset();
    assert_eq!(counters, SessionCounters::new());
}

#[test]
fn test_rejected_input_skips_backend() {
    let service = Truncating::new(5);
    let mut counters = SessionCounters::new();

    let result = summarize(
        &service,
        ModelChoice::Bart,
        &article(19),
        &GenerationSettings::default(),
        &mut counters,
    );

    assert_eq!(
        result,
        Err(SummarizeError::TooShortInput {
            words: 19,
            minimum: 20
        })
    );
    assert_eq!(service.calls.get(), 0);
}

#[test]
fn test_backend_failure_is_recoverable() {
    let mut counters = SessionCounters::new();
    let settings = GenerationSettings::default();
    let text = Sample::Technology.text();

    let broken = Broken(ModelError::Inference("input too long".into()));
    let error = summarize(&broken, ModelChoice::Pegasus, text, &settings, &mut counters)
        .expect_err("backend fails");
    assert!(error.remedy().is_some());

    let working = Truncating::new(20);
    let outcome = summarize(&working, ModelChoice::Pegasus, text, &settings, &mut counters).unwrap();
    assert_eq!(outcome.comparison.summary.words, 20);
    assert_eq!(counters.summaries_created, 1);
}

#[test]
fn test_outcome_serializes_request_shape() {
    let service = Truncating::new(5);
    let mut counters = SessionCounters::new();
    let outcome = summarize(
        &service,
        ModelChoice::DistilBart,
        &article(30),
        &GenerationSettings::default(),
        &mut counters,
    )
    .unwrap();

    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["model"], "distil-bart");
    assert_eq!(json["model_id"], "sshleifer/distilbart-cnn-12-6");
    assert_eq!(json["parameters"]["do_sample"], false);
    assert!(json["parameters"].get("temperature").is_none());
    assert_eq!(json["comparison"]["original"]["words"], 30);
}
