// tests/integration_tests/request_test.rs
use synopsis::{
    GenerationSettings, MIN_WORDS, ParameterError, SummarizationParameters, SummarizeError,
    ValidationOutcome, build_parameters, compute_comparison, validate,
};

#[test]
fn test_validation_thresholds() {
    assert_eq!(validate(""), ValidationOutcome::Empty);
    assert_eq!(validate(&"word ".repeat(MIN_WORDS - 1)), ValidationOutcome::TooShort);
    assert_eq!(validate(&"word ".repeat(MIN_WORDS)), ValidationOutcome::Ok);
}

#[test]
fn test_fixed_request_never_carries_sampling_keys() {
    for (temperature, top_p) in [(0.1, 0.1), (1.0, 0.9), (2.0, 1.0), (50.0, -3.0)] {
        let settings = GenerationSettings {
            sampling: false,
            temperature,
            top_p,
            ..GenerationSettings::default()
        };
        let parameters = build_parameters(&settings).unwrap();
        let json = serde_json::to_value(parameters).unwrap();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 3, "unexpected keys: {keys:?}");
        assert!(json.get("temperature").is_none());
        assert!(json.get("top_p").is_none());
    }
}

#[test]
fn test_sampled_request() {
    let settings = GenerationSettings {
        max_length: 500,
        min_length: 10,
        sampling: true,
        temperature: 2.0,
        top_p: 0.1,
    };
    assert_eq!(
        build_parameters(&settings),
        Ok(SummarizationParameters::Sampled {
            max_length: 500,
            min_length: 10,
            temperature: 2.0,
            top_p: 0.1
        })
    );
}

#[test]
fn test_bounds_are_inclusive() {
    for (max_length, min_length) in [(50, 10), (500, 100)] {
        let settings = GenerationSettings {
            max_length,
            min_length,
            ..GenerationSettings::default()
        };
        assert!(build_parameters(&settings).is_ok());
    }

    let settings = GenerationSettings {
        max_length: 49,
        ..GenerationSettings::default()
    };
    assert!(matches!(
        build_parameters(&settings),
        Err(ParameterError::OutOfRange {
            name: "max_length",
            ..
        })
    ));
}

#[test]
fn test_comparison() {
    let result = compute_comparison("a b c d", "a b").unwrap();
    assert_eq!(result.original.words, 4);
    assert_eq!(result.summary.words, 2);
    assert_eq!(result.compression_ratio, 50.0);
    assert_eq!(
        compute_comparison("", "a b"),
        Err(SummarizeError::DegenerateComparison)
    );
}
