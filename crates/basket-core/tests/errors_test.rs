//! Tests for the error handling system.

use std::collections::HashSet;

use basket_core::errors::error_code;
use basket_core::errors::*;

#[test]
fn every_error_has_a_code() {
    let errors: Vec<Box<dyn Fn() -> &'static str>> = vec![
        Box::new(|| EncodeError::EmptyDataset.error_code()),
        Box::new(|| {
            EncodeError::EmptyItemLabel {
                transaction: "7".into(),
            }
            .error_code()
        }),
        Box::new(|| {
            MiningError::InvalidThreshold {
                field: "min_support",
                value: 0.0,
                reason: "must be in (0, 1]".into(),
            }
            .error_code()
        }),
        Box::new(|| {
            MiningError::MissingSupport {
                itemset: "{bread}".into(),
            }
            .error_code()
        }),
        Box::new(|| MiningError::ItemSetTooLarge { size: 70, max: 63 }.error_code()),
        Box::new(|| MiningError::Cancelled.error_code()),
        Box::new(|| {
            ConfigError::MissingValue {
                field: "mining.min_support".into(),
            }
            .error_code()
        }),
    ];
    for code in errors {
        assert!(!code().is_empty());
    }
}

#[test]
fn mining_codes_are_distinct() {
    let codes: HashSet<&str> = [
        EncodeError::EmptyDataset.error_code(),
        MiningError::Cancelled.error_code(),
        MiningError::MissingSupport {
            itemset: "x".into(),
        }
        .error_code(),
        MiningError::InvalidThreshold {
            field: "min_threshold",
            value: -1.0,
            reason: "negative".into(),
        }
        .error_code(),
    ]
    .into_iter()
    .collect();
    assert_eq!(codes.len(), 4);
}

#[test]
fn from_conversions_preserve_codes() {
    let pipeline: PipelineError = EncodeError::EmptyDataset.into();
    assert!(matches!(pipeline, PipelineError::Encode(EncodeError::EmptyDataset)));
    assert_eq!(pipeline.error_code(), error_code::EMPTY_DATASET);

    let pipeline: PipelineError = MiningError::Cancelled.into();
    assert!(pipeline.is_cancelled());
    assert_eq!(pipeline.error_code(), error_code::CANCELLED);

    let pipeline: PipelineError = ConfigError::FileNotFound {
        path: "/nope".into(),
    }
    .into();
    assert_eq!(pipeline.error_code(), error_code::CONFIG_ERROR);
    assert!(!pipeline.is_cancelled());
}

#[test]
fn coded_string_format() {
    let err = MiningError::InvalidThreshold {
        field: "min_support",
        value: 1.5,
        reason: "must be in (0, 1]".into(),
    };
    let s = err.coded_string();
    assert!(s.starts_with("[INVALID_THRESHOLD] "), "got {}", s);
    assert!(s.contains("min_support"));
    assert!(s.contains("1.5"));
}

#[test]
fn display_messages() {
    assert_eq!(
        EncodeError::EmptyDataset.to_string(),
        "Dataset contains no transactions"
    );
    let err = MiningError::MissingSupport {
        itemset: "{bread, milk}".into(),
    };
    assert!(err.to_string().contains("{bread, milk}"));
}
