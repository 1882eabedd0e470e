//! Verdicts are always one of SAFE, CAUTION, AVOID or UNKNOWN, whatever
//! casing the service uses.

mod common;

use common::*;
use foodsense::analysis::AnalysisClient;
use foodsense::models::{IngredientStatus, RequestOutcome, Verdict};
use foodsense::presenter::{present, Tone, VerdictIcon};
use serde_json::json;
use std::sync::Arc;

const BARCODE_URL: &str = "http://analysis.test/scan/barcode";

async fn analyze(payload: serde_json::Value) -> RequestOutcome {
    let http = MockHttpConfig::new()
        .with_json_response(BARCODE_URL, payload)
        .build();
    let client = AnalysisClient::new(Arc::new(http), TEST_BASE_URL);
    client.analyze_barcode("0123456789012").await
}

#[tokio::test]
async fn test_verdict_casing_is_normalized() {
    let cases = [
        ("safe", Verdict::Safe),
        ("SAFE", Verdict::Safe),
        ("Safe", Verdict::Safe),
        ("cAuTiOn", Verdict::Caution),
        ("avoid", Verdict::Avoid),
        ("AVOID", Verdict::Avoid),
        ("ERROR", Verdict::Unknown),
        ("something-else", Verdict::Unknown),
        ("", Verdict::Unknown),
    ];

    for (raw, expected) in cases {
        let outcome = analyze(scan_json(raw, "Probe")).await;
        let result = outcome.result().unwrap_or_else(|| panic!("{:?} failed", raw));
        assert_eq!(result.verdict, expected, "raw verdict {:?}", raw);
    }
}

#[tokio::test]
async fn test_missing_or_non_string_verdict_is_unknown() {
    for payload in [
        json!({"product_name": "A", "explanation": "x"}),
        json!({"product_name": "A", "explanation": "x", "verdict": null}),
        json!({"product_name": "A", "explanation": "x", "verdict": 3}),
    ] {
        let outcome = analyze(payload.clone()).await;
        assert_eq!(
            outcome.result().map(|r| r.verdict),
            Some(Verdict::Unknown),
            "payload {}",
            payload
        );
    }
}

#[tokio::test]
async fn test_outcome_is_exactly_one_of_success_or_failure() {
    let ok = analyze(scan_json("safe", "Milk")).await;
    assert!(ok.is_success());
    assert!(ok.result().is_some());
    assert!(ok.reason().is_none());

    let bad = analyze(json!(["not", "an", "object"])).await;
    assert!(!bad.is_success());
    assert!(bad.result().is_none());
    assert!(bad.reason().is_some());
}

#[tokio::test]
async fn test_detailed_payload_presents_rows_and_badges() {
    let outcome = analyze(detailed_scan_json()).await;
    let result = outcome.result().expect("success");

    assert_eq!(result.verdict, Verdict::Caution);
    let statuses: Vec<_> = result
        .ingredients_analysis
        .iter()
        .map(|i| i.status)
        .collect();
    assert_eq!(
        statuses,
        vec![
            IngredientStatus::Caution,
            IngredientStatus::Safe,
            IngredientStatus::Risky
        ]
    );

    let view = present(result);
    assert_eq!(view.tone, Tone::Warning);
    assert_eq!(view.icon, VerdictIcon::Warning);
    assert_eq!(view.rows.len(), 3);
    assert_eq!(view.rows[2].emphasis, Tone::Negative);
    assert!(view.can_expand());
    assert!(!view.badges.is_empty());
}

#[tokio::test]
async fn test_missing_product_name_defaults() {
    let outcome = analyze(json!({"verdict": "safe", "explanation": "fine"})).await;
    let result = outcome.result().expect("success");
    assert_eq!(result.product_name, foodsense::models::UNKNOWN_PRODUCT_NAME);
}
