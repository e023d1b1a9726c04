//! The registry schemas must stay aligned with the analysis types: a
//! payload that validates must deserialize.

use serde_json::json;

use polisight_core::models::analysis::{CoverageGrade, HouseholdAnalysis, PolicyAnalysis};
use polisight_core::models::household::MemberRole;
use polisight_core::schema::{registry, validate};

fn policy_payload() -> serde_json::Value {
    json!({
        "summary": "Solid PPO coverage with a high deductible.",
        "coverage_grade": "B",
        "coverage_gaps": [
            {
                "category": "dental",
                "description": "No orthodontic coverage for adults.",
                "severity": "moderate"
            }
        ],
        "recommendations": [
            {
                "title": "Add a dental rider",
                "description": "Quotes from the carrier start around $18/month."
            }
        ]
    })
}

#[test]
fn policy_analysis_payload_validates_and_deserializes() {
    let narrowed = validate(registry::policy_analysis(), &policy_payload())
        .expect("payload should validate");

    let analysis: PolicyAnalysis =
        serde_json::from_value(narrowed).expect("narrowed payload should deserialize");

    assert_eq!(analysis.coverage_grade, CoverageGrade::B);
    assert_eq!(analysis.coverage_gaps.len(), 1);
    assert!(analysis.custom_sections.is_empty());
}

#[test]
fn custom_sections_default_applied_by_schema() {
    let narrowed = validate(registry::policy_analysis(), &policy_payload())
        .expect("payload should validate");

    assert_eq!(narrowed["custom_sections"], json!({}));
}

#[test]
fn missing_coverage_grade_reports_path() {
    let mut payload = policy_payload();
    payload.as_object_mut().unwrap().remove("coverage_grade");

    let violations = validate(registry::policy_analysis(), &payload)
        .expect_err("coverage_grade is required");

    assert!(violations.iter().any(|v| v.path == "$.coverage_grade"));
}

#[test]
fn invalid_gap_severity_names_allowed_set() {
    let mut payload = policy_payload();
    payload["coverage_gaps"][0]["severity"] = json!("catastrophic");

    let violations = validate(registry::policy_analysis(), &payload)
        .expect_err("severity is out of range");

    assert_eq!(violations[0].path, "$.coverage_gaps[0].severity");
    assert_eq!(violations[0].expected, "one of [low, moderate, high]");
}

#[test]
fn household_analysis_payload_validates_and_deserializes() {
    let payload = json!({
        "summary": "Coverage is adequate for adults, thin for the children.",
        "overall_grade": "C",
        "member_assessments": [
            {
                "member_name": "Jordan",
                "role": "primary",
                "grade": "B",
                "notes": "Well covered under the PPO."
            },
            {
                "member_name": "Sam",
                "role": "dependent",
                "grade": "D",
                "notes": "Pediatric dental is excluded.",
                "uncovered_needs": ["orthodontics"]
            }
        ]
    });

    let narrowed = validate(registry::household_analysis(), &payload)
        .expect("payload should validate");

    // The first member's absent uncovered_needs gets the schema default.
    assert_eq!(narrowed["member_assessments"][0]["uncovered_needs"], json!([]));

    let analysis: HouseholdAnalysis =
        serde_json::from_value(narrowed).expect("narrowed payload should deserialize");

    assert_eq!(analysis.overall_grade, CoverageGrade::C);
    assert_eq!(analysis.member_assessments.len(), 2);
    assert_eq!(analysis.member_assessments[0].role, MemberRole::Primary);
    assert_eq!(
        analysis.member_assessments[1].uncovered_needs,
        vec!["orthodontics"]
    );
}

#[test]
fn household_member_with_unknown_role_rejected() {
    let payload = json!({
        "summary": "s",
        "overall_grade": "A",
        "member_assessments": [
            {"member_name": "X", "role": "cousin", "grade": "A", "notes": ""}
        ]
    });

    let violations = validate(registry::household_analysis(), &payload)
        .expect_err("cousin is not a member role");

    assert_eq!(violations[0].path, "$.member_assessments[0].role");
}
