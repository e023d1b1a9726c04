//! Process-wide schemas for the analysis payloads models must return.
//!
//! Each schema mirrors its domain type in `models::analysis` field for
//! field, so a payload that validates is guaranteed to deserialize.
//! Built once at first use, never mutated, shared by reference.

use std::sync::LazyLock;

use serde_json::{Map, Value};

use super::{FieldSchema, Schema};

const COVERAGE_GRADES: [&str; 5] = ["A", "B", "C", "D", "F"];
const GAP_SEVERITIES: [&str; 3] = ["low", "moderate", "high"];
const MEMBER_ROLES: [&str; 3] = ["primary", "spouse", "dependent"];

static POLICY_ANALYSIS: LazyLock<Schema> = LazyLock::new(build_policy_analysis);
static HOUSEHOLD_ANALYSIS: LazyLock<Schema> = LazyLock::new(build_household_analysis);

/// Schema for [`PolicyAnalysis`](crate::models::analysis::PolicyAnalysis)
/// payloads.
pub fn policy_analysis() -> &'static Schema {
    &POLICY_ANALYSIS
}

/// Schema for [`HouseholdAnalysis`](crate::models::analysis::HouseholdAnalysis)
/// payloads.
pub fn household_analysis() -> &'static Schema {
    &HOUSEHOLD_ANALYSIS
}

fn build_policy_analysis() -> Schema {
    Schema::object(vec![
        FieldSchema::required("summary", Schema::String),
        FieldSchema::required("coverage_grade", Schema::enumeration(COVERAGE_GRADES)),
        FieldSchema::required(
            "coverage_gaps",
            Schema::array(Schema::object(vec![
                FieldSchema::required("category", Schema::String),
                FieldSchema::required("description", Schema::String),
                FieldSchema::required("severity", Schema::enumeration(GAP_SEVERITIES)),
            ])),
        ),
        FieldSchema::required(
            "recommendations",
            Schema::array(Schema::object(vec![
                FieldSchema::required("title", Schema::String),
                FieldSchema::required("description", Schema::String),
            ])),
        ),
        FieldSchema::optional_with_default(
            "custom_sections",
            Schema::map(Schema::String),
            Value::Object(Map::new()),
        ),
    ])
}

fn build_household_analysis() -> Schema {
    Schema::object(vec![
        FieldSchema::required("summary", Schema::String),
        FieldSchema::required("overall_grade", Schema::enumeration(COVERAGE_GRADES)),
        FieldSchema::required(
            "member_assessments",
            Schema::array(Schema::object(vec![
                FieldSchema::required("member_name", Schema::String),
                FieldSchema::required("role", Schema::enumeration(MEMBER_ROLES)),
                FieldSchema::required("grade", Schema::enumeration(COVERAGE_GRADES)),
                FieldSchema::required("notes", Schema::String),
                FieldSchema::optional_with_default(
                    "uncovered_needs",
                    Schema::array(Schema::String),
                    Value::Array(Vec::new()),
                ),
            ])),
        ),
    ])
}
