use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::household::MemberRole;

/// The structured output of a policy analysis transaction.
/// Every field is addressable by name in the frontend's report view.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PolicyAnalysis {
    pub summary: String,
    pub coverage_grade: CoverageGrade,
    pub coverage_gaps: Vec<CoverageGap>,
    pub recommendations: Vec<Recommendation>,

    // Extensible
    #[serde(default)]
    pub custom_sections: HashMap<String, String>,
}

/// Letter grade assigned to a policy's coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum CoverageGrade {
    A,
    B,
    C,
    D,
    F,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CoverageGap {
    pub category: String,
    pub description: String,
    pub severity: GapSeverity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum GapSeverity {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
}

/// The structured output of a household analysis transaction: one
/// assessment per household member.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HouseholdAnalysis {
    pub summary: String,
    pub overall_grade: CoverageGrade,
    pub member_assessments: Vec<MemberAssessment>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MemberAssessment {
    pub member_name: String,
    pub role: MemberRole,
    pub grade: CoverageGrade,
    pub notes: String,
    #[serde(default)]
    pub uncovered_needs: Vec<String>,
}
