use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// An insurance policy as entered or imported by the user.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InsurancePolicy {
    pub id: Uuid,
    pub carrier: String,
    pub plan_name: String,
    pub plan_type: PlanType,
    /// Monthly premium in cents.
    pub premium_cents: u64,
    /// Annual deductible in cents.
    pub deductible_cents: u64,
    /// Annual out-of-pocket maximum in cents.
    pub out_of_pocket_max_cents: u64,
    pub effective_date: jiff::civil::Date,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PlanType {
    Hmo,
    Ppo,
    Epo,
    Pos,
    Hdhp,
}

impl FromStr for PlanType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hmo" => Ok(PlanType::Hmo),
            "ppo" => Ok(PlanType::Ppo),
            "epo" => Ok(PlanType::Epo),
            "pos" => Ok(PlanType::Pos),
            "hdhp" => Ok(PlanType::Hdhp),
            other => Err(CoreError::InvalidPlanType(other.to_string())),
        }
    }
}

/// A policy document (plan brochure, summary of benefits, EOB) with its
/// extracted text content.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PolicyDocument {
    pub filename: String,
    pub text: String,
}
