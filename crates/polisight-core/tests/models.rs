use polisight_core::error::CoreError;
use polisight_core::models::policy::PlanType;

#[test]
fn plan_type_parses_case_insensitively() {
    assert_eq!("ppo".parse::<PlanType>().unwrap(), PlanType::Ppo);
    assert_eq!("HDHP".parse::<PlanType>().unwrap(), PlanType::Hdhp);
}

#[test]
fn unknown_plan_type_rejected() {
    let err = "indemnity".parse::<PlanType>().unwrap_err();
    assert!(matches!(err, CoreError::InvalidPlanType(s) if s == "indemnity"));
}
