//! polisight-pipeline
//!
//! The validated call executor: one provider invocation per call, every
//! outcome classified. A caller builds an [`request::AnalysisRequest`],
//! picks a response schema, supplies a [`provider::Provider`], and gets
//! back either a typed [`executor::ValidatedResult`] or a
//! [`error::ClassifiedError`] it must branch on.

pub mod error;
pub mod executor;
pub mod provider;
pub mod request;
