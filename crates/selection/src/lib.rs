//! The selection service: the one component the outer layers call.
//!
//! Orchestrates clean -> normalize -> score -> sort -> truncate over an
//! immutable dataset snapshot, with strategies resolved through an injected
//! [`StrategyCatalog`]. Stateless per call: replacing the data builds a fresh
//! snapshot, and scoring never mutates anything, so one service instance can
//! back any number of concurrent read-only requests.

pub mod error;
pub mod service;

pub use error::SelectionError;
pub use service::SelectionService;

// The risk helpers are part of this crate's public contract; callers should
// not need to depend on the risk crate directly.
pub use risk::{assess_risk, build_advice, InvestmentAdvice, RiskAssessment, RiskLevel};
