//! Qualitative risk assessment and investment advice.
//!
//! Both entry points are pure functions over a single stock: same input, same
//! output, no I/O. The selection service re-exports them so callers rarely
//! depend on this crate directly.

pub mod advice;
pub mod advisor;

pub use advice::{build_advice, InvestmentAdvice, PositionSize, Timing};
pub use advisor::{assess_risk, RiskAssessment, RiskLevel};
