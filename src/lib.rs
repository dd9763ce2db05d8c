//! NeuroRisk Core - Mental Health Risk Assessment Service
//!
//! Backend for the single-page assessment dashboard. Two engines:
//! - `logic::scoring` - rule-based risk scorer (weighted point aggregation)
//! - `logic::metrics` - synthetic model-comparison metrics + training simulation
//!
//! The presentation layer talks to this crate through `api::commands` only.

pub mod api;
pub mod constants;
pub mod logic;
