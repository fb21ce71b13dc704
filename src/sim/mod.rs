//! Simulation driver and reporting.
//!
//! The driver feeds a reference string into one fresh policy instance per
//! (policy, capacity) pairing and records what happened at every step.
//! It depends only on the [`ReplacementPolicy`](crate::policy::ReplacementPolicy)
//! trait, never on a concrete policy.
//!
//! # Components
//! - [`workload`] - the built-in reference string and trial capacities
//! - [`run_trial`] / [`TrialResult`] - one policy run over a reference string
//! - [`report`] - tabular rendering of traces and the cross-policy summary

pub mod report;
mod trial;
pub mod workload;

pub use trial::{run_trial, StepRecord, TrialResult};
