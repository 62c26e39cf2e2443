//! Test support utilities for the Weather Station API
//!
//! Shared by the backend's integration tests: one-time logging setup and
//! assertions for the problem details error contract.

pub mod logging;
pub mod problem_details;
