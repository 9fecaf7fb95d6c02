//! Application layer containing the schedule computation.
//!
//! This module defines the `AmortizationEngine`, the entry point that turns
//! account terms and a schedule request into monthly ledger rows.

pub mod engine;
