//! Common test utilities.
//!
//! Fixtures for resolution records and candidates, plus fake scorers.

pub mod fixtures;
pub mod scorers;
