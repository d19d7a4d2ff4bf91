//! Command handlers.
//!
//! Handlers are thin: they call the controller in the order a resolver
//! session would and format the result for the terminal. Resolution rules
//! live in the core.

pub mod candidates;
pub mod last_chosen;
pub mod rank;
pub mod remember;
