//! The procedures of the driver, as methods on a [context](crate::context::Context).
//!
//! Placed here by concern, and primarily for documentation: [configure](configure) pushes parameters into the engines, [solve](solve) holds the search loop and its restart and reduction scheduling, [branch](branch) revises the polarity of decisions, [precheck](precheck) is the one-round satisfiability check, and [model](model) constructs models and answers boolean term queries.

pub mod branch;
pub mod configure;
pub mod model;
pub mod precheck;
pub mod solve;
