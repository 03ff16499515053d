//! A library for driving an SMT solve: search scheduling, branching, and model construction over pluggable engines.
//!
//! grebe_smt is the orchestration layer of an SMT context.
//! It owns the decision logic of a solve --- when to restart, when to delete learned clauses, which polarity to decide, what counts as a model value --- and none of the reasoning.
//! The reasoning lives in engines supplied by an embedder: a CDCL-style boolean core, and whichever theory engines the problem calls for (equality and uninterpreted functions, arithmetic, bitvectors, functions and arrays).
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context](crate::context).
//!
//! A context is assembled from an embedder's engines, consumed through the narrow traits of the [engines] module, together with a read-only view of the term universe.
//! Four procedures drive it:
//!
//! - [check](crate::context::Context::check) configures the engines from a [Params](crate::config::Params) record and searches to a settled [status](crate::engines::Status), in bounded rounds separated by restarts --- see the [solve procedure](crate::procedures::solve) for the scheduling.
//! - [precheck](crate::context::Context::precheck) runs a single propagation pass, catching trivial unsatisfiability without a search.
//! - [build_model](crate::context::Context::build_model) walks the term universe after a satisfiable (or unknown though consistent) search and assembles a [model](crate::model) of concrete [values](crate::structures::value).
//! - [resume](crate::context::Context::resume) continues an interrupted search with the budget it had left.
//!
//! The polarity of each decision passes through a [branching policy](crate::config::Branching), which may consult the theory engine owning the decided atom.
//!
//! # Example
//!
//! ```rust,ignore
//! use grebe_smt::{config::Params, context::Context, engines::Status};
//!
//! let mut context = Context::new(core, terms);
//! context.arithmetic = Some(Box::new(simplex));
//!
//! match context.check(&Params::default()) {
//!     Status::Sat => {
//!         let model = context.build_model(true)?;
//!         print!("{model}");
//!     }
//!     status => println!("{status}"),
//! }
//! ```
//!
//! # Logs
//!
//! To help diagnose issues calls to [log!](log) are made throughout, and a variety of targets are defined in order to narrow output to relevant parts of the library.
//! As logging is only built on request, and further can be requested by level, logs are verbose.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - The statistics lines of a search can be followed with `RUST_LOG=stats=debug …` or,
//! - Restart scheduling down to inner restarts with `RUST_LOG=stats=trace …`

pub mod config;
pub mod context;
pub mod engines;
pub mod misc;
pub mod model;
pub mod procedures;
pub mod structures;
pub mod types;
