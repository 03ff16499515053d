//! Key structures: literals, term occurrences, truth values, and model values.
//!
//! These are the shared vocabulary between the driver and the engines it consults.
//! Each is a plain value type --- cheap to copy (or clone, for the big-number values), ordered, and hashable --- so either side of an engine trait can store them as it pleases.
//!
//! A note on polarity: both [literals](literal) and [term occurrences](term) pair an index with one bit of boolean structure.
//! For literals the bit selects a polarity, for terms it marks negation under substitution.
//! The two are kept as separate types as terms and boolean variables come from unrelated universes.

pub mod literal;
pub mod term;
pub mod truth;
pub mod value;
