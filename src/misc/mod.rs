//! Miscellaneous items, supporting rather than implementing the library.

pub mod log;
