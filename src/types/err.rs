//! Error types used in the library.
//!
//! Every error here marks a broken contract between a caller and the context: an operation was requested at a status which does not support it.
//! None of them occur during a well-driven search --- the driver holds to the engine contracts, and the engines are trusted in return.
//!
//! Throughout the library `err::{self}` is used to prefix the types with `err::`.

/// The general error type of the library, wrapping area-specific errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    State(StateError),
}

/// Contract violations: an operation was requested at a status which does not support it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StateError {
    /// A model was requested, though the status is neither sat nor unknown.
    ModelUnavailable,

    /// A resume was requested, though the search was not interrupted.
    NotInterrupted,

    /// A resume was requested, though no search state was retained to resume with.
    NoRetainedSearch,
}

impl From<StateError> for ErrorKind {
    fn from(e: StateError) -> Self {
        ErrorKind::State(e)
    }
}
