//! Four-valued truth, as read from the boolean engine.
//!
//! The engine distinguishes assigned truth from remembered truth: a variable without a value on the current assignment still carries the phase it last held (or would prefer), and that phase survives in the undefined values.
//! So [UndefTrue](TruthValue::UndefTrue) leans true and [UndefFalse](TruthValue::UndefFalse) leans false, and both collapse to *unknown* wherever a definite answer is required.
//!
//! Negation is explicit: true and false swap, and the lean of an undefined value flips.
//! Nothing here relies on the numeric encoding of the values.

/// The value of a literal on the engine's current assignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TruthValue {
    /// Assigned true.
    True,

    /// Assigned false.
    False,

    /// Unassigned, leaning true.
    UndefTrue,

    /// Unassigned, leaning false.
    UndefFalse,
}

impl TruthValue {
    /// The negation of the value.
    ///
    /// Defined values swap, and the lean of an undefined value flips.
    pub fn negate(&self) -> Self {
        match self {
            Self::True => Self::False,
            Self::False => Self::True,
            Self::UndefTrue => Self::UndefFalse,
            Self::UndefFalse => Self::UndefTrue,
        }
    }

    /// The value, negated if `negated` holds.
    ///
    /// Used to reapply the negation of a substitution root to the value read through the root.
    pub fn polarize(&self, negated: bool) -> Self {
        if negated {
            self.negate()
        } else {
            *self
        }
    }

    /// Whether the value is one of the undefined pair.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::UndefTrue | Self::UndefFalse)
    }

    /// The definite boolean, if the value is defined.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::True => Some(true),
            Self::False => Some(false),
            Self::UndefTrue | Self::UndefFalse => None,
        }
    }
}

impl From<bool> for TruthValue {
    fn from(value: bool) -> Self {
        match value {
            true => Self::True,
            false => Self::False,
        }
    }
}

impl std::fmt::Display for TruthValue {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::True => write!(f, "true"),
            Self::False => write!(f, "false"),
            Self::UndefTrue => write!(f, "undef-true"),
            Self::UndefFalse => write!(f, "undef-false"),
        }
    }
}
