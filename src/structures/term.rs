//! Term occurrences, and the classifications model construction dispatches on.
//!
//! The term universe itself is external --- the driver reads indices, kinds, and declared types through the [TermTable](crate::engines::terms::TermTable) trait and never constructs a term.
//!
//! A term occurrence pairs the index of a term with a negation flag.
//! Substitution may root a boolean term in the *negation* of another term, so resolving a root answers with an occurrence rather than a bare index, and whoever reads a value through a root must reapply the negation afterwards.

/// The index of a term in the external term universe.
pub type TermIndex = u32;

/// A term occurrence: a term index paired with a negation flag.
///
/// Occurrences of non-boolean terms are always positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Term {
    /// The index of the term.
    index: TermIndex,

    /// Whether the occurrence is negated.
    negated: bool,
}

impl Term {
    /// A fresh occurrence of the term at `index`.
    pub fn new(index: TermIndex, negated: bool) -> Self {
        Self { index, negated }
    }

    /// The positive occurrence of the term at `index`.
    pub fn pos(index: TermIndex) -> Self {
        Self {
            index,
            negated: false,
        }
    }

    /// The negative occurrence of the term at `index`.
    pub fn neg(index: TermIndex) -> Self {
        Self {
            index,
            negated: true,
        }
    }

    /// The index of the term.
    pub fn index(&self) -> TermIndex {
        self.index
    }

    /// Whether the occurrence is negated.
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// The opposite occurrence of the same term.
    pub fn negate(&self) -> Self {
        Self {
            index: self.index,
            negated: !self.negated,
        }
    }

    /// The positive occurrence of the same term.
    pub fn as_positive(&self) -> Self {
        Self {
            index: self.index,
            negated: false,
        }
    }
}

impl PartialOrd for Term {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Term {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        if self.index == other.index {
            self.negated.cmp(&other.negated)
        } else {
            self.index.cmp(&other.index)
        }
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.negated {
            false => write!(f, "t{}", self.index),
            true => write!(f, "-t{}", self.index),
        }
    }
}

/// The kind of a term, as far as model construction cares.
///
/// Only uninterpreted terms --- the free constants a user declares --- receive entries in a model.
/// Everything else is either fixed by its own structure or an internal artefact of internalization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TermKind {
    /// A free constant, declared by the user.
    Uninterpreted,

    /// An interpreted constant.
    Constant,

    /// Any term with structure: applications, connectives, and the like.
    Composite,
}

/// Classification of a declared type, used to dispatch value extraction to the right engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeKind {
    /// The booleans.
    Bool,

    /// The integers.
    Int,

    /// The reals.
    Real,

    /// Bitvectors of the given width.
    Bitvector(u32),

    /// An uninterpreted sort, valued through the equality engine.
    Uninterpreted,
}

impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Bool => write!(f, "bool"),
            Self::Int => write!(f, "int"),
            Self::Real => write!(f, "real"),
            Self::Bitvector(width) => write!(f, "bitvector[{width}]"),
            Self::Uninterpreted => write!(f, "uninterpreted"),
        }
    }
}
