//! Literals are boolean variables paired with a polarity.
//!
//! The boolean engine proposes decision literals carrying its preferred polarity, and the [branching policies](crate::config::Branching) may revise the polarity before the decision is made.
//! Accordingly, the only mutation a literal supports is on its polarity --- the variable of a decision is the engine's alone to choose.
//!
//! An example:
//!
//! ```rust
//! # use grebe_smt::structures::literal::Literal;
//! let literal = Literal::new(79, true);
//!
//! assert!(literal.polarity());
//! assert_eq!(literal.var(), 79);
//! assert_eq!(literal.negate(), Literal::new(79, false));
//! assert_eq!(literal.with_polarity(true), literal);
//! ```
//!
//! In other solvers an integer is often used, with the low bit of the integer indicating the polarity of the literal.

/// A boolean variable of the search engine, kept as a plain index.
pub type Var = u32;

/// A literal: a boolean variable paired with a polarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Literal {
    /// The variable of the literal.
    var: Var,

    /// The polarity of the literal.
    polarity: bool,
}

impl Literal {
    /// A fresh literal, pairing a variable with a polarity.
    pub fn new(var: Var, polarity: bool) -> Self {
        Self { var, polarity }
    }

    /// The variable of the literal.
    pub fn var(&self) -> Var {
        self.var
    }

    /// The polarity of the literal.
    pub fn polarity(&self) -> bool {
        self.polarity
    }

    /// The negation of the literal.
    pub fn negate(&self) -> Self {
        Self {
            var: self.var,
            polarity: !self.polarity,
        }
    }

    /// The same variable, with the polarity forced to `polarity`.
    pub fn with_polarity(&self, polarity: bool) -> Self {
        Self {
            var: self.var,
            polarity,
        }
    }
}

impl PartialOrd for Literal {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Literal {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        if self.var == other.var {
            self.polarity.cmp(&other.polarity)
        } else {
            self.var.cmp(&other.var)
        }
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.var),
            false => write!(f, "-{}", self.var),
        }
    }
}
