//! Concrete values, as recorded in a [model](crate::model).
//!
//! Values are produced by the engines: booleans collapse out of the [four-valued assignment](crate::structures::truth), rationals come from the arithmetic engine, bitvector constants from the bitvector engine, and elements of uninterpreted sorts from the equality engine.
//!
//! [Unknown](Value::Unknown) is a value in its own right.
//! A term *recorded* as unknown was relevant to the problem though left undetermined by the engines --- which is different from a term with no record at all.

use num_bigint::BigUint;
use num_rational::BigRational;
use num_traits::{One, Zero};

/// A bitvector constant: value bits tagged with a width.
///
/// The bits are kept reduced modulo `2^width`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BvConstant {
    /// The width of the constant, in bits.
    width: u32,

    /// The value bits, reduced modulo `2^width`.
    bits: BigUint,
}

impl BvConstant {
    /// A constant of the given width, with `bits` reduced to fit.
    pub fn new(width: u32, bits: BigUint) -> Self {
        let mask = (BigUint::one() << width) - BigUint::one();
        Self {
            width,
            bits: bits & mask,
        }
    }

    /// The all-zero constant of the given width.
    pub fn zero(width: u32) -> Self {
        Self {
            width,
            bits: BigUint::zero(),
        }
    }

    /// The width of the constant, in bits.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The value bits.
    pub fn bits(&self) -> &BigUint {
        &self.bits
    }
}

impl std::fmt::Display for BvConstant {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "0b{:0>width$}",
            self.bits.to_str_radix(2),
            width = self.width as usize
        )
    }
}

/// The value of a term in a model.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Value {
    /// Relevant, though left undetermined by the engines.
    Unknown,

    /// A boolean.
    Bool(bool),

    /// A rational, covering both integer and real terms.
    Rational(BigRational),

    /// A bitvector constant.
    Bitvector(BvConstant),

    /// An element of an uninterpreted sort, identified by an arbitrary tag.
    Abstract(u32),
}

impl Value {
    /// Whether the value is [Unknown](Value::Unknown).
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// The negation of a boolean value; any other value is untouched.
    ///
    /// Negation through a substitution root only ever applies to booleans, and the negation of an unknown is unknown.
    pub fn negate_boolean(self) -> Self {
        match self {
            Self::Bool(b) => Self::Bool(!b),
            other => other,
        }
    }

    /// The boolean of the value, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Unknown => write!(f, "?"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Rational(q) => write!(f, "{q}"),
            Self::Bitvector(b) => write!(f, "{b}"),
            Self::Abstract(tag) => write!(f, "@{tag}"),
        }
    }
}
