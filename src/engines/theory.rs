//! The optional theory engines: tuning knobs, model support, values, and polarity preferences.
//!
//! Each engine is optional, and the driver queries an engine only when it is attached.
//! The split into four traits follows the split of concerns at configuration and model-construction time: the equality engine owns classes of terms and a value table, the arithmetic and bitvector engines own variables with extractable values, and the function engine only takes limits.
//!
//! Model support --- whatever internal state an engine needs to answer value queries --- is built and released around a model walk, always symmetrically.
//! Value extraction is only valid between the build and the release.

use num_rational::BigRational;

use crate::structures::{
    literal::Literal,
    value::{BvConstant, Value},
};

/// An equality-engine class of terms, kept as a plain index.
pub type ClassId = u32;

/// A theory solver's variable, kept as a plain index.
///
/// Which engine the variable belongs to follows from the declared type of the term bound to it.
pub type TheoryVar = u32;

/// Polarity preferences for theory atoms, consulted by the theory-guided branching policies.
pub trait TheoryBranching {
    /// The preferred polarity for deciding `atom`, given the engine-proposed `literal`.
    ///
    /// The returned literal must keep the variable of `literal`.
    fn preferred_polarity(&self, atom: u32, literal: Literal) -> Literal;
}

/// The equality and uninterpreted function engine.
pub trait EqualityEngine: TheoryBranching {
    /// Reconcile theory models optimistically at the final check, before generating interface equalities.
    fn enable_optimistic_final_check(&mut self);

    /// Generate interface equalities unconditionally at the final check.
    fn disable_optimistic_final_check(&mut self);

    /// Enables dynamic Ackermann lemma generation, with a cap on generated lemmas.
    fn enable_ackermann(&mut self, max: u32);

    /// Disables dynamic Ackermann lemma generation.
    fn disable_ackermann(&mut self);

    /// Number of times a congruence is used before an Ackermann lemma for it is considered.
    fn set_ackermann_threshold(&mut self, threshold: u16);

    /// Enables dynamic Ackermann lemma generation for boolean terms, with a cap on generated lemmas.
    fn enable_bool_ackermann(&mut self, max: u32);

    /// Disables dynamic Ackermann lemma generation for boolean terms.
    fn disable_bool_ackermann(&mut self);

    /// The boolean counterpart of [set_ackermann_threshold](EqualityEngine::set_ackermann_threshold).
    fn set_bool_ackermann_threshold(&mut self, threshold: u16);

    /// Bounds the auxiliary equalities the engine may create while searching.
    fn set_aux_eq_quota(&mut self, quota: u32);

    /// Bounds the interface equalities generated in one final-check round.
    fn set_max_interface_eqs(&mut self, max: u32);

    /// Terms currently registered with the engine.
    ///
    /// Scales the auxiliary-equality quota at configuration time.
    fn term_count(&self) -> u32;

    /// Builds the engine's value table from the current assignment.
    fn build_values(&mut self);

    /// Releases the value table.
    fn release_values(&mut self);

    /// The value of `class` in the built value table.
    fn value_of(&self, class: ClassId) -> Value;
}

/// The arithmetic engine.
pub trait ArithmeticEngine: TheoryBranching {
    /// Enables theory propagation.
    fn enable_propagation(&mut self);

    /// Bounds the rows considered for theory propagation by their size.
    fn set_propagation_threshold(&mut self, max_row_size: u32);

    /// Adjust the variable assignment towards integer feasibility before branching.
    fn enable_adjust_model(&mut self);

    /// Number of pivots before simplex switches to Bland's rule.
    fn set_bland_threshold(&mut self, threshold: u32);

    /// Enables periodic integer feasibility checks during the search.
    fn enable_periodic_integer_check(&mut self);

    /// Sets the period of the integer feasibility checks, in conflicts.
    fn set_integer_check_period(&mut self, period: u32);

    /// Builds model support from the current assignment.
    fn build_model(&mut self);

    /// Releases the model support.
    fn release_model(&mut self);

    /// The rational value of `var`, if the engine has one.
    fn value_of(&self, var: TheoryVar) -> Option<BigRational>;
}

/// The bitvector engine.
///
/// Takes no configuration --- it is consumed for model values and polarity preferences alone.
pub trait BitvectorEngine: TheoryBranching {
    /// Builds model support from the current assignment.
    fn build_model(&mut self);

    /// Releases the model support.
    fn release_model(&mut self);

    /// The constant value of `var`, if the engine has one.
    fn value_of(&self, var: TheoryVar) -> Option<BvConstant>;
}

/// The function and array engine.
///
/// Function values live in the equality engine's classes, so nothing is extracted here.
pub trait FunctionEngine: TheoryBranching {
    /// Bounds the update-conflict lemmas generated in one final-check round.
    fn set_max_update_conflicts(&mut self, max: u32);

    /// Bounds the extensionality instances generated in one final-check round.
    fn set_max_extensionality(&mut self, max: u32);
}
