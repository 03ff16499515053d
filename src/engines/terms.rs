//! The term universe: roots, bindings, kinds, and declared types.
//!
//! Internalization maps user terms to whatever the engines reason with: a term may be substituted to a canonical representative (its *root*), and a root may be *bound* to a boolean constant, an equality-engine class, a literal of the core, or a theory variable.
//! The driver reads this mapping when constructing a [model](crate::model) and when answering [boolean term queries](crate::context::Context::bool_term_value); it never writes it.
//!
//! Roots of boolean terms may be negated occurrences --- see [Term](crate::structures::term::Term).

use crate::{
    engines::theory::{ClassId, TheoryVar},
    structures::{
        literal::Literal,
        term::{Term, TermIndex, TermKind, TypeKind},
    },
};

/// What the internalization table bound a root to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Binding {
    /// The root is the boolean constant `true` or `false`.
    Constant(bool),

    /// The root is carried by an equality-engine class.
    Class(ClassId),

    /// The root is carried by a literal of the boolean engine.
    ///
    /// Only boolean terms are bound this way.
    Literal(Literal),

    /// The root is carried by a theory solver's variable; the owning engine follows from the declared type of the root.
    Variable(TheoryVar),
}

/// The driver's read-only view of the term universe and its internalization table.
pub trait TermTable {
    /// One more than the largest term index in use.
    ///
    /// Index 0 is reserved, so the occurrences scanned for a model are `1..term_count()`.
    fn term_count(&self) -> TermIndex;

    /// The root of `term` in the substitution table; `term` itself when nothing was substituted.
    ///
    /// Roots of boolean terms may be negated occurrences.
    fn root_of(&self, term: Term) -> Term;

    /// The binding of the positive occurrence of a root, if the root was internalized.
    fn binding_of(&self, root: Term) -> Option<Binding>;

    /// Whether `term` occurs in the internalization table at all, bound or not.
    fn is_registered(&self, term: Term) -> bool;

    /// The kind of `term`.
    fn kind_of(&self, term: Term) -> TermKind;

    /// The declared type of `term`.
    fn type_of(&self, term: Term) -> TypeKind;
}
