/*!
Model construction, and the narrow boolean value query.

# Overview

Once a search has settled at [sat](Status::Sat) or [unknown](Status::Unknown), [build_model](crate::context::Context::build_model) assembles a [Model] by walking the term universe: every positive occurrence of an uninterpreted term receives a value.

A term's value is read through its root in the substitution table.
The [binding](Binding) of the root says which engine carries it --- a boolean constant is its own value, a class is valued by the equality engine, a literal collapses out of the core's four-valued assignment, and a theory variable is valued by the arithmetic or bitvector engine according to the root's declared type.
Whatever negation the substitution introduced is reapplied to boolean values at the end.

A root without a binding is a term the engines never saw.
When such a term is its own root and is registered, it was relevant to the problem but unconstrained, and it receives a deterministic *witness* value rather than no value.
When the root is some other term, the term reduced to that root, and the reduction is recorded as an alias when the model records aliases --- the root itself receives a value when the walk reaches its index.

Values the engines leave undetermined are recorded as [unknown](Value::Unknown).
A model therefore covers the same terms whichever engines were attached, and absence from the model means a term was irrelevant, not unvalued.

Engine model support is built before the walk and released after it, always symmetrically.
Between a build and a release, nothing mutates the engines, so building a model twice from the same settled search yields the same model.
*/

use num_rational::BigRational;
use num_traits::Zero;

use crate::{
    context::Context,
    engines::{Binding, EngineCore, Status, TheoryVar},
    misc::log::targets::{self},
    model::Model,
    structures::{
        term::{Term, TermKind, TypeKind},
        truth::TruthValue,
        value::{BvConstant, Value},
    },
    types::err::{self},
};

impl<E: EngineCore> Context<E> {
    /// Builds a model of the current assignment, recording aliases if `with_aliases`.
    ///
    /// Valid only at a status which [allows a model](Status::allows_model); anywhere else is a contract violation reported as an error.
    pub fn build_model(&mut self, with_aliases: bool) -> Result<Model, err::ErrorKind> {
        if !self.core.status().allows_model() {
            return Err(err::StateError::ModelUnavailable.into());
        }

        if let Some(arithmetic) = self.arithmetic.as_mut() {
            arithmetic.build_model();
        }
        if let Some(bitvector) = self.bitvector.as_mut() {
            bitvector.build_model();
        }
        if let Some(equality) = self.equality.as_mut() {
            equality.build_values();
        }

        let mut model = Model::new(with_aliases);

        // Index 0 is reserved, so the first term is at index 1.
        for index in 1..self.terms.term_count() {
            let term = Term::pos(index);
            if self.terms.kind_of(term) == TermKind::Uninterpreted {
                self.build_term_value(&mut model, term);
            }
        }

        if let Some(arithmetic) = self.arithmetic.as_mut() {
            arithmetic.release_model();
        }
        if let Some(bitvector) = self.bitvector.as_mut() {
            bitvector.release_model();
        }
        if let Some(equality) = self.equality.as_mut() {
            equality.release_values();
        }

        log::debug!(
            target: targets::MODEL,
            "model of {} terms, {} aliases",
            model.len(),
            model.alias_count()
        );

        Ok(model)
    }

    /// Values `term` in `model`, or records its alias.
    fn build_term_value(&self, model: &mut Model, term: Term) {
        let root = self.terms.root_of(term);

        match self.terms.binding_of(root.as_positive()) {
            Some(binding) => {
                let value = self.bound_value(binding, root.as_positive());

                // Reapply the negation of the root, if any. Only booleans negate.
                let value = match root.is_negated() {
                    true => value.negate_boolean(),
                    false => value,
                };

                model.values.insert(term, value);
            }

            None if term == root => {
                if self.terms.is_registered(term) {
                    // Relevant though unconstrained: any value of the right type works.
                    model.values.insert(term, self.witness(term));
                }
            }

            None => {
                if model.records_aliases {
                    model.aliases.insert(term, root);
                }
            }
        }
    }

    /// The value carried by `binding`, for a root of the given positive occurrence.
    fn bound_value(&self, binding: Binding, root: Term) -> Value {
        match binding {
            Binding::Constant(b) => Value::Bool(b),

            Binding::Class(class) => {
                debug_assert!(self.equality.is_some());
                match self.equality.as_ref() {
                    Some(equality) => equality.value_of(class),
                    None => Value::Unknown,
                }
            }

            Binding::Literal(literal) => match self.core.literal_value(literal) {
                TruthValue::True => Value::Bool(true),
                TruthValue::False => Value::Bool(false),
                TruthValue::UndefTrue | TruthValue::UndefFalse => Value::Unknown,
            },

            Binding::Variable(var) => self.variable_value(var, root),
        }
    }

    /// The value of a theory variable, dispatched on the declared type of its root.
    fn variable_value(&self, var: TheoryVar, root: Term) -> Value {
        match self.terms.type_of(root) {
            TypeKind::Int | TypeKind::Real => {
                debug_assert!(self.arithmetic.is_some());
                match self.arithmetic.as_ref().and_then(|a| a.value_of(var)) {
                    Some(q) => Value::Rational(q),
                    None => Value::Unknown,
                }
            }

            TypeKind::Bitvector(_) => {
                debug_assert!(self.bitvector.is_some());
                match self.bitvector.as_ref().and_then(|b| b.value_of(var)) {
                    Some(b) => Value::Bitvector(b),
                    None => Value::Unknown,
                }
            }

            // Boolean roots are bound to literals, and roots of every other
            // type are bound to equality-engine classes.
            TypeKind::Bool | TypeKind::Uninterpreted => {
                debug_assert!(false, "theory variable of type {}", self.terms.type_of(root));
                Value::Unknown
            }
        }
    }

    /// The witness value of an unconstrained term of its declared type.
    ///
    /// The rule is fixed so rebuilding a model is deterministic: `false` for booleans, zero for integer, real, and bitvector terms, and for an uninterpreted sort a fresh abstract element tagged by the term's own index.
    fn witness(&self, term: Term) -> Value {
        match self.terms.type_of(term) {
            TypeKind::Bool => Value::Bool(false),
            TypeKind::Int | TypeKind::Real => Value::Rational(BigRational::zero()),
            TypeKind::Bitvector(width) => Value::Bitvector(BvConstant::zero(width)),
            TypeKind::Uninterpreted => Value::Abstract(term.index()),
        }
    }

    /// The four-valued value of the boolean term `term`, read from the current assignment.
    ///
    /// Total and read-only: no model is built, and a term the engines never saw answers [UndefFalse](TruthValue::UndefFalse).
    pub fn bool_term_value(&self, term: Term) -> TruthValue {
        let mut value = TruthValue::UndefFalse;

        let root = self.terms.root_of(term);
        if let Some(binding) = self.terms.binding_of(root.as_positive()) {
            value = match binding {
                Binding::Constant(b) => TruthValue::from(b),

                Binding::Literal(literal) => self.core.literal_value(literal),

                Binding::Class(_) | Binding::Variable(_) => {
                    debug_assert!(false, "boolean root bound outside the core");
                    TruthValue::UndefFalse
                }
            };

            value = value.polarize(root.is_negated());
        }

        value
    }
}
