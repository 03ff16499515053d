/*!
Revision of decision polarities, following a [branching policy](Branching).

# Overview

The core proposes a decision literal carrying its own preferred polarity, and the policy of the search may revise the polarity before the decision is made.
The variable is never revised --- a policy only chooses between the literal and its negation.

The simple policies are self-contained.
The theory policies look up the theory atom attached to the decided variable and, when there is one and its owning engine is attached, let the engine choose between the literal and its negation.
For a variable with no usable atom, each theory policy falls back: [Theory](Branching::Theory) to the proposed literal, [TheoryNegative](Branching::TheoryNegative) and [TheoryPositive](Branching::TheoryPositive) to a forced polarity.
*/

use crate::{
    config::Branching,
    context::Context,
    engines::{EngineCore, TheoryBranching, TheoryKind},
    structures::literal::Literal,
};

impl<E: EngineCore> Context<E> {
    /// The literal to decide in place of the proposed `literal`, under `policy`.
    ///
    /// Total, and pure with respect to the engines: nothing is mutated, whatever is returned.
    pub fn branch(&self, policy: Branching, literal: Literal) -> Literal {
        match policy {
            Branching::Default => literal,

            Branching::Negative => literal.with_polarity(false),

            Branching::Positive => literal.with_polarity(true),

            Branching::Theory => self.theory_preference(literal).unwrap_or(literal),

            Branching::TheoryNegative => self
                .theory_preference(literal)
                .unwrap_or_else(|| literal.with_polarity(false)),

            Branching::TheoryPositive => self
                .theory_preference(literal)
                .unwrap_or_else(|| literal.with_polarity(true)),
        }
    }

    /// The owning engine's preference for the variable of `literal`, routed through the attached theory atom.
    ///
    /// `None` when the variable has no atom, or the atom's owner is not attached.
    fn theory_preference(&self, literal: Literal) -> Option<Literal> {
        let atom = self.core.theory_atom(literal.var())?;

        let preference = match atom.owner {
            TheoryKind::Equality => self
                .equality
                .as_ref()?
                .preferred_polarity(atom.index, literal),

            TheoryKind::Arithmetic => self
                .arithmetic
                .as_ref()?
                .preferred_polarity(atom.index, literal),

            TheoryKind::Bitvector => self
                .bitvector
                .as_ref()?
                .preferred_polarity(atom.index, literal),

            TheoryKind::Function => self
                .functions
                .as_ref()?
                .preferred_polarity(atom.index, literal),
        };
        debug_assert_eq!(preference.var(), literal.var());

        Some(preference)
    }
}
