/*!
Models, as maps from terms to values.

A [Model] is what [build_model](crate::context::Context::build_model) produces: a value for every uninterpreted term of the problem, and optionally an alias for every term the problem reduced to some other term.

Terms whose value the engines could not settle are present with [Value::Unknown] rather than absent, so the domain of the map is the same whichever engines were attached.

# Example

```rust
use grebe_smt::model::Model;
use grebe_smt::structures::term::Term;
use grebe_smt::structures::value::Value;

let mut model = Model::new(false);
model.values.insert(Term::pos(3), Value::Bool(true));

assert_eq!(model.value_of(Term::pos(3)), Some(&Value::Bool(true)));
assert_eq!(model.value_of(Term::pos(4)), None);
```
*/

use std::collections::HashMap;

use crate::structures::{term::Term, value::Value};

/// A map from uninterpreted terms to values, with optional aliases.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Model {
    /// The value of each uninterpreted term.
    ///
    /// Keys are positive terms.
    pub values: HashMap<Term, Value>,

    /// Terms mapped to the (possibly negated) term they were reduced to.
    ///
    /// Empty unless the model was built with aliases.
    pub aliases: HashMap<Term, Term>,

    /// Whether aliases were recorded when the model was built.
    pub records_aliases: bool,
}

impl Model {
    /// An empty model, recording aliases or not.
    pub fn new(records_aliases: bool) -> Self {
        Model {
            values: HashMap::default(),
            aliases: HashMap::default(),
            records_aliases,
        }
    }

    /// The value of a term, if the term is in the model.
    pub fn value_of(&self, term: Term) -> Option<&Value> {
        self.values.get(&term)
    }

    /// The term a term was reduced to, if an alias for it was recorded.
    pub fn alias_of(&self, term: Term) -> Option<Term> {
        self.aliases.get(&term).copied()
    }

    /// The number of terms with a value.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if no term has a value.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The number of aliases recorded.
    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }

    /// The terms with a value, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&Term, &Value)> {
        self.values.iter()
    }
}

impl std::fmt::Display for Model {
    /// Values then aliases, each sorted by term.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut values: Vec<_> = self.values.iter().collect();
        values.sort_by_key(|(term, _)| **term);
        for (term, value) in values {
            writeln!(f, "{term} := {value}")?;
        }

        let mut aliases: Vec<_> = self.aliases.iter().collect();
        aliases.sort_by_key(|(term, _)| **term);
        for (term, root) in aliases {
            writeln!(f, "{term} == {root}")?;
        }

        Ok(())
    }
}
