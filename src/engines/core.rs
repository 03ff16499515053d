//! The boolean engine: the CDCL core the driver pushes decisions into.
//!
//! The core owns the search status, the assignment, the clause databases, and the decision heuristic.
//! The driver never sees any of those directly --- it steers the core through the calls below and reads back a [status](Status) and a [statistics snapshot](SearchStats).

use crate::structures::{
    literal::{Literal, Var},
    truth::TruthValue,
};

/// The status of the boolean engine, which doubles as the status of the context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// Ready for a search.
    Idle,

    /// A search is underway.
    Searching,

    /// The assertions are satisfiable.
    Sat,

    /// The assertions are unsatisfiable.
    Unsat,

    /// The search ended without a verdict.
    Unknown,

    /// The search was interrupted, and may be resumed.
    Interrupted,
}

impl Status {
    /// Whether a model may be built at this status.
    pub fn allows_model(&self) -> bool {
        matches!(self, Self::Sat | Self::Unknown)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Searching => write!(f, "searching"),
            Self::Sat => write!(f, "sat"),
            Self::Unsat => write!(f, "unsat"),
            Self::Unknown => write!(f, "unknown"),
            Self::Interrupted => write!(f, "interrupted"),
        }
    }
}

/// A snapshot of the engine's search statistics.
///
/// All counts are cumulative over the lifetime of the engine, not per search.
/// The driver budgets rounds against the deltas of [conflicts](SearchStats::conflicts) and triggers reductions off [learned_clauses](SearchStats::learned_clauses).
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchStats {
    /// Conflicts found.
    pub conflicts: u64,

    /// Decisions made.
    pub decisions: u64,

    /// Decisions made by a coin flip rather than the heuristic.
    pub random_decisions: u64,

    /// Binary clauses held.
    pub binary_clauses: u32,

    /// Problem clauses held, binary clauses aside.
    pub problem_clauses: u32,

    /// Literals across the problem clauses.
    pub problem_literals: u64,

    /// Learned clauses held.
    pub learned_clauses: u32,

    /// Literals across the learned clauses.
    pub learned_literals: u64,

    /// Learned clauses deleted by reductions.
    pub learned_clauses_deleted: u64,
}

impl SearchStats {
    /// Mean length of a learned clause.
    pub fn learned_literals_per_clause(&self) -> f64 {
        self.learned_literals as f64 / self.learned_clauses as f64
    }
}

/// The theory engines a context may drive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TheoryKind {
    /// The equality and uninterpreted function engine.
    Equality,

    /// The arithmetic engine.
    Arithmetic,

    /// The bitvector engine.
    Bitvector,

    /// The function and array engine.
    Function,
}

/// A theory atom attached to a boolean variable, tagged with the engine which owns it.
///
/// The index means whatever the owning engine wants it to mean.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TheoryAtom {
    /// The engine the atom belongs to.
    pub owner: TheoryKind,

    /// The owning engine's index for the atom.
    pub index: u32,
}

/// The slice of a CDCL core consumed by the driver.
pub trait EngineCore {
    /// The current status.
    fn status(&self) -> Status;

    /// Begins a search: internal setup and base-level simplification.
    ///
    /// Valid only at [Status::Idle].
    /// May settle the status immediately --- a conflict at the base level gives [Status::Unsat].
    /// Otherwise leaves the engine at [Status::Searching].
    fn start_search(&mut self);

    /// One round of propagation, including any theory propagation the core coordinates.
    ///
    /// May settle the status, or leave it at [Status::Searching] with the assignment extended.
    /// An external interruption request surfaces here as [Status::Interrupted].
    /// No effect once the status is settled.
    fn process(&mut self);

    /// The decision heuristic: an unassigned variable with the engine's preferred polarity, or `None` once the assignment is complete.
    fn select_literal(&mut self) -> Option<Literal>;

    /// Makes `literal` a decision.
    ///
    /// Valid only for an unassigned variable while [Status::Searching].
    fn decide(&mut self, literal: Literal);

    /// The final check: the theory engines inspect the complete assignment and either agree, or create new work.
    ///
    /// Settles the status to [Status::Sat] (or [Status::Unknown]) on agreement.
    fn final_check(&mut self);

    /// Backtracks to the base level, keeping the learned clauses.
    ///
    /// Valid only while [Status::Searching].
    fn restart(&mut self);

    /// Returns an interrupted engine to [Status::Searching], keeping the search state.
    ///
    /// Valid only at [Status::Interrupted].
    fn resume(&mut self);

    /// Ends the search at [Status::Unknown].
    ///
    /// Valid only while [Status::Searching].
    fn end_unknown(&mut self);

    /// Deletes a share of the learned clauses.
    fn reduce_learned(&mut self);

    /// The four-valued value of `literal` on the current assignment.
    fn literal_value(&self, literal: Literal) -> TruthValue;

    /// The theory atom attached to `var`, if any.
    fn theory_atom(&self, var: Var) -> Option<TheoryAtom>;

    /// Sets the fraction of decisions made by a coin flip.
    fn set_randomness(&mut self, randomness: f32);

    /// Seeds the engine's decision rng.
    fn set_random_seed(&mut self, seed: u32);

    /// Sets the decay factor for variable activities.
    fn set_var_decay(&mut self, decay: f64);

    /// Sets the decay factor for clause activities.
    fn set_clause_decay(&mut self, decay: f32);

    /// Caches theory lemmas of at most `size` literals as clauses.
    fn enable_theory_cache(&mut self, size: u32);

    /// Disables the theory lemma cache.
    fn disable_theory_cache(&mut self);

    /// A snapshot of the search statistics.
    fn stats(&self) -> SearchStats;
}
