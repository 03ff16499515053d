//! Default values for the parameters of a search.
//!
//! The restart and reduction defaults give a conservative, slowly growing schedule; every theory feature which generates lemmas on its own is off by default.

use crate::config::Branching;

/// Initial conflict budget of a search round.
pub const C_THRESHOLD: u32 = 100;

/// Growth factor of the conflict budget at each restart.
pub const C_FACTOR: f64 = 1.5;

/// Initial bound for outer restarts, when [FAST_RESTART] is set.
pub const D_THRESHOLD: u32 = 100;

/// Growth factor of the outer bound at each outer restart.
pub const D_FACTOR: f64 = 1.5;

/// Whether the nested (fast) restart schedule is used.
pub const FAST_RESTART: bool = false;

/// Floor on the learned clause count before the first reduction.
pub const R_THRESHOLD: u32 = 1000;

/// Fraction of the problem clause count taken as an alternative floor.
pub const R_FRACTION: f64 = 0.25;

/// Growth factor of the reduction threshold after each reduction.
pub const R_FACTOR: f64 = 1.05;

/// The branching policy.
pub const BRANCHING: Branching = Branching::Default;

/// Fraction of decisions made by a coin flip.
pub const RANDOMNESS: f32 = 0.02;

/// Seed of the engine's decision rng.
pub const RANDOM_SEED: u32 = 0xabcd_ef98;

/// Decay factor for variable activities.
pub const VAR_DECAY: f64 = 0.95;

/// Decay factor for clause activities.
pub const CLAUSE_DECAY: f32 = 0.999;

/// Whether small theory lemmas are cached as clauses.
pub const CACHE_TCLAUSES: bool = false;

/// Size bound on cached theory lemmas, in literals.
pub const TCLAUSE_SIZE: u32 = 8;

/// Whether the equality engine reconciles theory models optimistically at the final check.
pub const OPTIMISTIC_FINAL_CHECK: bool = true;

/// Whether dynamic Ackermann lemmas are generated.
pub const ACKERMANN: bool = false;

/// Cap on generated Ackermann lemmas.
pub const MAX_ACKERMANN: u32 = 1000;

/// Uses of a congruence before an Ackermann lemma for it is considered.
pub const ACKERMANN_THRESHOLD: u16 = 8;

/// Whether dynamic Ackermann lemmas are generated for boolean terms.
pub const BOOL_ACKERMANN: bool = false;

/// Cap on generated boolean Ackermann lemmas.
pub const MAX_BOOL_ACKERMANN: u32 = 600_000;

/// The boolean counterpart of [ACKERMANN_THRESHOLD].
pub const BOOL_ACKERMANN_THRESHOLD: u16 = 8;

/// Floor on the auxiliary-equality quota of the equality engine.
pub const AUX_EQ_QUOTA: u32 = 100;

/// Fraction of the equality engine's terms taken as an alternative quota.
pub const AUX_EQ_RATIO: f64 = 0.3;

/// Bound on interface equalities generated in one final-check round.
pub const MAX_INTERFACE_EQS: u32 = 200;

/// Whether the arithmetic engine propagates theory consequences.
pub const ARITH_PROPAGATION: bool = false;

/// Bound on the rows considered for arithmetic propagation, by size.
pub const MAX_PROPAGATION_ROW_SIZE: u32 = 30;

/// Whether the arithmetic engine adjusts its assignment towards integer feasibility before branching.
pub const ADJUST_ARITH_MODEL: bool = false;

/// Pivots before simplex switches to Bland's rule.
pub const BLAND_THRESHOLD: u32 = 1000;

/// Whether integer feasibility is checked periodically during the search.
pub const INTEGER_CHECK: bool = false;

/// Period of the integer feasibility checks, in conflicts.
pub const INTEGER_CHECK_PERIOD: u32 = 99_999;

/// Bound on update-conflict lemmas generated in one final-check round.
pub const MAX_UPDATE_CONFLICTS: u32 = 20;

/// Bound on extensionality instances generated in one final-check round.
pub const MAX_EXTENSIONALITY: u32 = 1;
