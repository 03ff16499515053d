/*!
Parameters for a search, and the branching policies.

A [Params] value travels with a single [check](crate::context::Context::check): the restart and reduction fields steer the [search loop](crate::procedures::solve) directly, and everything else is pushed into the attached engines by [configuration](crate::procedures::configure) before the loop starts.
Fields for an engine which is not attached are ignored.

Defaults live in [defaults] and are noted per field.
*/

mod branching;
pub use branching::Branching;

pub mod defaults;

/// Heuristic parameters of a search.
///
/// Plain data: a caller builds one (usually from [Params::default]), revises the fields of interest, and passes it to [check](crate::context::Context::check).
#[derive(Clone, Debug)]
pub struct Params {
    /// Initial conflict budget of a search round. Default: 100.
    pub c_threshold: u32,

    /// Growth factor of the conflict budget at each restart. Default: 1.5.
    pub c_factor: f64,

    /// Initial bound for outer restarts, used only with [fast_restart](Params::fast_restart). Default: 100.
    pub d_threshold: u32,

    /// Growth factor of the outer bound at each outer restart. Default: 1.5.
    pub d_factor: f64,

    /// Nested restart schedule: reset the conflict budget at each outer restart, growing the outer bound instead. Default: false.
    pub fast_restart: bool,

    /// Floor on the learned clause count before the first reduction. Default: 1000.
    pub r_threshold: u32,

    /// Fraction of the problem clause count taken as an alternative floor for the first reduction. Default: 0.25.
    pub r_fraction: f64,

    /// Growth factor of the reduction threshold after each reduction. Default: 1.05.
    pub r_factor: f64,

    /// The branching policy applied to decisions. Default: [Branching::Default].
    pub branching: Branching,

    /// Fraction of decisions made by a coin flip. Default: 0.02.
    pub randomness: f32,

    /// Seed of the engine's decision rng. Default: 0xabcdef98.
    pub random_seed: u32,

    /// Decay factor for variable activities. Default: 0.95.
    pub var_decay: f64,

    /// Decay factor for clause activities. Default: 0.999.
    pub clause_decay: f32,

    /// Cache small theory lemmas as clauses. Default: false.
    pub cache_tclauses: bool,

    /// Size bound on cached theory lemmas, in literals. Default: 8.
    pub tclause_size: u32,

    /// Reconcile theory models optimistically at the final check. Default: true.
    pub optimistic_final_check: bool,

    /// Generate dynamic Ackermann lemmas. Default: false.
    pub ackermann: bool,

    /// Cap on generated Ackermann lemmas. Default: 1000.
    pub max_ackermann: u32,

    /// Uses of a congruence before an Ackermann lemma for it is considered. Default: 8.
    pub ackermann_threshold: u16,

    /// Generate dynamic Ackermann lemmas for boolean terms. Default: false.
    pub bool_ackermann: bool,

    /// Cap on generated boolean Ackermann lemmas. Default: 600000.
    pub max_bool_ackermann: u32,

    /// The boolean counterpart of [ackermann_threshold](Params::ackermann_threshold). Default: 8.
    pub bool_ackermann_threshold: u16,

    /// Floor on the auxiliary-equality quota of the equality engine. Default: 100.
    pub aux_eq_quota: u32,

    /// Fraction of the equality engine's terms taken as an alternative quota. Default: 0.3.
    pub aux_eq_ratio: f64,

    /// Bound on interface equalities generated in one final-check round. Default: 200.
    pub max_interface_eqs: u32,

    /// Propagate arithmetic consequences. Default: false.
    pub arith_propagation: bool,

    /// Bound on the rows considered for arithmetic propagation, by size. Default: 30.
    pub max_propagation_row_size: u32,

    /// Adjust the arithmetic assignment towards integer feasibility before branching. Default: false.
    pub adjust_arith_model: bool,

    /// Pivots before simplex switches to Bland's rule. Default: 1000.
    pub bland_threshold: u32,

    /// Check integer feasibility periodically during the search. Default: false.
    pub integer_check: bool,

    /// Period of the integer feasibility checks, in conflicts. Default: 99999.
    pub integer_check_period: u32,

    /// Bound on update-conflict lemmas generated in one final-check round. Default: 20.
    pub max_update_conflicts: u32,

    /// Bound on extensionality instances generated in one final-check round. Default: 1.
    pub max_extensionality: u32,
}

impl Default for Params {
    fn default() -> Self {
        Params {
            c_threshold: defaults::C_THRESHOLD,
            c_factor: defaults::C_FACTOR,
            d_threshold: defaults::D_THRESHOLD,
            d_factor: defaults::D_FACTOR,
            fast_restart: defaults::FAST_RESTART,
            r_threshold: defaults::R_THRESHOLD,
            r_fraction: defaults::R_FRACTION,
            r_factor: defaults::R_FACTOR,
            branching: defaults::BRANCHING,
            randomness: defaults::RANDOMNESS,
            random_seed: defaults::RANDOM_SEED,
            var_decay: defaults::VAR_DECAY,
            clause_decay: defaults::CLAUSE_DECAY,
            cache_tclauses: defaults::CACHE_TCLAUSES,
            tclause_size: defaults::TCLAUSE_SIZE,
            optimistic_final_check: defaults::OPTIMISTIC_FINAL_CHECK,
            ackermann: defaults::ACKERMANN,
            max_ackermann: defaults::MAX_ACKERMANN,
            ackermann_threshold: defaults::ACKERMANN_THRESHOLD,
            bool_ackermann: defaults::BOOL_ACKERMANN,
            max_bool_ackermann: defaults::MAX_BOOL_ACKERMANN,
            bool_ackermann_threshold: defaults::BOOL_ACKERMANN_THRESHOLD,
            aux_eq_quota: defaults::AUX_EQ_QUOTA,
            aux_eq_ratio: defaults::AUX_EQ_RATIO,
            max_interface_eqs: defaults::MAX_INTERFACE_EQS,
            arith_propagation: defaults::ARITH_PROPAGATION,
            max_propagation_row_size: defaults::MAX_PROPAGATION_ROW_SIZE,
            adjust_arith_model: defaults::ADJUST_ARITH_MODEL,
            bland_threshold: defaults::BLAND_THRESHOLD,
            integer_check: defaults::INTEGER_CHECK,
            integer_check_period: defaults::INTEGER_CHECK_PERIOD,
            max_update_conflicts: defaults::MAX_UPDATE_CONFLICTS,
            max_extensionality: defaults::MAX_EXTENSIONALITY,
        }
    }
}
