/*!
Transfer of [parameters](Params) into the attached engines.

Configuration happens once per search, from inside [check](crate::context::Context::check), strictly before the search loop starts.
Core knobs are always pushed; theory knobs are pushed only to the engines which are attached, and knobs for an absent engine are skipped without comment.

The bitvector engine takes no configuration.
It is consumed for model values and polarity preferences alone.
*/

use crate::{
    config::Params,
    context::Context,
    engines::EngineCore,
    misc::log::targets::{self},
};

impl<E: EngineCore> Context<E> {
    /// Pushes `params` into the core and into each attached theory engine.
    pub(crate) fn configure(&mut self, params: &Params) {
        self.core.set_randomness(params.randomness);
        self.core.set_random_seed(params.random_seed);
        self.core.set_var_decay(params.var_decay);
        self.core.set_clause_decay(params.clause_decay);
        if params.cache_tclauses {
            self.core.enable_theory_cache(params.tclause_size);
        } else {
            self.core.disable_theory_cache();
        }

        if let Some(equality) = self.equality.as_mut() {
            if params.optimistic_final_check {
                equality.enable_optimistic_final_check();
            } else {
                equality.disable_optimistic_final_check();
            }

            if params.ackermann {
                equality.enable_ackermann(params.max_ackermann);
                equality.set_ackermann_threshold(params.ackermann_threshold);
            } else {
                equality.disable_ackermann();
            }

            if params.bool_ackermann {
                equality.enable_bool_ackermann(params.max_bool_ackermann);
                equality.set_bool_ackermann_threshold(params.bool_ackermann_threshold);
            } else {
                equality.disable_bool_ackermann();
            }

            // The quota scales with the engine's term count, subject to the configured floor.
            let mut quota = (equality.term_count() as f64 * params.aux_eq_ratio) as u32;
            if quota < params.aux_eq_quota {
                quota = params.aux_eq_quota;
            }
            equality.set_aux_eq_quota(quota);
            equality.set_max_interface_eqs(params.max_interface_eqs);

            log::trace!(target: targets::CONFIGURE, "aux eq quota {quota}");
        }

        if let Some(arithmetic) = self.arithmetic.as_mut() {
            if params.arith_propagation {
                arithmetic.enable_propagation();
                arithmetic.set_propagation_threshold(params.max_propagation_row_size);
            }

            if params.adjust_arith_model {
                arithmetic.enable_adjust_model();
            }

            arithmetic.set_bland_threshold(params.bland_threshold);

            if params.integer_check {
                arithmetic.enable_periodic_integer_check();
                arithmetic.set_integer_check_period(params.integer_check_period);
            }
        }

        if let Some(functions) = self.functions.as_mut() {
            functions.set_max_update_conflicts(params.max_update_conflicts);
            functions.set_max_extensionality(params.max_extensionality);
        }

        log::debug!(target: targets::CONFIGURE, "configured, branching {}", params.branching);
    }
}
