/*!
Determines the satisfiability of the assertions in a context.

# Overview

A [check](crate::context::Context::check) is a sequence of bounded search *rounds* separated by restarts.

Each round gives the core a conflict budget and pushes decisions into it until either the budget is exhausted or the status settles.
Within a round the loop is, roughly:

```rust,ignore
self.core.process();
while self.core.status() == Status::Searching && conflicts <= max_conflicts {
    if learned_clauses >= reduce_threshold {
        self.core.reduce_learned();
        reduce_threshold *= r_factor;
    }

    match self.core.select_literal() {
        // The assignment is complete, so ask the theory engines to agree.
        None => self.core.final_check(),

        Some(literal) => {
            let literal = self.branch(branching, literal);
            self.core.decide(literal);
            self.core.process();
        }
    }
}
```

A round which exhausts its budget is followed by a restart, and the restarts follow a two-tier schedule over a pair of thresholds:

```none
          +-------+  settled status
   +----->| round |----------------> done
   |      +-------+
   |          |
   |          | budget exhausted
   |          ⌄
   |     +---------+
   +-----| restart |  c_threshold *= c_factor, and then:
         +---------+    c_threshold <  d_threshold   an inner restart
                        c_threshold >= d_threshold   an outer restart:
                                                       d_threshold = c_threshold
```

So the budget grows geometrically, and a restart counts as *outer* once the budget catches the outer bound.
Without [fast_restart](crate::config::Params::fast_restart) both thresholds start equal, every restart is outer, and the two tiers collapse into plain geometric growth.
With it, the budget resets to its configured starting value at each outer restart while the outer bound grows by its own factor, giving many cheap inner restarts between the expensive outer ones.

Reduction is scheduled by a third threshold: whenever the learned clause count reaches it, the core deletes a share of the learned clauses and the threshold grows by [r_factor](crate::config::Params::r_factor).
Its starting point scales with the problem, floored by [r_threshold](crate::config::Params::r_threshold).

# Interruption

An external interruption request surfaces as [Status::Interrupted] at a propagation pass, and ends the round and the loop like any other settled status.
The thresholds the schedule had reached are retained on the context, and [resume](crate::context::Context::resume) re-enters the loop with them --- the remaining budget is what it was, not a fresh start.

Statistics lines are logged to the [stats](crate::misc::log::targets::STATS) target at search start, each restart, each reduction, and search end.
*/

use crate::{
    config::Params,
    context::{Context, Counters, SearchState},
    engines::{EngineCore, Status},
    misc::log::targets::{self},
    types::err::{self},
};

/// The learned clause count at which the first reduction happens.
///
/// Scales with the problem, subject to the configured floor.
fn initial_reduce_threshold(problem_clauses: u32, params: &Params) -> u32 {
    let mut threshold = (problem_clauses as f64 * params.r_fraction) as u32;
    if threshold < params.r_threshold {
        threshold = params.r_threshold;
    }
    threshold
}

impl<E: EngineCore> Context<E> {
    /// Determines the satisfiability of the assertions, steered by `params`.
    ///
    /// Configures the engines, then searches to a settled status.
    /// On a context which is not [idle](Status::Idle), a no-op returning the current status.
    pub fn check(&mut self, params: &Params) -> Status {
        let status = self.core.status();
        if status != Status::Idle {
            log::debug!(target: targets::SEARCH, "check skipped at status {status}");
            return status;
        }

        self.counters = Counters::default();
        self.configure(params);

        let c_threshold = params.c_threshold;
        let d_threshold = match params.fast_restart {
            true => params.d_threshold,
            false => c_threshold,
        };
        let reduce_threshold = initial_reduce_threshold(self.core.stats().problem_clauses, params);

        let state = SearchState {
            params: params.clone(),
            c_threshold,
            d_threshold,
            reduce_threshold,
        };

        self.core.start_search();
        self.log_stats("start:", log::Level::Debug);

        self.solve_loop(state)
    }

    /// Resumes an interrupted search with the retained thresholds.
    ///
    /// Valid only at [Status::Interrupted], and only when the interrupted search left state to resume with --- an interrupted [precheck](Context::precheck) does not.
    pub fn resume(&mut self) -> Result<Status, err::ErrorKind> {
        if self.core.status() != Status::Interrupted {
            return Err(err::StateError::NotInterrupted.into());
        }
        let state = self
            .search_state
            .take()
            .ok_or(err::StateError::NoRetainedSearch)?;

        self.core.resume();
        log::debug!(target: targets::SEARCH, "resumed");

        Ok(self.solve_loop(state))
    }

    /// Rounds separated by restarts, to a settled status.
    ///
    /// On interruption, `state` is retained on the context for a resume.
    fn solve_loop(&mut self, mut state: SearchState) -> Status {
        while self.core.status() == Status::Searching {
            self.round(&mut state);

            if self.core.status() != Status::Searching {
                break;
            }

            // The round exhausted its budget.
            self.core.restart();

            state.c_threshold = (state.c_threshold as f64 * state.params.c_factor) as u32;

            if state.c_threshold >= state.d_threshold {
                state.d_threshold = state.c_threshold;
                if state.params.fast_restart {
                    state.c_threshold = state.params.c_threshold;
                    state.d_threshold = (state.d_threshold as f64 * state.params.d_factor) as u32;
                }

                self.counters.outer_restarts += 1;
                self.log_stats("restart:", log::Level::Debug);
            } else {
                self.counters.inner_restarts += 1;
                self.log_stats("inner restart:", log::Level::Trace);
            }
        }

        self.log_stats("done:", log::Level::Debug);

        let status = self.core.status();
        match status {
            Status::Interrupted => self.search_state = Some(state),
            _ => self.search_state = None,
        }
        status
    }

    /// One bounded search round.
    ///
    /// Decisions are pushed into the core until the conflict budget of `state` is exhausted or the status settles.
    /// Reductions grow `state`'s reduce threshold in place.
    fn round(&mut self, state: &mut SearchState) {
        self.counters.rounds += 1;

        let max_conflicts = self.core.stats().conflicts + state.c_threshold as u64;

        self.core.process();
        while self.core.status() == Status::Searching
            && self.core.stats().conflicts <= max_conflicts
        {
            if self.core.stats().learned_clauses >= state.reduce_threshold {
                let deletions = self.core.stats().learned_clauses_deleted;
                self.core.reduce_learned();
                state.reduce_threshold =
                    (state.reduce_threshold as f64 * state.params.r_factor) as u32;

                self.counters.reductions += 1;
                self.log_stats("reduce:", log::Level::Trace);
                log::trace!(
                    target: targets::REDUCTION,
                    "({} clauses deleted)",
                    self.core.stats().learned_clauses_deleted - deletions
                );
            }

            match self.core.select_literal() {
                None => {
                    // The assignment is complete, so ask the theory engines to agree.
                    self.core.final_check();
                }

                Some(literal) => {
                    let literal = self.branch(state.params.branching, literal);
                    self.core.decide(literal);
                    self.core.process();
                }
            }
        }
    }

    /// A statistics line, in a fixed column layout under the `when` label.
    fn log_stats(&self, when: &str, level: log::Level) {
        let stats = self.core.stats();
        log::log!(
            target: targets::STATS,
            level,
            "({:<14} {:>8} {:>10} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8} {:>7.1})",
            when,
            stats.conflicts,
            stats.decisions,
            stats.random_decisions,
            stats.binary_clauses,
            stats.problem_clauses,
            stats.problem_literals,
            stats.learned_clauses,
            stats.learned_literals,
            stats.learned_literals_per_clause(),
        );
    }
}
