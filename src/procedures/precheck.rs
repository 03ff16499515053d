/*!
The precheck: one start and one propagation pass, and nothing else.

# Overview

A precheck detects trivial unsatisfiability without paying for a search, and forces whatever the engines construct lazily on search start to be constructed.
No decision is made, no restart happens, and the final check is never reached --- so a precheck cannot answer *sat*.
A problem the single pass does not refute ends as [unknown](Status::Unknown).

The precheck closes the search it opened, though it does not return the engine to [idle](Status::Idle).
Resetting is the embedder's concern, and must happen before any further search or precheck.
*/

use crate::{
    context::Context,
    engines::{EngineCore, Status},
    misc::log::targets::{self},
};

impl<E: EngineCore> Context<E> {
    /// Starts a search, runs one propagation pass, and closes the search out.
    ///
    /// Returns [Unsat](Status::Unsat) on a trivial contradiction, [Interrupted](Status::Interrupted) if the pass was interrupted, and [Unknown](Status::Unknown) otherwise.
    /// On a context which is not [idle](Status::Idle), a no-op returning the current status.
    pub fn precheck(&mut self) -> Status {
        let status = self.core.status();
        if status != Status::Idle {
            log::debug!(target: targets::PRECHECK, "precheck skipped at status {status}");
            return status;
        }

        self.core.start_search();
        self.core.process();

        let status = self.core.status();
        debug_assert!(matches!(
            status,
            Status::Unsat | Status::Searching | Status::Interrupted
        ));

        let verdict = match status {
            Status::Searching => {
                self.core.end_unknown();
                Status::Unknown
            }
            settled => settled,
        };
        log::debug!(target: targets::PRECHECK, "precheck {verdict}");

        verdict
    }
}
