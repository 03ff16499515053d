/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to make the shape of a search visible without touching the engines: what was configured, when rounds began and ended, and which restarts and reductions happened when.

Note, no log implementation is provided.
For more details, see [log].

The [stats](targets::STATS) target carries the per-event statistics lines; everything else logs the event itself.
For example, with [env_logger](https://docs.rs/env_logger/latest/env_logger/), `RUST_LOG=stats=debug …` follows the progress of a search, and `RUST_LOG=reduction=trace …` adds the clauses deleted by each reduction.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [configuration](crate::procedures::configure).
    pub const CONFIGURE: &str = "configure";

    /// Logs related to the [search loop](crate::procedures::solve).
    pub const SEARCH: &str = "search";

    /// Logs related to restarts.
    pub const RESTART: &str = "restart";

    /// Logs related to learned clause deletion.
    pub const REDUCTION: &str = "reduction";

    /// Logs related to the [precheck](crate::procedures::precheck).
    pub const PRECHECK: &str = "precheck";

    /// Logs related to [model construction](crate::procedures::model).
    pub const MODEL: &str = "model";

    /// The statistics lines written at search start, restarts, reductions, and search end.
    pub const STATS: &str = "stats";
}
