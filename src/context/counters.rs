/// Counts of the scheduling events of a search.
///
/// Reset at the start of each [check](crate::context::Context::check), and left untouched by [resume](crate::context::Context::resume) so a resumed search accumulates onto the interrupted one.
#[derive(Clone, Copy, Debug, Default)]
pub struct Counters {
    /// The number of search rounds started.
    pub rounds: usize,

    /// Restarts which kept the outer bound.
    ///
    /// Always zero unless [fast_restart](crate::config::Params::fast_restart) is set, as otherwise the conflict budget never falls below the outer bound.
    pub inner_restarts: usize,

    /// Restarts which grew the outer bound.
    pub outer_restarts: usize,

    /// Reductions of the learned clause database.
    pub reductions: usize,
}

impl Counters {
    /// All restarts, inner and outer.
    pub fn restarts(&self) -> usize {
        self.inner_restarts + self.outer_restarts
    }
}
