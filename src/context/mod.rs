/*!
The context --- the engines of a solve, and the state which steers them.

A [Context] pairs a core boolean engine with whichever theory engines are attached and with the term table of the problem.
The context itself holds no clauses and no assignment.
Those live in the engines, and the context steers: when to restart, when to reduce, which literal to decide, and how to read a model back out.

The core engine is a type parameter, as everything asked of it is asked through [EngineCore].
Theory engines are attached as trait objects, and each is optional --- a configuration or branching step which concerns an absent engine is skipped.

# Example

```rust,ignore
let mut context = Context::new(core, terms);
context.equality = Some(Box::new(egraph));

match context.check(&Params::default())? {
    Status::Sat => {
        let model = context.build_model(true)?;
        println!("{model}");
    }
    status => println!("{status}"),
}
```
*/

mod counters;
pub use counters::Counters;

use crate::{
    config::Params,
    engines::{
        ArithmeticEngine, BitvectorEngine, EngineCore, EqualityEngine, FunctionEngine, Status,
        TermTable,
    },
};

/// Restart and reduction state of a search, retained while the search is interrupted.
///
/// Held by the context from the start of a [check](Context::check) until the search settles, so a [resume](Context::resume) continues with the thresholds the interrupted search had grown, rather than starting the schedule over.
#[derive(Clone, Debug)]
pub struct SearchState {
    /// The parameters the search was started with.
    pub params: Params,

    /// The conflict budget of the next round.
    pub c_threshold: u32,

    /// The bound at which a restart is an outer restart.
    pub d_threshold: u32,

    /// The learned clause count at which the next reduction happens.
    pub reduce_threshold: u32,
}

/// A context, generic over the core boolean engine.
pub struct Context<E: EngineCore> {
    /// The core boolean engine.
    pub core: E,

    /// The term table of the problem, for model construction.
    pub terms: Box<dyn TermTable>,

    /// The equality engine, if attached.
    pub equality: Option<Box<dyn EqualityEngine>>,

    /// The arithmetic engine, if attached.
    pub arithmetic: Option<Box<dyn ArithmeticEngine>>,

    /// The bitvector engine, if attached.
    pub bitvector: Option<Box<dyn BitvectorEngine>>,

    /// The function engine, if attached.
    pub functions: Option<Box<dyn FunctionEngine>>,

    /// Counters over the current (or most recent) search.
    pub counters: Counters,

    /// State retained for a resumed search, present exactly while the search is interrupted.
    pub search_state: Option<SearchState>,
}

impl<E: EngineCore> Context<E> {
    /// A context over the given core engine and term table, with no theory engines attached.
    pub fn new(core: E, terms: Box<dyn TermTable>) -> Self {
        Context {
            core,
            terms,
            equality: None,
            arithmetic: None,
            bitvector: None,
            functions: None,
            counters: Counters::default(),
            search_state: None,
        }
    }

    /// The status of the core engine.
    pub fn status(&self) -> Status {
        self.core.status()
    }
}
