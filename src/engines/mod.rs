/*!
Interfaces to the engines a context drives, and to the term universe it reads.

The crate implements none of these.
A [context](crate::context) is assembled from an embedder's engines, and each trait here is the narrow slice of an engine the driver actually touches:

- [EngineCore](self::core::EngineCore) --- the CDCL core: status, propagation, decisions, restarts, statistics, and a handful of tuning knobs.
- [EqualityEngine](theory::EqualityEngine), [ArithmeticEngine](theory::ArithmeticEngine), [BitvectorEngine](theory::BitvectorEngine), [FunctionEngine](theory::FunctionEngine) --- the optional theory engines: tuning knobs, model support, value extraction, and polarity preferences.
- [TermTable](terms::TermTable) --- the term universe and its internalization table, read during model construction.

Contract notes are given per method.
Where a method is marked as valid only at some [status](self::core::Status), calling it elsewhere is the embedder's bug --- the driver itself respects every such contract, and the traits carry no defensive checks.
*/

pub mod core;
pub mod terms;
pub mod theory;

pub use self::core::{EngineCore, SearchStats, Status, TheoryAtom, TheoryKind};
pub use terms::{Binding, TermTable};
pub use theory::{
    ArithmeticEngine, BitvectorEngine, ClassId, EqualityEngine, FunctionEngine, TheoryBranching,
    TheoryVar,
};
