//! Scripted engines and a scripted term table, shared by the integration tests.
//!
//! [FakeCore] follows a script: conflicts and learned clauses accrue at each propagation pass, decisions come from a queue (or an endless supply), and the status settles at a scripted conflict count or interruption point.
//! As the context owns its core by value, a test reads the recorded calls back through `context.core`.
//!
//! The theory engines are boxed away when attached, so each records what was pushed into it in a shared [record](std::cell::RefCell) the test keeps a handle to.

#![allow(dead_code)]

use std::{
    cell::RefCell,
    collections::{HashMap, HashSet, VecDeque},
    rc::Rc,
};

use num_rational::BigRational;

use grebe_smt::{
    context::Context,
    engines::{
        ArithmeticEngine, Binding, BitvectorEngine, ClassId, EngineCore, EqualityEngine,
        FunctionEngine, SearchStats, Status, TermTable, TheoryAtom, TheoryBranching, TheoryVar,
    },
    structures::{
        literal::{Literal, Var},
        term::{Term, TermIndex, TermKind, TypeKind},
        truth::TruthValue,
        value::{BvConstant, Value},
    },
};

/// A scripted boolean engine.
pub struct FakeCore {
    pub status: Status,

    // The script.
    pub unsat_on_start: bool,
    pub conflicts_per_process: u64,
    pub learned_per_process: u32,
    pub settle_at_conflicts: Option<(u64, Status)>,
    pub interrupt_at_process: Option<u64>,
    pub decision_queue: VecDeque<Literal>,
    pub endless_variable: Option<Var>,
    pub final_check_status: Status,
    pub truth_values: HashMap<Var, TruthValue>,
    pub theory_atoms: HashMap<Var, TheoryAtom>,

    // Recorded calls.
    pub start_calls: u32,
    pub process_calls: u64,
    pub restart_calls: u32,
    pub resume_calls: u32,
    pub end_unknown_calls: u32,
    pub final_check_calls: u32,
    pub reduce_calls: u32,
    pub decisions_made: Vec<Literal>,

    // Recorded knobs.
    pub randomness: Option<f32>,
    pub random_seed: Option<u32>,
    pub var_decay: Option<f64>,
    pub clause_decay: Option<f32>,
    pub theory_cache: Option<u32>,
    pub theory_cache_disabled: bool,

    // Statistics state.
    pub conflicts: u64,
    pub decisions: u64,
    pub random_decisions: u64,
    pub binary_clauses: u32,
    pub problem_clauses: u32,
    pub problem_literals: u64,
    pub learned_clauses: u32,
    pub learned_literals: u64,
    pub learned_clauses_deleted: u64,
}

impl FakeCore {
    pub fn new() -> Self {
        FakeCore {
            status: Status::Idle,

            unsat_on_start: false,
            conflicts_per_process: 0,
            learned_per_process: 0,
            settle_at_conflicts: None,
            interrupt_at_process: None,
            decision_queue: VecDeque::default(),
            endless_variable: None,
            final_check_status: Status::Sat,
            truth_values: HashMap::default(),
            theory_atoms: HashMap::default(),

            start_calls: 0,
            process_calls: 0,
            restart_calls: 0,
            resume_calls: 0,
            end_unknown_calls: 0,
            final_check_calls: 0,
            reduce_calls: 0,
            decisions_made: Vec::default(),

            randomness: None,
            random_seed: None,
            var_decay: None,
            clause_decay: None,
            theory_cache: None,
            theory_cache_disabled: false,

            conflicts: 0,
            decisions: 0,
            random_decisions: 0,
            binary_clauses: 0,
            problem_clauses: 0,
            problem_literals: 0,
            learned_clauses: 0,
            learned_literals: 0,
            learned_clauses_deleted: 0,
        }
    }

    /// A core already at `status`, for tests which skip the search.
    pub fn at(status: Status) -> Self {
        let mut core = FakeCore::new();
        core.status = status;
        core
    }

    /// Scripts the truth value of the positive literal of `var`.
    pub fn value(mut self, var: Var, value: TruthValue) -> Self {
        self.truth_values.insert(var, value);
        self
    }
}

impl EngineCore for FakeCore {
    fn status(&self) -> Status {
        self.status
    }

    fn start_search(&mut self) {
        assert_eq!(self.status, Status::Idle);
        self.start_calls += 1;
        self.status = match self.unsat_on_start {
            true => Status::Unsat,
            false => Status::Searching,
        };
    }

    fn process(&mut self) {
        if self.status != Status::Searching {
            return;
        }
        self.process_calls += 1;
        self.conflicts += self.conflicts_per_process;
        self.learned_clauses += self.learned_per_process;
        self.learned_literals += 3 * self.learned_per_process as u64;

        if let Some((bound, settled)) = self.settle_at_conflicts {
            if self.conflicts >= bound {
                self.status = settled;
                return;
            }
        }
        if self.interrupt_at_process == Some(self.process_calls) {
            self.status = Status::Interrupted;
        }
    }

    fn select_literal(&mut self) -> Option<Literal> {
        if let Some(literal) = self.decision_queue.pop_front() {
            return Some(literal);
        }
        self.endless_variable.map(|var| Literal::new(var, true))
    }

    fn decide(&mut self, literal: Literal) {
        assert_eq!(self.status, Status::Searching);
        self.decisions += 1;
        self.decisions_made.push(literal);
    }

    fn final_check(&mut self) {
        assert_eq!(self.status, Status::Searching);
        self.final_check_calls += 1;
        self.status = self.final_check_status;
    }

    fn restart(&mut self) {
        assert_eq!(self.status, Status::Searching);
        self.restart_calls += 1;
    }

    fn resume(&mut self) {
        assert_eq!(self.status, Status::Interrupted);
        self.resume_calls += 1;
        self.status = Status::Searching;
    }

    fn end_unknown(&mut self) {
        assert_eq!(self.status, Status::Searching);
        self.end_unknown_calls += 1;
        self.status = Status::Unknown;
    }

    fn reduce_learned(&mut self) {
        self.reduce_calls += 1;
        let deleted = self.learned_clauses / 2;
        self.learned_clauses -= deleted;
        self.learned_literals -= 3 * deleted as u64;
        self.learned_clauses_deleted += deleted as u64;
    }

    fn literal_value(&self, literal: Literal) -> TruthValue {
        let value = self
            .truth_values
            .get(&literal.var())
            .copied()
            .unwrap_or(TruthValue::UndefFalse);
        value.polarize(!literal.polarity())
    }

    fn theory_atom(&self, var: Var) -> Option<TheoryAtom> {
        self.theory_atoms.get(&var).copied()
    }

    fn set_randomness(&mut self, randomness: f32) {
        self.randomness = Some(randomness);
    }

    fn set_random_seed(&mut self, seed: u32) {
        self.random_seed = Some(seed);
    }

    fn set_var_decay(&mut self, decay: f64) {
        self.var_decay = Some(decay);
    }

    fn set_clause_decay(&mut self, decay: f32) {
        self.clause_decay = Some(decay);
    }

    fn enable_theory_cache(&mut self, size: u32) {
        self.theory_cache = Some(size);
    }

    fn disable_theory_cache(&mut self) {
        self.theory_cache = None;
        self.theory_cache_disabled = true;
    }

    fn stats(&self) -> SearchStats {
        SearchStats {
            conflicts: self.conflicts,
            decisions: self.decisions,
            random_decisions: self.random_decisions,
            binary_clauses: self.binary_clauses,
            problem_clauses: self.problem_clauses,
            problem_literals: self.problem_literals,
            learned_clauses: self.learned_clauses,
            learned_literals: self.learned_literals,
            learned_clauses_deleted: self.learned_clauses_deleted,
        }
    }
}

/// A scripted term table.
///
/// Terms default to uninterpreted boolean terms which are their own root, unregistered and unbound.
pub struct FakeTerms {
    pub count: TermIndex,
    pub roots: HashMap<TermIndex, Term>,
    pub bindings: HashMap<TermIndex, Binding>,
    pub registered: HashSet<TermIndex>,
    pub kinds: HashMap<TermIndex, TermKind>,
    pub types: HashMap<TermIndex, TypeKind>,
}

impl FakeTerms {
    /// A table of terms at indices `1..count`.
    pub fn new(count: TermIndex) -> Self {
        FakeTerms {
            count,
            roots: HashMap::default(),
            bindings: HashMap::default(),
            registered: HashSet::default(),
            kinds: HashMap::default(),
            types: HashMap::default(),
        }
    }

    pub fn bound(mut self, index: TermIndex, binding: Binding) -> Self {
        self.bindings.insert(index, binding);
        self
    }

    pub fn rooted(mut self, index: TermIndex, root: Term) -> Self {
        self.roots.insert(index, root);
        self
    }

    pub fn registered(mut self, index: TermIndex) -> Self {
        self.registered.insert(index);
        self
    }

    pub fn kinded(mut self, index: TermIndex, kind: TermKind) -> Self {
        self.kinds.insert(index, kind);
        self
    }

    pub fn typed(mut self, index: TermIndex, kind: TypeKind) -> Self {
        self.types.insert(index, kind);
        self
    }
}

impl TermTable for FakeTerms {
    fn term_count(&self) -> TermIndex {
        self.count
    }

    fn root_of(&self, term: Term) -> Term {
        let root = self
            .roots
            .get(&term.index())
            .copied()
            .unwrap_or_else(|| term.as_positive());
        match term.is_negated() {
            true => root.negate(),
            false => root,
        }
    }

    fn binding_of(&self, root: Term) -> Option<Binding> {
        self.bindings.get(&root.index()).copied()
    }

    fn is_registered(&self, term: Term) -> bool {
        self.registered.contains(&term.index())
            || self.bindings.contains_key(&term.index())
            || self.roots.contains_key(&term.index())
    }

    fn kind_of(&self, term: Term) -> TermKind {
        self.kinds
            .get(&term.index())
            .copied()
            .unwrap_or(TermKind::Uninterpreted)
    }

    fn type_of(&self, term: Term) -> TypeKind {
        self.types
            .get(&term.index())
            .copied()
            .unwrap_or(TypeKind::Bool)
    }
}

/// What was pushed into a [FakeEquality].
#[derive(Debug, Default)]
pub struct EqualityRecord {
    pub optimistic: Option<bool>,
    pub ackermann_max: Option<u32>,
    pub ackermann_disabled: bool,
    pub ackermann_threshold: Option<u16>,
    pub bool_ackermann_max: Option<u32>,
    pub bool_ackermann_disabled: bool,
    pub bool_ackermann_threshold: Option<u16>,
    pub aux_eq_quota: Option<u32>,
    pub max_interface_eqs: Option<u32>,
    pub builds: u32,
    pub releases: u32,
}

/// A scripted equality engine.
pub struct FakeEquality {
    pub record: Rc<RefCell<EqualityRecord>>,
    pub terms: u32,
    pub values: HashMap<ClassId, Value>,
    pub polarity: Option<bool>,
}

impl FakeEquality {
    pub fn new(terms: u32) -> Self {
        FakeEquality {
            record: Rc::default(),
            terms,
            values: HashMap::default(),
            polarity: None,
        }
    }

    pub fn valued(mut self, class: ClassId, value: Value) -> Self {
        self.values.insert(class, value);
        self
    }

    pub fn preferring(mut self, polarity: bool) -> Self {
        self.polarity = Some(polarity);
        self
    }
}

impl TheoryBranching for FakeEquality {
    fn preferred_polarity(&self, _atom: u32, literal: Literal) -> Literal {
        match self.polarity {
            Some(polarity) => literal.with_polarity(polarity),
            None => literal,
        }
    }
}

impl EqualityEngine for FakeEquality {
    fn enable_optimistic_final_check(&mut self) {
        self.record.borrow_mut().optimistic = Some(true);
    }

    fn disable_optimistic_final_check(&mut self) {
        self.record.borrow_mut().optimistic = Some(false);
    }

    fn enable_ackermann(&mut self, max: u32) {
        self.record.borrow_mut().ackermann_max = Some(max);
    }

    fn disable_ackermann(&mut self) {
        self.record.borrow_mut().ackermann_disabled = true;
    }

    fn set_ackermann_threshold(&mut self, threshold: u16) {
        self.record.borrow_mut().ackermann_threshold = Some(threshold);
    }

    fn enable_bool_ackermann(&mut self, max: u32) {
        self.record.borrow_mut().bool_ackermann_max = Some(max);
    }

    fn disable_bool_ackermann(&mut self) {
        self.record.borrow_mut().bool_ackermann_disabled = true;
    }

    fn set_bool_ackermann_threshold(&mut self, threshold: u16) {
        self.record.borrow_mut().bool_ackermann_threshold = Some(threshold);
    }

    fn set_aux_eq_quota(&mut self, quota: u32) {
        self.record.borrow_mut().aux_eq_quota = Some(quota);
    }

    fn set_max_interface_eqs(&mut self, max: u32) {
        self.record.borrow_mut().max_interface_eqs = Some(max);
    }

    fn term_count(&self) -> u32 {
        self.terms
    }

    fn build_values(&mut self) {
        self.record.borrow_mut().builds += 1;
    }

    fn release_values(&mut self) {
        self.record.borrow_mut().releases += 1;
    }

    fn value_of(&self, class: ClassId) -> Value {
        self.values.get(&class).cloned().unwrap_or(Value::Unknown)
    }
}

/// What was pushed into a [FakeArithmetic].
#[derive(Debug, Default)]
pub struct ArithmeticRecord {
    pub propagation: bool,
    pub propagation_threshold: Option<u32>,
    pub adjust_model: bool,
    pub bland_threshold: Option<u32>,
    pub integer_check: bool,
    pub integer_check_period: Option<u32>,
    pub builds: u32,
    pub releases: u32,
}

/// A scripted arithmetic engine.
pub struct FakeArithmetic {
    pub record: Rc<RefCell<ArithmeticRecord>>,
    pub values: HashMap<TheoryVar, BigRational>,
    pub polarity: Option<bool>,
}

impl FakeArithmetic {
    pub fn new() -> Self {
        FakeArithmetic {
            record: Rc::default(),
            values: HashMap::default(),
            polarity: None,
        }
    }

    pub fn valued(mut self, var: TheoryVar, value: BigRational) -> Self {
        self.values.insert(var, value);
        self
    }

    pub fn preferring(mut self, polarity: bool) -> Self {
        self.polarity = Some(polarity);
        self
    }
}

impl TheoryBranching for FakeArithmetic {
    fn preferred_polarity(&self, _atom: u32, literal: Literal) -> Literal {
        match self.polarity {
            Some(polarity) => literal.with_polarity(polarity),
            None => literal,
        }
    }
}

impl ArithmeticEngine for FakeArithmetic {
    fn enable_propagation(&mut self) {
        self.record.borrow_mut().propagation = true;
    }

    fn set_propagation_threshold(&mut self, max_row_size: u32) {
        self.record.borrow_mut().propagation_threshold = Some(max_row_size);
    }

    fn enable_adjust_model(&mut self) {
        self.record.borrow_mut().adjust_model = true;
    }

    fn set_bland_threshold(&mut self, threshold: u32) {
        self.record.borrow_mut().bland_threshold = Some(threshold);
    }

    fn enable_periodic_integer_check(&mut self) {
        self.record.borrow_mut().integer_check = true;
    }

    fn set_integer_check_period(&mut self, period: u32) {
        self.record.borrow_mut().integer_check_period = Some(period);
    }

    fn build_model(&mut self) {
        self.record.borrow_mut().builds += 1;
    }

    fn release_model(&mut self) {
        self.record.borrow_mut().releases += 1;
    }

    fn value_of(&self, var: TheoryVar) -> Option<BigRational> {
        self.values.get(&var).cloned()
    }
}

/// Build and release counts of a [FakeBitvector].
#[derive(Debug, Default)]
pub struct BitvectorRecord {
    pub builds: u32,
    pub releases: u32,
}

/// A scripted bitvector engine.
pub struct FakeBitvector {
    pub record: Rc<RefCell<BitvectorRecord>>,
    pub values: HashMap<TheoryVar, BvConstant>,
    pub polarity: Option<bool>,
}

impl FakeBitvector {
    pub fn new() -> Self {
        FakeBitvector {
            record: Rc::default(),
            values: HashMap::default(),
            polarity: None,
        }
    }

    pub fn valued(mut self, var: TheoryVar, value: BvConstant) -> Self {
        self.values.insert(var, value);
        self
    }

    pub fn preferring(mut self, polarity: bool) -> Self {
        self.polarity = Some(polarity);
        self
    }
}

impl TheoryBranching for FakeBitvector {
    fn preferred_polarity(&self, _atom: u32, literal: Literal) -> Literal {
        match self.polarity {
            Some(polarity) => literal.with_polarity(polarity),
            None => literal,
        }
    }
}

impl BitvectorEngine for FakeBitvector {
    fn build_model(&mut self) {
        self.record.borrow_mut().builds += 1;
    }

    fn release_model(&mut self) {
        self.record.borrow_mut().releases += 1;
    }

    fn value_of(&self, var: TheoryVar) -> Option<BvConstant> {
        self.values.get(&var).cloned()
    }
}

/// What was pushed into a [FakeFunctions].
#[derive(Debug, Default)]
pub struct FunctionRecord {
    pub max_update_conflicts: Option<u32>,
    pub max_extensionality: Option<u32>,
}

/// A scripted function engine.
pub struct FakeFunctions {
    pub record: Rc<RefCell<FunctionRecord>>,
    pub polarity: Option<bool>,
}

impl FakeFunctions {
    pub fn new() -> Self {
        FakeFunctions {
            record: Rc::default(),
            polarity: None,
        }
    }

    pub fn preferring(mut self, polarity: bool) -> Self {
        self.polarity = Some(polarity);
        self
    }
}

impl TheoryBranching for FakeFunctions {
    fn preferred_polarity(&self, _atom: u32, literal: Literal) -> Literal {
        match self.polarity {
            Some(polarity) => literal.with_polarity(polarity),
            None => literal,
        }
    }
}

impl FunctionEngine for FakeFunctions {
    fn set_max_update_conflicts(&mut self, max: u32) {
        self.record.borrow_mut().max_update_conflicts = Some(max);
    }

    fn set_max_extensionality(&mut self, max: u32) {
        self.record.borrow_mut().max_extensionality = Some(max);
    }
}

/// A context over scripted engines.
pub fn context_over(core: FakeCore, terms: FakeTerms) -> Context<FakeCore> {
    Context::new(core, Box::new(terms))
}
