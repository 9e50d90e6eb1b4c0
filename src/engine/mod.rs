//! The wrapped solver.
//!
//! An [Engine] bundles a batsat solver with the handful of structures the IPASIR2 surface needs and batsat has no use for:
//! a map from external variables to batsat variables, a buffer for the clause currently being streamed in, the queued assumptions, and the caller's hooks.
//!
//! The batsat solver itself is instantiated lazily, on the first call that requires one.
//! Up to that point the engine is in its configuration stage: values set through [set_option](Engine::set_option) accumulate in a staged [SolverOpts] and are consumed by the instantiation.
//! Afterwards the options are fixed --- batsat takes its configuration at construction --- which is why the option descriptors exported over the C API advertise the configuration stage as the last state in which they may be set.
//!
//! External variable `n` is the `n`-th variable allocated from batsat, allocated on demand.
//! Adding a clause containing the largest literal first is therefore marginally cheaper, though nothing relies on it.

pub mod tunables;

mod callbacks;
pub use callbacks::{EngineCallbacks, Learn, SearchLimits};

use batsat::{lbool, Lit, Solver, SolverInterface, SolverOpts, Var};

use crate::types::err::OptionError;

/// The identification string reported over the C API, explicitly zero-terminated.
pub static SIGNATURE: &str = concat!("batsat-ipasir2-", env!("CARGO_PKG_VERSION"), "\0");

/// The three-valued outcome of a solve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolveOutcome {
    Satisfiable,
    Unsatisfiable,
    /// The solve was interrupted, by the terminate predicate or a limit.
    Unknown,
}

/// One instance of the wrapped solver, together with its marshalling buffers.
pub struct Engine {
    /// Options staged during the configuration stage, consumed on instantiation.
    staged: Option<SolverOpts>,

    /// Hooks installed before the solver exists, moved into it on instantiation.
    pending: EngineCallbacks,

    /// The batsat solver, absent until first required.
    solver: Option<Solver<EngineCallbacks>>,

    /// `vars[n - 1]` is the batsat variable of external variable `n`.
    vars: Vec<Var>,

    /// The clause currently being streamed in, literal by literal.
    clause: Vec<Lit>,

    /// Assumptions queued for the next solve.
    assumptions: Vec<Lit>,
}

impl Default for Engine {
    fn default() -> Self {
        Engine {
            staged: None,
            pending: EngineCallbacks::default(),
            solver: None,
            vars: Vec::default(),
            clause: Vec::default(),
            assumptions: Vec::default(),
        }
    }
}

impl Engine {
    /// A fresh engine, in its configuration stage.
    pub fn new() -> Self {
        Engine::default()
    }

    /// Instantiates the batsat solver if required, consuming the staged configuration.
    fn ensure_solver(&mut self) {
        if self.solver.is_none() {
            let opts = self.staged.take().unwrap_or_default();
            let hooks = std::mem::take(&mut self.pending);
            log::trace!("instantiating the batsat solver");
            self.solver = Some(Solver::new(opts, hooks));
        }
    }

    /// The hooks batsat consults, wherever they currently live.
    fn callbacks_mut(&mut self) -> &mut EngineCallbacks {
        match &mut self.solver {
            Some(solver) => solver.cb_mut(),
            None => &mut self.pending,
        }
    }

    /// The batsat literal of a non-zero DIMACS literal, allocating variables as needed.
    fn internal_lit(&mut self, lit: i32) -> Lit {
        debug_assert!(lit != 0);

        self.ensure_solver();
        let solver = self.solver.as_mut().unwrap();

        let n = lit.unsigned_abs() as usize;
        while self.vars.len() < n {
            self.vars.push(solver.new_var_default());
        }

        Lit::new(self.vars[n - 1], lit > 0)
    }

    /// Streams one literal of a clause, or commits the buffered clause on zero.
    ///
    /// Literals are not validated; duplicate, contradictory, and out-of-range literals are the solver's concern.
    pub fn add_literal(&mut self, lit_or_zero: i32) {
        match lit_or_zero {
            0 => {
                self.ensure_solver();
                let solver = self.solver.as_mut().unwrap();
                if !solver.add_clause_reuse(&mut self.clause) {
                    log::trace!("the formula is unsatisfiable at level zero");
                }
                self.clause.clear();
            }

            lit => {
                let lit = self.internal_lit(lit);
                self.clause.push(lit);
            }
        }
    }

    /// Queues an assumption for the next solve.
    pub fn assume(&mut self, lit: i32) {
        debug_assert!(lit != 0);
        let lit = self.internal_lit(lit);
        self.assumptions.push(lit);
    }

    /// Solves under the queued assumptions, and drops them.
    pub fn solve(&mut self) -> SolveOutcome {
        self.ensure_solver();
        let solver = self.solver.as_mut().unwrap();

        let result = solver.solve_limited(&self.assumptions);
        self.assumptions.clear();

        if result == lbool::TRUE {
            SolveOutcome::Satisfiable
        } else if result == lbool::FALSE {
            SolveOutcome::Unsatisfiable
        } else {
            SolveOutcome::Unknown
        }
    }

    /// The value of `lit` on the model of the last solve: `lit`, `-lit`, or `0` when unassigned.
    ///
    /// Meaningful only directly after a satisfiable solve, though safe to call at any point.
    pub fn value(&self, lit: i32) -> i32 {
        let Some(solver) = &self.solver else {
            return 0;
        };

        let n = lit.unsigned_abs() as usize;
        if n == 0 || n > self.vars.len() {
            return 0;
        }

        let value = solver.value_lit(Lit::new(self.vars[n - 1], lit > 0));
        if value == lbool::TRUE {
            lit
        } else if value == lbool::FALSE {
            -lit
        } else {
            0
        }
    }

    /// Whether the variable of `lit` appears in the failed assumptions of the last solve.
    ///
    /// Meaningful only directly after an unsatisfiable solve, though safe to call at any point.
    pub fn failed(&self, lit: i32) -> bool {
        let Some(solver) = &self.solver else {
            return false;
        };

        let n = lit.unsigned_abs() as usize;
        if n == 0 || n > self.vars.len() {
            return false;
        }

        solver.unsat_core_contains_var(self.vars[n - 1])
    }

    /// Stages `value` for the named option.
    ///
    /// Staged values take effect when the solver is instantiated; afterwards the configuration is fixed.
    pub fn set_option(&mut self, name: &str, value: i64) -> Result<(), OptionError> {
        let tunable = tunables::find(name).ok_or(OptionError::UnknownOption)?;

        if value < tunable.min || value > tunable.max {
            return Err(OptionError::OutOfRange);
        }

        if self.solver.is_some() {
            return Err(OptionError::Fixed);
        }

        let opts = self.staged.get_or_insert_with(SolverOpts::default);
        (tunable.apply)(opts, value);
        log::debug!("staged option {} = {}", name, value);

        Ok(())
    }

    /// Sets a named search limit, `-1` for unlimited. Unknown names are ignored.
    ///
    /// Known limits are `"decisions"` and `"conflicts"`, each enforced at conflict granularity as batsat polls its callbacks once per conflict.
    pub fn limit(&mut self, name: &str, value: i64) {
        let limits = &mut self.callbacks_mut().limits;

        match name {
            "decisions" => limits.decisions = value,
            "conflicts" => limits.conflicts = value,
            _ => {
                log::debug!("ignoring unknown limit {}", name);
                return;
            }
        }

        log::debug!("limit {} = {}", name, value);
    }

    /// Installs a predicate polled during solves; a true return requests termination.
    pub fn set_terminate(&mut self, predicate: impl Fn() -> bool + 'static) {
        self.callbacks_mut().terminate = Some(Box::new(predicate));
    }

    /// Removes any installed terminate predicate.
    pub fn clear_terminate(&mut self) {
        self.callbacks_mut().terminate = None;
    }

    /// Installs a sink for learnt clauses of length at most `max_length`.
    ///
    /// The sink receives each clause as zero-terminated DIMACS literals, valid for the duration of the call.
    pub fn set_learn(&mut self, max_length: usize, sink: impl FnMut(&[i32]) + 'static) {
        self.callbacks_mut().learn = Some(Learn {
            max_length,
            sink: Box::new(sink),
        });
    }

    /// Removes any installed learnt-clause sink.
    pub fn clear_learn(&mut self) {
        self.callbacks_mut().learn = None;
    }
}
