//! The callback structure handed to batsat.
//!
//! batsat surfaces events through a [Callbacks] implementation owned by the solver.
//! [EngineCallbacks] is that implementation, and is where the caller-facing hooks of the C API come to rest:
//! - The terminate predicate, consulted whenever batsat polls [stop](Callbacks::stop).
//! - The learnt-clause sink, fed from [on_new_clause](Callbacks::on_new_clause).
//! - The named search limits, also enforced through the stop poll.
//!
//! batsat reports learnt clauses and polls `stop` once per conflict, but does not report decisions.
//! The decision limit is therefore applied against the conflict count, the nearest progress measure available through the callback interface.

use batsat::{Callbacks, ClauseKind, Lit};

/// Runtime limits on a solve, `-1` for unlimited.
#[derive(Clone, Copy, Debug)]
pub struct SearchLimits {
    pub decisions: i64,
    pub conflicts: i64,
}

impl Default for SearchLimits {
    fn default() -> Self {
        SearchLimits {
            decisions: -1,
            conflicts: -1,
        }
    }
}

/// A sink for learnt clauses, installed via the export callback.
pub struct Learn {
    /// Clauses longer than this are not reported.
    pub max_length: usize,

    /// Receives each reported clause as zero-terminated DIMACS literals.
    pub sink: Box<dyn FnMut(&[i32])>,
}

/// Hooks and counters batsat consults during a solve.
pub struct EngineCallbacks {
    /// The caller's termination predicate, if any.
    pub terminate: Option<Box<dyn Fn() -> bool>>,

    /// The caller's learnt-clause sink, if any.
    pub learn: Option<Learn>,

    /// Limits applied to the current and every later solve.
    pub limits: SearchLimits,

    /// Conflicts seen during the current solve.
    conflicts: u64,

    /// Scratch space for zero-terminated clause reports.
    buf: Vec<i32>,
}

impl Default for EngineCallbacks {
    fn default() -> Self {
        EngineCallbacks {
            terminate: None,
            learn: None,
            limits: SearchLimits::default(),
            conflicts: 0,
            buf: Vec::default(),
        }
    }
}

/// The DIMACS representation of a batsat literal.
#[inline]
fn dimacs(lit: Lit) -> i32 {
    let var = lit.var().idx() as i32 + 1;
    if lit.sign() {
        var
    } else {
        -var
    }
}

impl Callbacks for EngineCallbacks {
    fn on_start(&mut self) {
        self.conflicts = 0;
    }

    fn on_new_clause(&mut self, clause: &[Lit], kind: ClauseKind) {
        match kind {
            ClauseKind::Learnt => {}
            _ => return,
        }

        self.conflicts += 1;

        if let Some(learn) = &mut self.learn {
            if clause.len() <= learn.max_length {
                self.buf.clear();
                self.buf.extend(clause.iter().copied().map(dimacs));
                self.buf.push(0);
                (learn.sink)(&self.buf);
            }
        }
    }

    fn stop(&self) -> bool {
        if self.limits.conflicts >= 0 && self.conflicts > self.limits.conflicts as u64 {
            return true;
        }

        if self.limits.decisions >= 0 && self.conflicts > self.limits.decisions as u64 {
            return true;
        }

        match &self.terminate {
            Some(predicate) => predicate(),
            None => false,
        }
    }
}
