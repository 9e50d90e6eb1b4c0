use batsat_ipasir2::engine::{Engine, SolveOutcome};
use batsat_ipasir2::types::err::OptionError;

/// Adds the clauses of the pigeonhole principle: no injection from `pigeons` into `holes`.
///
/// Unsatisfiable whenever `holes < pigeons`, and only after a decent amount of search.
fn pigeonhole(engine: &mut Engine, pigeons: i32, holes: i32) {
    let var = |p: i32, h: i32| p * holes + h + 1;

    for p in 0..pigeons {
        for h in 0..holes {
            engine.add_literal(var(p, h));
        }
        engine.add_literal(0);
    }

    for h in 0..holes {
        for p in 0..pigeons {
            for q in (p + 1)..pigeons {
                engine.add_literal(-var(p, h));
                engine.add_literal(-var(q, h));
                engine.add_literal(0);
            }
        }
    }
}

mod basic {
    use super::*;

    #[test]
    fn an_empty_formula_is_satisfiable() {
        let mut engine = Engine::new();

        assert_eq!(engine.solve(), SolveOutcome::Satisfiable);
    }

    #[test]
    fn a_contradiction_is_unsatisfiable() {
        let mut engine = Engine::new();

        for lit in [1, -2, 3, 0, -1, 0, 2, 0, -3, 0] {
            engine.add_literal(lit);
        }

        assert_eq!(engine.solve(), SolveOutcome::Unsatisfiable);
    }

    #[test]
    fn values_follow_the_model() {
        let mut engine = Engine::new();

        for lit in [1, 0, -2, 0] {
            engine.add_literal(lit);
        }

        assert_eq!(engine.solve(), SolveOutcome::Satisfiable);

        assert_eq!(engine.value(1), 1);
        assert_eq!(engine.value(2), -2);

        // A variable the formula never mentions.
        assert_eq!(engine.value(7), 0);
    }

    #[test]
    fn values_before_any_solve_are_unassigned() {
        let engine = Engine::new();

        assert_eq!(engine.value(1), 0);
        assert_eq!(engine.value(0), 0);
    }

    #[test]
    fn clauses_accumulate_across_solves() {
        let mut engine = Engine::new();

        for lit in [1, 2, 0] {
            engine.add_literal(lit);
        }
        assert_eq!(engine.solve(), SolveOutcome::Satisfiable);

        for lit in [-1, 0, -2, 0] {
            engine.add_literal(lit);
        }
        assert_eq!(engine.solve(), SolveOutcome::Unsatisfiable);
    }

    #[test]
    fn pigeons_outnumber_holes() {
        let mut engine = Engine::new();

        pigeonhole(&mut engine, 4, 3);

        assert_eq!(engine.solve(), SolveOutcome::Unsatisfiable);
    }
}

mod assumptions {
    use super::*;

    #[test]
    fn a_failed_assumption_is_reported() {
        let mut engine = Engine::new();

        for lit in [-1, 2, 0, -2, 0] {
            engine.add_literal(lit);
        }

        engine.assume(1);
        assert_eq!(engine.solve(), SolveOutcome::Unsatisfiable);
        assert!(engine.failed(1));
    }

    #[test]
    fn assumptions_hold_for_one_solve_only() {
        let mut engine = Engine::new();

        for lit in [1, 2, 0] {
            engine.add_literal(lit);
        }

        engine.assume(-1);
        engine.assume(-2);
        assert_eq!(engine.solve(), SolveOutcome::Unsatisfiable);

        assert_eq!(engine.solve(), SolveOutcome::Satisfiable);
    }
}

mod options {
    use super::*;

    #[test]
    fn staged_options_are_accepted() {
        let mut engine = Engine::new();

        assert!(engine.set_option("var-decay", 950).is_ok());
        assert!(engine.set_option("luby", 0).is_ok());

        for lit in [1, 2, 0] {
            engine.add_literal(lit);
        }
        assert_eq!(engine.solve(), SolveOutcome::Satisfiable);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let mut engine = Engine::new();

        assert_eq!(
            engine.set_option("var-decay", 0),
            Err(OptionError::OutOfRange)
        );
        assert_eq!(
            engine.set_option("var-decay", 1000),
            Err(OptionError::OutOfRange)
        );
    }

    #[test]
    fn unknown_names_are_rejected() {
        let mut engine = Engine::new();

        assert_eq!(
            engine.set_option("decaf", 1),
            Err(OptionError::UnknownOption)
        );
    }

    #[test]
    fn options_fix_once_solving_structures_exist() {
        let mut engine = Engine::new();

        engine.add_literal(1);
        engine.add_literal(0);

        assert_eq!(engine.set_option("var-decay", 950), Err(OptionError::Fixed));
    }
}

mod limits {
    use super::*;

    #[test]
    fn a_conflict_limit_interrupts_the_solve() {
        let mut engine = Engine::new();

        engine.limit("conflicts", 0);
        pigeonhole(&mut engine, 4, 3);

        assert_eq!(engine.solve(), SolveOutcome::Unknown);

        engine.limit("conflicts", -1);
        assert_eq!(engine.solve(), SolveOutcome::Unsatisfiable);
    }

    #[test]
    fn a_decision_limit_interrupts_the_solve() {
        let mut engine = Engine::new();

        engine.limit("decisions", 0);
        pigeonhole(&mut engine, 4, 3);

        assert_eq!(engine.solve(), SolveOutcome::Unknown);

        engine.limit("decisions", -1);
        assert_eq!(engine.solve(), SolveOutcome::Unsatisfiable);
    }
}

mod hooks {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[test]
    fn a_true_terminate_predicate_interrupts_the_solve() {
        let mut engine = Engine::new();

        let flag = Arc::new(AtomicBool::new(true));
        let probe = flag.clone();
        engine.set_terminate(move || probe.load(Ordering::Relaxed));

        for lit in [1, 2, 0] {
            engine.add_literal(lit);
        }
        assert_eq!(engine.solve(), SolveOutcome::Unknown);

        flag.store(false, Ordering::Relaxed);
        assert_eq!(engine.solve(), SolveOutcome::Satisfiable);
    }

    #[test]
    fn a_cleared_terminate_predicate_is_not_polled() {
        let mut engine = Engine::new();

        engine.set_terminate(|| true);
        engine.clear_terminate();

        for lit in [1, 2, 0] {
            engine.add_literal(lit);
        }
        assert_eq!(engine.solve(), SolveOutcome::Satisfiable);
    }

    #[test]
    fn the_learnt_clause_sink_sees_zero_terminated_clauses() {
        let reported: std::rc::Rc<std::cell::RefCell<Vec<Vec<i32>>>> = Default::default();
        let stash = reported.clone();

        let mut engine = Engine::new();
        engine.set_learn(8, move |clause| stash.borrow_mut().push(clause.to_vec()));

        pigeonhole(&mut engine, 4, 3);
        assert_eq!(engine.solve(), SolveOutcome::Unsatisfiable);

        let reported = reported.borrow();
        assert!(!reported.is_empty());

        for clause in reported.iter() {
            assert_eq!(clause.last(), Some(&0));

            let literals = &clause[..clause.len() - 1];
            assert!(literals.len() <= 8);
            assert!(literals.iter().all(|lit| *lit != 0 && lit.unsigned_abs() <= 12));
        }
    }
}
