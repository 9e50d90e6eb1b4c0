//! The registry of runtime-configurable solver options.
//!
//! This is the shim's stand-in for a configuration registry inside the wrapped solver.
//! batsat collects its knobs in a plain [SolverOpts] structure with no name/range metadata attached, so the metadata lives here: one [Tunable] per knob, carrying the name, the permitted integer range, and a setter which writes the (possibly rescaled) value into a [SolverOpts].
//!
//! Names follow the MiniSat option vocabulary, which batsat inherits.
//!
//! # Value scaling
//!
//! IPASIR2 option values are integers, while several batsat knobs are fractions of unity.
//! Fractional knobs are registered with per-mille (or percent) ranges and the setter divides accordingly.
//! Every registered range lands inside what [SolverOpts::check] accepts, so an in-range set can never produce an invalid configuration.

use batsat::SolverOpts;

/// A single runtime-configurable option of the wrapped solver.
pub struct Tunable {
    /// Unique option name.
    pub name: &'static str,

    /// Minimum permitted value.
    pub min: i64,

    /// Maximum permitted value.
    pub max: i64,

    /// Whether the option is eligible for use by automatic tuners.
    pub tunable: bool,

    /// Writes `value` into the given options structure.
    pub apply: fn(&mut SolverOpts, i64),
}

/// Every knob of [SolverOpts], in MiniSat's option vocabulary.
pub static TUNABLES: [Tunable; 12] = [
    Tunable {
        name: "var-decay",
        min: 1,
        max: 999,
        tunable: true,
        apply: |o, v| o.var_decay = v as f64 / 1000.0,
    },
    Tunable {
        name: "cla-decay",
        min: 1,
        max: 999,
        tunable: true,
        apply: |o, v| o.clause_decay = v as f64 / 1000.0,
    },
    Tunable {
        name: "rnd-freq",
        min: 0,
        max: 100,
        tunable: true,
        apply: |o, v| o.random_var_freq = v as f64 / 100.0,
    },
    Tunable {
        name: "rnd-seed",
        min: 1,
        max: i32::MAX as i64,
        tunable: false,
        apply: |o, v| o.random_seed = v as f64,
    },
    Tunable {
        name: "ccmin-mode",
        min: 0,
        max: 2,
        tunable: true,
        apply: |o, v| o.ccmin_mode = v as i32,
    },
    Tunable {
        name: "phase-saving",
        min: 0,
        max: 2,
        tunable: true,
        apply: |o, v| o.phase_saving = v as i32,
    },
    Tunable {
        name: "rnd-init",
        min: 0,
        max: 1,
        tunable: true,
        apply: |o, v| o.rnd_init_act = v != 0,
    },
    Tunable {
        name: "luby",
        min: 0,
        max: 1,
        tunable: true,
        apply: |o, v| o.luby_restart = v != 0,
    },
    Tunable {
        name: "rfirst",
        min: 1,
        max: i32::MAX as i64,
        tunable: true,
        apply: |o, v| o.restart_first = v as i32,
    },
    // restart_inc must exceed one, hence the floor of 1001 per-mille.
    Tunable {
        name: "rinc",
        min: 1001,
        max: 100_000,
        tunable: true,
        apply: |o, v| o.restart_inc = v as f64 / 1000.0,
    },
    Tunable {
        name: "gc-frac",
        min: 1,
        max: 1000,
        tunable: true,
        apply: |o, v| o.garbage_frac = v as f64 / 1000.0,
    },
    Tunable {
        name: "min-learnts",
        min: 0,
        max: i32::MAX as i64,
        tunable: true,
        apply: |o, v| o.min_learnts_lim = v as i32,
    },
];

/// The registry entry for `name`, if any.
pub fn find(name: &str) -> Option<&'static Tunable> {
    TUNABLES.iter().find(|t| t.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique() {
        for (i, a) in TUNABLES.iter().enumerate() {
            for b in &TUNABLES[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn ranges_are_ordered() {
        for t in &TUNABLES {
            assert!(t.min <= t.max, "{} has an inverted range", t.name);
        }
    }

    #[test]
    fn extremes_keep_options_valid() {
        for t in &TUNABLES {
            for value in [t.min, t.max] {
                let mut opts = SolverOpts::default();
                (t.apply)(&mut opts, value);
                assert!(opts.check(), "{} = {} fails the solver's check", t.name, value);
            }
        }
    }

    #[test]
    fn lookup() {
        assert!(find("var-decay").is_some());
        assert!(find("decaf").is_none());
    }
}
