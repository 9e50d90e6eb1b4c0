//! Lifecycle, clause input, solving, and the inspection of results.

use std::ffi::{c_char, c_int, c_void};

use crate::engine::{Engine, SolveOutcome, SIGNATURE};

use super::ipasir2_errorcode;

/// Writes the name and version of this library to `signature`.
///
/// The string is static, and remains valid until the process exits.
///
/// # Safety
/// `signature` must be a valid pointer to writable memory for a pointer.
#[no_mangle]
pub unsafe extern "C" fn ipasir2_signature(signature: *mut *const c_char) -> ipasir2_errorcode {
    std::ptr::write(signature, SIGNATURE.as_ptr() as *const c_char);

    ipasir2_errorcode::IPASIR2_E_OK
}

/// Writes a fresh solver handle to `solver`.
///
/// The handle is in its configuration state, and must eventually be passed to [ipasir2_release].
///
/// # Safety
/// `solver` must be a valid pointer to writable memory for a pointer.
#[no_mangle]
pub unsafe extern "C" fn ipasir2_init(solver: *mut *mut c_void) -> ipasir2_errorcode {
    let engine = Box::<Engine>::default();
    std::ptr::write(solver, Box::into_raw(engine) as *mut c_void);

    ipasir2_errorcode::IPASIR2_E_OK
}

/// Releases the given solver handle and everything it owns.
///
/// # Safety
/// `solver` must be a pointer obtained from [ipasir2_init] and not yet released, and must not be used again afterwards.
#[no_mangle]
pub unsafe extern "C" fn ipasir2_release(solver: *mut c_void) -> ipasir2_errorcode {
    drop(Box::from_raw(solver as *mut Engine));

    ipasir2_errorcode::IPASIR2_E_OK
}

/// Adds `len` literals as a clause to the solver, in DIMACS convention.
///
/// Variables are created on demand, and an empty clause is accepted.
/// `forgettable` declares whether the solver may drop the clause without harming correctness; the wrapped solver keeps every input clause, so the declaration is accepted and set aside.
///
/// # Safety
/// `solver` must be a pointer obtained from [ipasir2_init] and not yet released.
/// When `len` is positive, `clause` must point to `len` readable literals.
#[allow(unused_variables)]
#[no_mangle]
pub unsafe extern "C" fn ipasir2_add(
    solver: *mut c_void,
    clause: *const i32,
    len: i32,
    forgettable: c_int,
) -> ipasir2_errorcode {
    let engine = &mut *(solver as *mut Engine);

    if 0 < len {
        for literal in std::slice::from_raw_parts(clause, len as usize) {
            engine.add_literal(*literal);
        }
    }
    engine.add_literal(0);

    ipasir2_errorcode::IPASIR2_E_OK
}

/// Solves the formula under `len` assumed literals, writing `10`, `20`, or `0` to `result`.
///
/// `10` is satisfiable, `20` unsatisfiable, and `0` an indeterminate solve, cut short by a limit or the terminate callback.
/// All three travel through `result`; the returned status concerns the call itself, and is `IPASIR2_E_OK` in each case.
/// The assumptions hold for this solve only.
///
/// # Safety
/// `solver` must be a pointer obtained from [ipasir2_init] and not yet released.
/// `result` must be a valid pointer to writable memory for an int.
/// When `len` is positive, `literals` must point to `len` readable literals.
#[no_mangle]
pub unsafe extern "C" fn ipasir2_solve(
    solver: *mut c_void,
    result: *mut c_int,
    literals: *const i32,
    len: i32,
) -> ipasir2_errorcode {
    let engine = &mut *(solver as *mut Engine);

    if 0 < len {
        for literal in std::slice::from_raw_parts(literals, len as usize) {
            engine.assume(*literal);
        }
    }

    let outcome = match engine.solve() {
        SolveOutcome::Satisfiable => 10,
        SolveOutcome::Unsatisfiable => 20,
        SolveOutcome::Unknown => 0,
    };
    std::ptr::write(result, outcome);

    ipasir2_errorcode::IPASIR2_E_OK
}

/// Writes the value of `lit` on the model of the last solve to `result`.
///
/// The value is `lit` when true, `-lit` when false, and `0` when unassigned.
/// Meaningful only directly after a satisfiable solve.
///
/// # Safety
/// `solver` must be a pointer obtained from [ipasir2_init] and not yet released.
/// `result` must be a valid pointer to writable memory for a literal.
#[no_mangle]
pub unsafe extern "C" fn ipasir2_val(
    solver: *mut c_void,
    lit: i32,
    result: *mut i32,
) -> ipasir2_errorcode {
    let engine = &*(solver as *mut Engine);
    std::ptr::write(result, engine.value(lit));

    ipasir2_errorcode::IPASIR2_E_OK
}

/// Writes whether `lit` was used to conclude unsatisfiability to `result`, `1` for used and `0` otherwise.
///
/// Meaningful only directly after an unsatisfiable solve under assumptions including `lit`.
///
/// # Safety
/// `solver` must be a pointer obtained from [ipasir2_init] and not yet released.
/// `result` must be a valid pointer to writable memory for an int.
#[no_mangle]
pub unsafe extern "C" fn ipasir2_failed(
    solver: *mut c_void,
    lit: i32,
    result: *mut c_int,
) -> ipasir2_errorcode {
    let engine = &*(solver as *mut Engine);
    std::ptr::write(result, c_int::from(engine.failed(lit)));

    ipasir2_errorcode::IPASIR2_E_OK
}
