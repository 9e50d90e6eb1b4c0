//! Installation of caller hooks: termination, clause export, and the unsupported pair.

use std::ffi::{c_int, c_void};

use crate::engine::Engine;

use super::ipasir2_errorcode;

/// Installs `callback` as the termination predicate of the solver, or removes the predicate when `callback` is null.
///
/// The callback is polled during solves with `data` as its argument; a non-zero return ends the solve with an indeterminate result.
///
/// # Safety
/// `solver` must be a pointer obtained from [ipasir2_init](super::basic::ipasir2_init) and not yet released.
/// `callback`, when non-null, must remain sound to call with `data` for as long as it is installed.
#[no_mangle]
pub unsafe extern "C" fn ipasir2_set_terminate(
    solver: *mut c_void,
    data: *mut c_void,
    callback: Option<extern "C" fn(data: *mut c_void) -> c_int>,
) -> ipasir2_errorcode {
    let engine = &mut *(solver as *mut Engine);

    match callback {
        Some(callback) => engine.set_terminate(move || callback(data) != 0),
        None => engine.clear_terminate(),
    }

    ipasir2_errorcode::IPASIR2_E_OK
}

/// Installs `callback` as the sink for learnt clauses of at most `max_length` literals, or removes the sink when `callback` is null.
///
/// The callback receives `data` and a zero-terminated clause in DIMACS convention; the clause pointer is valid only for the duration of the call.
/// A negative `max_length` would request the unrestricted export the underlying solver reserves for itself, and is refused before anything is installed.
///
/// # Safety
/// `solver` must be a pointer obtained from [ipasir2_init](super::basic::ipasir2_init) and not yet released.
/// `callback`, when non-null, must remain sound to call with `data` for as long as it is installed.
#[no_mangle]
pub unsafe extern "C" fn ipasir2_set_export(
    solver: *mut c_void,
    data: *mut c_void,
    max_length: c_int,
    callback: Option<extern "C" fn(data: *mut c_void, clause: *const i32)>,
) -> ipasir2_errorcode {
    if max_length < 0 {
        return ipasir2_errorcode::IPASIR2_E_UNSUPPORTED_ARGUMENT;
    }

    let engine = &mut *(solver as *mut Engine);

    match callback {
        Some(callback) => {
            engine.set_learn(max_length as usize, move |clause| {
                callback(data, clause.as_ptr())
            });
        }
        None => engine.clear_learn(),
    }

    ipasir2_errorcode::IPASIR2_E_OK
}

/// Clause import is not supported; the call reports `IPASIR2_E_UNSUPPORTED` and installs nothing.
///
/// The wrapped solver offers no point at which a foreign clause could be taken up mid-search.
///
/// # Safety
/// Sound to call with any arguments, as none is read.
#[allow(unused_variables)]
#[no_mangle]
pub unsafe extern "C" fn ipasir2_set_import(
    solver: *mut c_void,
    data: *mut c_void,
    callback: Option<extern "C" fn(data: *mut c_void)>,
) -> ipasir2_errorcode {
    ipasir2_errorcode::IPASIR2_E_UNSUPPORTED
}

/// Notification of fixed assignments is not supported; the call reports `IPASIR2_E_UNSUPPORTED` and installs nothing.
///
/// The wrapped solver does not announce root-level assignments as they happen.
///
/// # Safety
/// Sound to call with any arguments, as none is read.
#[allow(unused_variables)]
#[no_mangle]
pub unsafe extern "C" fn ipasir2_set_fixed(
    solver: *mut c_void,
    data: *mut c_void,
    callback: Option<extern "C" fn(data: *mut c_void, fixed: i32)>,
) -> ipasir2_errorcode {
    ipasir2_errorcode::IPASIR2_E_UNSUPPORTED
}
