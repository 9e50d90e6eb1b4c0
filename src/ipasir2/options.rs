//! The exported option descriptor table, and the handlers which consume its entries.
//!
//! The table is assembled once, on the first call to [ipasir2_options] or [ipasir2_get_option_handle], and lives for the remainder of the process.
//! Repeated calls return pointers into the same allocation, so a caller may cache either the table or individual descriptors.
//!
//! Two kinds of entry appear:
//! - The search limits, under the standard `ipasir.limits.*` names, settable up to the input state.
//! - The knobs of the [tunable registry](crate::engine::tunables), settable only during configuration.
//!
//! Each descriptor's `handle` points to the [Setter] which knows how to route a value for that descriptor into an engine.
//! [ipasir2_set_option] does nothing but validate the value against the descriptor's range and delegate to the setter.

use std::ffi::{c_char, c_void, CStr, CString};
use std::sync::OnceLock;

use crate::engine::tunables::{Tunable, TUNABLES};
use crate::engine::Engine;

use super::{ipasir2_errorcode, ipasir2_option, ipasir2_state};

/// Routes a validated option value into an engine.
enum Setter {
    /// A named search limit.
    Limit(&'static str),

    /// A knob from the tunable registry.
    Knob(&'static Tunable),
}

impl Setter {
    fn apply(&self, engine: &mut Engine, value: i64) {
        match self {
            Self::Limit(name) => engine.limit(name, value),

            Self::Knob(tunable) => {
                // Failure to take a value the caller was told is in range is the
                // engine's own concern, and is logged rather than surfaced.
                if let Err(err) = engine.set_option(tunable.name, value) {
                    log::warn!("option {} = {} dropped: {err}", tunable.name, value);
                }
            }
        }
    }
}

/// The descriptor table together with the allocations its pointers refer to.
struct OptionTable {
    /// The option names, as zero-terminated strings.
    names: Vec<CString>,

    /// The setter of each option, addressed only through descriptor handles.
    #[allow(dead_code)]
    setters: Vec<Setter>,

    /// The exported descriptors, closed by a sentinel with a null name.
    entries: Vec<ipasir2_option>,
}

// The entries hold pointers into names and setters.
// All three vectors are frozen after construction, and the pointed-to allocations do not move with the table.
unsafe impl Send for OptionTable {}
unsafe impl Sync for OptionTable {}

static OPTIONS: OnceLock<OptionTable> = OnceLock::new();

const LIMIT_MIN: i64 = -1;
const LIMIT_MAX: i64 = i32::MAX as i64;

fn build_table() -> OptionTable {
    let mut names = Vec::default();
    let mut setters = Vec::default();

    for limit in ["decisions", "conflicts"] {
        // The names contain no interior zero bytes.
        if let Ok(name) = CString::new(format!("ipasir.limits.{limit}")) {
            names.push(name);
            setters.push(Setter::Limit(limit));
        }
    }

    for tunable in TUNABLES.iter().filter(|tunable| tunable.tunable) {
        if let Ok(name) = CString::new(tunable.name) {
            names.push(name);
            setters.push(Setter::Knob(tunable));
        }
    }

    let mut entries = Vec::with_capacity(names.len() + 1);
    for (name, setter) in names.iter().zip(&setters) {
        let (min, max, max_state, tunable) = match setter {
            Setter::Limit(_) => (LIMIT_MIN, LIMIT_MAX, ipasir2_state::IPASIR2_S_INPUT, 0),
            Setter::Knob(t) => (t.min, t.max, ipasir2_state::IPASIR2_S_CONFIG, 1),
        };

        entries.push(ipasir2_option {
            name: name.as_ptr(),
            min,
            max,
            max_state,
            tunable,
            indexed: 0,
            handle: setter as *const Setter as *const c_void,
        });
    }

    entries.push(ipasir2_option {
        name: std::ptr::null(),
        min: 0,
        max: 0,
        max_state: ipasir2_state::IPASIR2_S_CONFIG,
        tunable: 0,
        indexed: 0,
        handle: std::ptr::null(),
    });

    OptionTable {
        names,
        setters,
        entries,
    }
}

fn table() -> &'static OptionTable {
    OPTIONS.get_or_init(build_table)
}

/// Writes a pointer to the option descriptor table to `result`.
///
/// The table is terminated by a descriptor with a null name, is shared by every solver in the process, and remains valid until the process exits.
///
/// # Safety
/// `result` must be a valid pointer to writable memory for a pointer.
#[allow(unused_variables)]
#[no_mangle]
pub unsafe extern "C" fn ipasir2_options(
    solver: *mut c_void,
    result: *mut *const ipasir2_option,
) -> ipasir2_errorcode {
    std::ptr::write(result, table().entries.as_ptr());

    ipasir2_errorcode::IPASIR2_E_OK
}

/// Sets the option described by `option` to `value` on the given solver.
///
/// The value must lie within the descriptor's declared range, and the descriptor must come from this library's table.
/// The declared `max_state` of the descriptor is not checked, and `index` is ignored as no exported option is indexed.
///
/// # Safety
/// `solver` must be a pointer obtained from [ipasir2_init](super::basic::ipasir2_init) and not yet released.
/// `option`, when non-null, must point into the table written by [ipasir2_options].
#[allow(unused_variables)]
#[no_mangle]
pub unsafe extern "C" fn ipasir2_set_option(
    solver: *mut c_void,
    option: *const ipasir2_option,
    value: i64,
    index: i64,
) -> ipasir2_errorcode {
    if option.is_null() {
        return ipasir2_errorcode::IPASIR2_E_INVALID_ARGUMENT;
    }
    let option = &*option;

    if option.handle.is_null() {
        // The sentinel, or a descriptor from elsewhere.
        return ipasir2_errorcode::IPASIR2_E_INVALID_ARGUMENT;
    }

    if value < option.min || option.max < value {
        return ipasir2_errorcode::IPASIR2_E_INVALID_ARGUMENT;
    }

    let engine = &mut *(solver as *mut Engine);
    let setter = &*(option.handle as *const Setter);
    setter.apply(engine, value);

    ipasir2_errorcode::IPASIR2_E_OK
}

/// Writes the descriptor named `name` to `handle`, or reports `IPASIR2_E_UNSUPPORTED_OPTION` when no such option exists.
///
/// # Safety
/// `name` must be null or a valid zero-terminated string.
/// `handle` must be a valid pointer to writable memory for a pointer.
#[allow(unused_variables)]
#[no_mangle]
pub unsafe extern "C" fn ipasir2_get_option_handle(
    solver: *mut c_void,
    name: *const c_char,
    handle: *mut *const ipasir2_option,
) -> ipasir2_errorcode {
    if name.is_null() {
        return ipasir2_errorcode::IPASIR2_E_INVALID_ARGUMENT;
    }
    let name = CStr::from_ptr(name);

    let table = table();
    for (index, known) in table.names.iter().enumerate() {
        if known.as_c_str() == name {
            std::ptr::write(handle, &table.entries[index]);
            return ipasir2_errorcode::IPASIR2_E_OK;
        }
    }

    ipasir2_errorcode::IPASIR2_E_UNSUPPORTED_OPTION
}
