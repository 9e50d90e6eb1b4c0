//! C bindings for the reentrant incremental sat solver API, version 2 --- IPASIR2.
//!
//! Information about the API may be found at <https://github.com/ipasir2/ipasir2>.
//!
//! Every entry point of the API is present.
//! Two are deliberate capability gaps rather than bindings:
//! [ipasir2_set_import](callbacks::ipasir2_set_import) and [ipasir2_set_fixed](callbacks::ipasir2_set_fixed) report `IPASIR2_E_UNSUPPORTED` unconditionally, as the wrapped solver offers no point to hook either callback into.
//! Closing either gap is a breaking change to the advertised capabilities and should be flagged as such.
//!
//! # Implementation details
//!
//! The solver handle passed across the boundary is a [Engine](crate::engine::Engine), boxed and erased to `void*`.
//! A handle is owned by the caller from [ipasir2_init](basic::ipasir2_init) until [ipasir2_release](basic::ipasir2_release), must not be used after release, and must not be mutated from two threads at once.
//! Neither property is guarded here; both match the lifecycle contract of the native API.
//!
//! The option descriptor table is process-wide, built once on first request, and immutable afterwards; see [options].
//!
//! # Status codes
//!
//! Functions return a member of [ipasir2_errorcode], and a return other than `IPASIR2_E_OK` implies the call had no effect.
//! The outcome of a solve is not a status: it travels through an output parameter, and an inconclusive solve is still `IPASIR2_E_OK`.

use std::ffi::{c_char, c_int, c_void};

pub mod basic;
pub mod callbacks;
pub mod options;

pub use basic::{
    ipasir2_add, ipasir2_failed, ipasir2_init, ipasir2_release, ipasir2_signature, ipasir2_solve,
    ipasir2_val,
};
pub use callbacks::{
    ipasir2_set_export, ipasir2_set_fixed, ipasir2_set_import, ipasir2_set_terminate,
};
pub use options::{ipasir2_get_option_handle, ipasir2_options, ipasir2_set_option};

/// Codes used to indicate the success or failure of a function call.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(C)]
pub enum ipasir2_errorcode {
    IPASIR2_E_OK = 0,
    IPASIR2_E_UNKNOWN = 1,
    IPASIR2_E_UNSUPPORTED,
    IPASIR2_E_UNSUPPORTED_ARGUMENT,
    IPASIR2_E_UNSUPPORTED_OPTION,
    IPASIR2_E_INVALID_STATE,
    IPASIR2_E_INVALID_ARGUMENT,
    IPASIR2_E_INVALID_OPTION_VALUE,
}

/// States of the solver, as far as the API is concerned.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(C)]
pub enum ipasir2_state {
    IPASIR2_S_CONFIG = 0,
    IPASIR2_S_INPUT = 1,
    IPASIR2_S_SAT,
    IPASIR2_S_UNSAT,
    IPASIR2_S_SOLVING,
}

/// An IPASIR2 configuration option descriptor.
#[allow(non_camel_case_types)]
#[repr(C)]
pub struct ipasir2_option {
    /// Unique option identifier, or null on the sentinel entry closing a descriptor table.
    pub name: *const c_char,

    /// Minimum allowed value for the option.
    pub min: i64,

    /// Maximum allowed value for the option.
    pub max: i64,

    /// Latest state in which the option may still be set.
    ///
    /// Declared for the caller's benefit; [ipasir2_set_option](options::ipasir2_set_option) does not enforce it.
    pub max_state: ipasir2_state,

    /// Whether the option is eligible for use by automatic tuners.
    pub tunable: c_int,

    /// Whether the option may be set per variable. Always zero here.
    pub indexed: c_int,

    /// An opaque pointer binding the descriptor to its setter.
    pub handle: *const c_void,
}
