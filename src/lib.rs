//! IPASIR2 bindings over the [batsat](https://docs.rs/batsat) SAT solver.
//!
//! This crate is a binding shim.
//! It maps the vendor-neutral [IPASIR2](https://github.com/ipasir2/ipasir2) incremental-SAT C API onto the entry points of batsat, and nothing more.
//! All of the hard work --- clause learning, conflict-driven search, restarts, watch lists --- happens inside batsat, which this crate consumes as an ordinary dependency.
//! What remains here is glue:
//! - Translating option names and ranges between the IPASIR2 descriptor table and batsat's configuration structure.
//! - Marshalling clause and assumption arrays into batsat's calling conventions.
//! - Relaying callback pointers across the C boundary.
//!
//! # Orientation
//!
//! The crate is split along the boundary the shim exists to bridge:
//! - The [engine] module owns the wrapped solver.
//!   An [Engine](engine::Engine) bundles a batsat solver with the buffers and hooks the C API requires, and [engine::tunables] is the registry of its runtime-configurable knobs.
//! - The [ipasir2] module is the C ABI surface: `#[no_mangle] extern "C"` functions and `#[repr(C)]` types, forwarding to an [Engine](engine::Engine) behind an opaque pointer.
//!
//! The [Engine](engine::Engine) type is also usable directly from Rust, in which case the C layer is bypassed entirely.
//!
//! # Compiling a library
//!
//! By default, cargo does not build a library suitable for linking to a C program.\
//! The manifest requests `staticlib` and `cdylib` artefacts in addition to the Rust library; for details see: <https://doc.rust-lang.org/reference/linkage.html>
//!
//! # Example
//!
//! Solving through the Rust surface of the engine:
//!
//! ```rust
//! use batsat_ipasir2::engine::{Engine, SolveOutcome};
//!
//! let mut engine = Engine::new();
//!
//! for lit in [1, -2, 0] {
//!     engine.add_literal(lit);
//! }
//! for lit in [2, 0] {
//!     engine.add_literal(lit);
//! }
//!
//! assert_eq!(engine.solve(), SolveOutcome::Satisfiable);
//! assert_eq!(engine.value(1), 1);
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made where the shim takes a decision of its own, option staging and limit updates in particular.
//! As with batsat, logging compiles away in release builds.

pub mod engine;
pub mod ipasir2;
pub mod types;
