//! Plain types shared across the crate.

pub mod err;
