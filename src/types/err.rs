//! Error types.
//!
//! Errors cross the C boundary as status codes, never as unwinds.
//! Within the crate the corresponding conditions are ordinary enums.

/// Things which may go wrong when setting an option on an engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionError {
    /// The name does not appear in the tunable registry.
    UnknownOption,

    /// The value falls outside the registered range of the option.
    OutOfRange,

    /// The underlying solver has been instantiated, and its options are fixed.
    Fixed,
}

impl std::fmt::Display for OptionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::UnknownOption => write!(f, "unknown option"),
            Self::OutOfRange => write!(f, "value outside the option's range"),
            Self::Fixed => write!(f, "options are fixed once solving structures exist"),
        }
    }
}
