//! Crate-level error types.

use std::fmt;

/// Errors produced by the solarium crate.
///
/// Only genuinely fatal conditions live here. Unresolvable addresses,
/// missing optional body fields, unready textures and unlinked programs
/// all fall back locally and never surface as errors.
#[derive(Debug)]
pub enum SolariumError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// A UI change event named a control the engine does not know.
    UnknownControl(String),
    /// A UI change event carried a value the control cannot accept.
    InvalidControlValue {
        /// Control identifier (`viewDirection`, `rotationLock`, `speed`).
        control: String,
        /// The rejected raw value.
        value: String,
    },
    /// A resource named in the manifest could not be produced.
    ResourceMissing(String),
    /// The body tree handed to the system builder violates its shape.
    InvalidSystem(String),
}

impl fmt::Display for SolariumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::UnknownControl(control) => {
                write!(f, "unknown UI control: {control}")
            }
            Self::InvalidControlValue { control, value } => {
                write!(f, "invalid value {value:?} for control {control}")
            }
            Self::ResourceMissing(name) => {
                write!(f, "resource missing: {name}")
            }
            Self::InvalidSystem(msg) => write!(f, "invalid system: {msg}"),
        }
    }
}

impl std::error::Error for SolariumError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SolariumError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
