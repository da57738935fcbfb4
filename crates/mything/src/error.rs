use std::fmt;

use strum::{Display, EnumString, IntoStaticStr};

/// Category of a [`ThingError`].
///
/// The string form names the exception a dynamic host should raise for the error,
/// e.g. `ThingErrorKind::Overflow` -> "OverflowError".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
pub enum ThingErrorKind {
    #[strum(serialize = "OverflowError")]
    Overflow,
}

/// Error returned by fallible [`MyThing`](crate::MyThing) operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThingError {
    /// `value + delta` does not fit in an `i64`; the held value was left untouched.
    Overflow {
        /// The value held before the failed increment.
        value: i64,
        /// The delta that was rejected.
        delta: i64,
    },
}

impl ThingError {
    #[must_use]
    pub fn kind(&self) -> ThingErrorKind {
        match self {
            Self::Overflow { .. } => ThingErrorKind::Overflow,
        }
    }
}

impl fmt::Display for ThingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overflow { value, delta } => {
                write!(f, "incrementing {value} by {delta} overflows a 64-bit integer")
            }
        }
    }
}

impl std::error::Error for ThingError {}
