//! Error types for cycle and mewa calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from cycle, mewa, obstacle and prosperity calculations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MewaError {
    /// Numeric input outside its documented bounds (year, age, hour, mewa number).
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
    /// Categorical input not present in a reference table.
    UnknownKey { kind: &'static str, key: String },
    /// Reference tables are internally inconsistent.
    Configuration(&'static str),
}

impl MewaError {
    pub(crate) fn out_of_range(field: &'static str, value: i64, min: i64, max: i64) -> Self {
        Self::OutOfRange {
            field,
            value,
            min,
            max,
        }
    }

    /// Build an [`MewaError::UnknownKey`] for `kind` from any string-like key.
    pub fn unknown_key(kind: &'static str, key: impl Into<String>) -> Self {
        Self::UnknownKey {
            kind,
            key: key.into(),
        }
    }

    /// Check `value` against an inclusive range, returning `OutOfRange` on failure.
    pub fn check_range(field: &'static str, value: i64, min: i64, max: i64) -> Result<(), Self> {
        if (min..=max).contains(&value) {
            Ok(())
        } else {
            Err(Self::out_of_range(field, value, min, max))
        }
    }
}

impl Display for MewaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange {
                field,
                value,
                min,
                max,
            } => write!(f, "{field} out of range: {value} (expected {min}..={max})"),
            Self::UnknownKey { kind, key } => write!(f, "unknown {kind}: {key:?}"),
            Self::Configuration(msg) => write!(f, "configuration error: {msg}"),
        }
    }
}

impl Error for MewaError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_check_inclusive() {
        assert!(MewaError::check_range("hour", 0, 0, 23).is_ok());
        assert!(MewaError::check_range("hour", 23, 0, 23).is_ok());
        assert_eq!(
            MewaError::check_range("hour", 24, 0, 23),
            Err(MewaError::OutOfRange {
                field: "hour",
                value: 24,
                min: 0,
                max: 23
            })
        );
    }

    #[test]
    fn display_messages() {
        let e = MewaError::out_of_range("year", 999, 1000, 3000);
        assert_eq!(e.to_string(), "year out of range: 999 (expected 1000..=3000)");
        let e = MewaError::unknown_key("cycle name", "WoodYangOx");
        assert_eq!(e.to_string(), "unknown cycle name: \"WoodYangOx\"");
    }
}
