//! Outcome of a lookup that may legitimately find nothing.

use std::fmt;

/// Why a lookup produced no result. None of these are faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Absence {
    /// The registry has no resolver for the name.
    ResolverUnset,
    /// The resolver does not implement the requested capability.
    CapabilityUnsupported,
    /// The address has no reverse record.
    NoReverseRecord,
    /// The record exists but is zero or empty.
    EmptyRecord,
    /// The reverse name does not resolve back to the address.
    ReverseMismatch,
}

impl fmt::Display for Absence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResolverUnset => write!(f, "no resolver set"),
            Self::CapabilityUnsupported => write!(f, "resolver does not support this record"),
            Self::NoReverseRecord => write!(f, "no reverse record"),
            Self::EmptyRecord => write!(f, "record is empty"),
            Self::ReverseMismatch => write!(f, "reverse record does not resolve back"),
        }
    }
}

/// Result of a lookup: a value, or the reason there is none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    /// A value was resolved.
    Found(T),
    /// Nothing to resolve.
    Absent(Absence),
}

impl<T> Lookup<T> {
    /// The value, discarding the absence reason.
    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            Self::Absent(_) => None,
        }
    }

    /// The absence reason, if nothing was found.
    pub const fn absence(&self) -> Option<Absence> {
        match self {
            Self::Found(_) => None,
            Self::Absent(reason) => Some(*reason),
        }
    }

    /// Whether a value was found.
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Map the found value.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Lookup<U> {
        match self {
            Self::Found(value) => Lookup::Found(f(value)),
            Self::Absent(reason) => Lookup::Absent(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_and_absent() {
        let found = Lookup::Found(7);
        assert!(found.is_found());
        assert_eq!(found.absence(), None);
        assert_eq!(found.map(|v| v * 2).found(), Some(14));

        let absent: Lookup<u8> = Lookup::Absent(Absence::ResolverUnset);
        assert!(!absent.is_found());
        assert_eq!(absent.absence(), Some(Absence::ResolverUnset));
        assert_eq!(absent.found(), None);
    }

    #[test]
    fn test_absence_display() {
        assert_eq!(Absence::NoReverseRecord.to_string(), "no reverse record");
    }
}
