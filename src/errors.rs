//! Error taxonomy for label-table construction and wire conversion.
//!
//! `ConfigurationError` reports structural problems in an enum's declared
//! label table and is fatal at the point of first use for that type.
//! `EncodeError` and `DecodeError` are per-value failures surfaced to the
//! caller of the corresponding conversion.

/// A wire-label table is missing, ambiguous, or otherwise misdeclared.
///
/// These indicate a bug at the enum's definition site, not a runtime data
/// problem. Applications should surface them at startup via
/// [`Registry::check`](crate::Registry::check) rather than on first
/// request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("{enum_type}::{member} declares an empty wire label")]
    EmptyLabel {
        enum_type: &'static str,
        member: String,
    },

    #[error("{enum_type} declares more than one wire label for {member}")]
    DuplicateMember {
        enum_type: &'static str,
        member: String,
    },

    #[error("{enum_type} declares the wire label {label:?} for more than one member")]
    DuplicateLabel {
        enum_type: &'static str,
        label: &'static str,
    },

    #[error("{enum_type} names the fallback member {member} but declares no wire label for it")]
    UnlabeledFallback {
        enum_type: &'static str,
        member: String,
    },
}

/// An in-memory enum value could not be turned into a wire label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Reachable only through a hand-written [`WireEnum`](crate::WireEnum)
    /// impl whose table misses a member.
    #[error("{enum_type} value {member} has no declared wire label")]
    UnlabeledMember {
        enum_type: &'static str,
        member: String,
    },
}

/// An incoming wire label matched no declared member.
///
/// Recoverable: the caller decides whether to reject the containing
/// message or substitute a fallback member.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("unrecognized wire label {label:?} for {enum_type} (expected one of {expected:?})")]
    UnknownLabel {
        enum_type: &'static str,
        label: String,
        expected: Vec<&'static str>,
    },
}
