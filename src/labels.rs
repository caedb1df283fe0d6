//! Wire-label tables for closed enums.
//!
//! Every enum exposed on the wire declares a static table of
//! `(member, label)` pairs, usually through the [`wire_enum!`] macro. A
//! [`LabelMap`] is the validated, lookup-ready form of that table: one
//! hash map per direction, built once per type and immutable afterwards.
//!
//! [`wire_enum!`]: crate::wire_enum

use std::any;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::errors::ConfigurationError;

/// An enum with a declared wire-label table.
///
/// The table is total: every member appears exactly once, with exactly one
/// non-empty label. Violations are caught by [`LabelMap::build`], not at
/// the declaration site, so they surface as [`ConfigurationError`]s on
/// first use (or at startup, via [`Registry::check`]).
///
/// [`Registry::check`]: crate::Registry::check
pub trait WireEnum: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// The declared `(member, label)` pairs, in declaration order.
    const LABELS: &'static [(Self, &'static str)];

    /// Member substituted for unrecognized incoming labels, when the enum
    /// opts into fallback decoding. `None` means unrecognized labels are
    /// always an error.
    const FALLBACK: Option<Self> = None;
}

/// The bidirectional member ⇄ label mapping for one enum type.
///
/// Read-only once built. Lookups are O(1); the case-folded index exists
/// so the case-insensitive match policy doesn't scan.
#[derive(Debug)]
pub struct LabelMap<T> {
    by_member: HashMap<T, &'static str>,
    by_label: HashMap<&'static str, T>,
    folded: HashMap<String, T>,
}

impl<T: WireEnum> LabelMap<T> {
    /// Validates the declared table and builds both lookup directions.
    ///
    /// Fails if a label is empty, a member is declared twice, two members
    /// share a label (ambiguous decode target), or the declared fallback
    /// member is missing from the table.
    pub fn build() -> Result<Self, ConfigurationError> {
        let enum_type = any::type_name::<T>();
        let mut by_member = HashMap::with_capacity(T::LABELS.len());
        let mut by_label = HashMap::with_capacity(T::LABELS.len());
        let mut folded = HashMap::with_capacity(T::LABELS.len());

        for &(member, label) in T::LABELS {
            if label.is_empty() {
                return Err(ConfigurationError::EmptyLabel {
                    enum_type,
                    member: format!("{member:?}"),
                });
            }
            if by_member.insert(member, label).is_some() {
                return Err(ConfigurationError::DuplicateMember {
                    enum_type,
                    member: format!("{member:?}"),
                });
            }
            if by_label.insert(label, member).is_some() {
                return Err(ConfigurationError::DuplicateLabel { enum_type, label });
            }
            // First declared member wins if two labels collide once case
            // is folded; exact matches are resolved before this index is
            // consulted.
            folded.entry(label.to_ascii_lowercase()).or_insert(member);
        }

        if let Some(fallback) = T::FALLBACK
            && !by_member.contains_key(&fallback)
        {
            return Err(ConfigurationError::UnlabeledFallback {
                enum_type,
                member: format!("{fallback:?}"),
            });
        }

        Ok(Self {
            by_member,
            by_label,
            folded,
        })
    }

    /// The wire label declared for `member`.
    pub fn label(&self, member: T) -> Option<&'static str> {
        self.by_member.get(&member).copied()
    }

    /// The member declared for `label`, matched exactly.
    pub fn member(&self, label: &str) -> Option<T> {
        self.by_label.get(label).copied()
    }

    /// The member declared for `label`, ignoring ASCII case.
    pub fn member_ignore_case(&self, label: &str) -> Option<T> {
        self.folded.get(&label.to_ascii_lowercase()).copied()
    }

    /// Number of declared members.
    pub fn len(&self) -> usize {
        self.by_member.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_member.is_empty()
    }
}
