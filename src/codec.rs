//! The converter between typed enum values and their wire labels.
//!
//! A [`Codec`] pairs a [`Registry`] with two policy points: how incoming
//! labels are matched, and what happens when one matches nothing. Both
//! policies are plain serde-able enums, so host applications can carry
//! them in their own config files.

use std::any;

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::errors::{DecodeError, EncodeError};
use crate::labels::WireEnum;
use crate::registry::Registry;

/// How incoming wire labels are compared against declared labels.
///
/// Wire formats use machine tokens, not user text, so exact matching is
/// the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    #[default]
    Exact,
    IgnoreAsciiCase,
}

/// What to do with an incoming label that matches no declared member.
///
/// `Fallback` substitutes the enum's declared fallback member, for
/// schemas where the upstream provider may introduce new tokens before
/// this side is updated. Enums without a fallback member still reject.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownLabels {
    #[default]
    Reject,
    Fallback,
}

/// Encodes enum members to wire labels and decodes wire labels back.
///
/// Stateless per call: each operation is a lookup in the registry's
/// cached [`LabelMap`](crate::LabelMap), safe to share across threads.
///
/// ```
/// use wirelabel::{Codec, MatchPolicy};
///
/// let lenient = Codec::builder()
///     .match_policy(MatchPolicy::IgnoreAsciiCase)
///     .build();
/// # let _ = lenient;
/// ```
#[derive(Debug, Clone, Builder)]
pub struct Codec {
    /// Registry consulted for label maps. Defaults to a handle on the
    /// process-wide registry.
    #[builder(default = Registry::global().clone())]
    registry: Registry,

    #[builder(default)]
    match_policy: MatchPolicy,

    #[builder(default)]
    unknown_labels: UnknownLabels,
}

impl Default for Codec {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Codec {
    /// The wire label for `value`.
    ///
    /// `UnlabeledMember` is defensive only: it needs a hand-written
    /// [`WireEnum`] impl whose table misses a member.
    pub fn encode<T: WireEnum>(&self, value: T) -> Result<&'static str, EncodeError> {
        let map = self.registry.label_map::<T>()?;
        map.label(value).ok_or_else(|| EncodeError::UnlabeledMember {
            enum_type: any::type_name::<T>(),
            member: format!("{value:?}"),
        })
    }

    /// The member declared for `label`, under this codec's policies.
    pub fn decode<T: WireEnum>(&self, label: &str) -> Result<T, DecodeError> {
        let map = self.registry.label_map::<T>()?;

        let found = match self.match_policy {
            MatchPolicy::Exact => map.member(label),
            MatchPolicy::IgnoreAsciiCase => {
                map.member(label).or_else(|| map.member_ignore_case(label))
            }
        };
        if let Some(member) = found {
            return Ok(member);
        }

        if self.unknown_labels == UnknownLabels::Fallback
            && let Some(member) = T::FALLBACK
        {
            return Ok(member);
        }

        Err(DecodeError::UnknownLabel {
            enum_type: any::type_name::<T>(),
            label: label.to_owned(),
            expected: T::LABELS.iter().map(|&(_, l)| l).collect(),
        })
    }
}
