//! Serde glue for wire enums.
//!
//! These two functions have the `#[serde(with = "...")]` shape, so they
//! work directly on struct fields, and they are what the impls generated
//! by [`wire_enum!`](crate::wire_enum) delegate to. This path uses the
//! process-wide [`Registry`]: serde's traits take no state, so there is
//! nowhere to thread an explicit one.
//!
//! Policy on this path is fixed: labels match exactly, and an
//! unrecognized label decodes to the enum's declared fallback member if
//! it has one, otherwise fails as a field-level error. Use a
//! [`Codec`](crate::Codec) for runtime-configurable policies.

use std::any;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};

use crate::errors::{DecodeError, EncodeError};
use crate::labels::WireEnum;
use crate::registry::Registry;

/// Serializes `value` as its declared wire label.
pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: WireEnum,
    S: Serializer,
{
    let map = Registry::global()
        .label_map::<T>()
        .map_err(serde::ser::Error::custom)?;
    let label = map.label(*value).ok_or_else(|| {
        serde::ser::Error::custom(EncodeError::UnlabeledMember {
            enum_type: any::type_name::<T>(),
            member: format!("{value:?}"),
        })
    })?;
    serializer.serialize_str(label)
}

/// Deserializes a wire label into the matching member.
pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: WireEnum,
    D: Deserializer<'de>,
{
    struct LabelVisitor<T>(PhantomData<T>);

    impl<T: WireEnum> Visitor<'_> for LabelVisitor<T> {
        type Value = T;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a wire label for {}", any::type_name::<T>())
        }

        fn visit_str<E>(self, label: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            let map = Registry::global().label_map::<T>().map_err(E::custom)?;
            match map.member(label).or(T::FALLBACK) {
                Some(member) => Ok(member),
                None => Err(E::custom(DecodeError::UnknownLabel {
                    enum_type: any::type_name::<T>(),
                    label: label.to_owned(),
                    expected: T::LABELS.iter().map(|&(_, l)| l).collect(),
                })),
            }
        }
    }

    deserializer.deserialize_str(LabelVisitor(PhantomData))
}
