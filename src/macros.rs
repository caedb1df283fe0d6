//! The `wire_enum!` declaration macro.
//!
//! Wire enums are closed sets whose members each carry exactly one string
//! token on the wire. Declaring the enum and its label table in one
//! literal keeps the table total by construction: a member without a
//! label, or a label without a member, cannot be written down.

/// Declares an enum together with its wire-label table.
///
/// Generates the enum (with `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`,
/// `Hash`), a [`WireEnum`](crate::WireEnum) impl, a `Display` impl that
/// prints the wire label, and `Serialize`/`Deserialize` impls that
/// delegate to [`wire`](crate::wire).
///
/// A trailing `fallback = Member` clause names the member substituted
/// for unrecognized incoming labels. The member is declared like any
/// other and keeps its own label on the wire.
///
/// ```
/// use wirelabel::wire_enum;
///
/// wire_enum! {
///     /// Severity levels for content filtering.
///     pub enum ContentFilterSeverity {
///         Safe => "safe",
///         Low => "low",
///         Medium => "medium",
///         High => "high",
///     }
/// }
///
/// wire_enum! {
///     /// Why the model stopped generating.
///     pub enum FinishReason {
///         Stop => "stop",
///         Length => "length",
///         Other => "other",
///     }
///     fallback = Other
/// }
///
/// assert_eq!(ContentFilterSeverity::High.to_string(), "high");
/// ```
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $label:literal),+ $(,)?
        }
        $(fallback = $fallback:ident)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $crate::WireEnum for $name {
            const LABELS: &'static [(Self, &'static str)] =
                &[$((Self::$variant, $label),)+];
            const FALLBACK: ::core::option::Option<Self> =
                $crate::__wire_enum_fallback!($($fallback)?);
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($label),)+
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                $crate::wire::serialize(self, serializer)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                $crate::wire::deserialize(deserializer)
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __wire_enum_fallback {
    () => {
        ::core::option::Option::None
    };
    ($variant:ident) => {
        ::core::option::Option::Some(Self::$variant)
    };
}
