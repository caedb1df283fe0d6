//! Wirelabel - typed enum to wire-label mapping for OpenAI-compatible API schemas
//!
//! This library maps closed enums to the string tokens an API puts on the
//! wire (`ContentFilterSeverity::High` ⇄ `"high"`) and back, for any enum
//! that declares a label table. Two pieces cooperate:
//!
//! - [`Registry`] builds and caches the bidirectional [`LabelMap`] for
//!   each enum type, validating the declared table on first use.
//! - [`Codec`] encodes members to labels and decodes labels to members,
//!   with configurable matching and unknown-label policies.
//!
//! Enums declared with [`wire_enum!`] also get `Serialize`/`Deserialize`
//! impls, so they plug straight into serde-driven request and response
//! schemas like the ones in [`schemas`].
//!
//! ```
//! use wirelabel::{wire_enum, Codec};
//!
//! wire_enum! {
//!     /// Severity levels for content filtering.
//!     pub enum Severity {
//!         Safe => "safe",
//!         High => "high",
//!     }
//! }
//!
//! let codec = Codec::default();
//! assert_eq!(codec.encode(Severity::High)?, "high");
//! assert_eq!(codec.decode::<Severity>("safe")?, Severity::Safe);
//! assert!(codec.decode::<Severity>("extreme").is_err());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod codec;
pub mod errors;
pub mod labels;
mod macros;
pub mod registry;
pub mod schemas;
pub mod wire;

pub use codec::{Codec, MatchPolicy, UnknownLabels};
pub use errors::{ConfigurationError, DecodeError, EncodeError};
pub use labels::{LabelMap, WireEnum};
pub use registry::Registry;
