//! Azure OpenAI response schemas that consume the wire-label converter.
//!
//! These schemas match the Azure OpenAI chat-completion response
//! specification. Every enum-typed field serializes through its declared
//! wire-label table.

pub mod chat_completions;

use crate::errors::ConfigurationError;
use crate::registry::Registry;

use chat_completions::{
    ChatCompletionResponseMessageRole, ChatCompletionResponseObject, ContentFilterSeverity,
    ToolCallType,
};

/// Eagerly builds the label map for every enum in this schema.
///
/// Call this from the application's startup path so a misdeclared table
/// fails the boot instead of the first response that touches it.
pub fn preload(registry: &Registry) -> Result<(), ConfigurationError> {
    registry.check::<ChatCompletionResponseObject>()?;
    registry.check::<ChatCompletionResponseMessageRole>()?;
    registry.check::<ToolCallType>()?;
    registry.check::<ContentFilterSeverity>()?;
    Ok(())
}
