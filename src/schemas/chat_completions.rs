//! Chat Completions response schemas
//!
//! These schemas match the Azure OpenAI chat-completion response shape.
//! See: https://github.com/Azure/azure-rest-api-specs/blob/main/specification/cognitiveservices/data-plane/AzureOpenAI/inference/stable/2024-06-01/inference.json

use serde::{Deserialize, Serialize};

use crate::wire_enum;

/// The response from creating a chat completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionResponse {
    /// A unique identifier for the chat completion.
    pub id: String,

    /// The object type, always `chat.completion`.
    pub object: ChatCompletionResponseObject,

    /// The Unix timestamp (in seconds) of when the chat completion was created.
    pub created: u64,

    /// The model used for the chat completion.
    pub model: String,

    /// Usage statistics for the completion request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<CompletionUsage>,

    /// Can be used with the `seed` request parameter to understand when
    /// backend changes have been made that might impact determinism.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_fingerprint: Option<String>,

    /// Content filtering results for zero or more prompts in the request.
    /// In a streaming request, results for different prompts may arrive
    /// at different times or in different orders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_filter_results: Option<Vec<PromptFilterResult>>,

    /// The list of choices.
    pub choices: Vec<ChatCompletionChoice>,
}

/// A choice in the chat completion response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionChoice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,

    /// Why the model stopped generating, e.g. `stop` or `length`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,

    /// The message generated by the model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<ChatCompletionResponseMessage>,

    /// Content filtering results for this choice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_filter_results: Option<ContentFilterChoiceResults>,

    /// Log probability information for the choice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logprobs: Option<ChatCompletionChoiceLogProbs>,
}

/// A chat completion message generated by the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionResponseMessage {
    /// The role of the author of the response message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<ChatCompletionResponseMessageRole>,

    /// The contents of the message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Tool calls generated by the model, such as function calls.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ChatCompletionMessageToolCall>>,

    /// Deprecated and replaced by `tool_calls`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_call: Option<ChatCompletionFunctionCall>,

    /// Additional context available when Azure OpenAI chat extensions are
    /// involved in generating this response. Only populated when the
    /// request is configured to use a matching extension.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<AzureChatExtensionsMessageContext>,
}

/// Usage statistics for the completion request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionUsage {
    /// Number of tokens in the prompt.
    pub prompt_tokens: u32,

    /// Number of tokens in the generated completion.
    pub completion_tokens: u32,

    /// Total number of tokens used in the request (prompt + completion).
    pub total_tokens: u32,
}

/// Content filtering results for a single prompt in the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptFilterResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_index: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_filter_results: Option<ContentFilterPromptResults>,
}

/// Content filtering results for a choice: severity per harm category,
/// detection results for profanity and protected material, and any
/// filtering error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentFilterChoiceResults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sexual: Option<ContentFilterSeverityResult>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub violence: Option<ContentFilterSeverityResult>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hate: Option<ContentFilterSeverityResult>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_harm: Option<ContentFilterSeverityResult>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub profanity: Option<ContentFilterDetectedResult>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBase>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub protected_material_text: Option<ContentFilterDetectedResult>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub protected_material_code: Option<ContentFilterDetectedWithCitationResult>,
}

/// Content filtering results for a prompt: severity per harm category,
/// detection results for jailbreak content and profanity, and any
/// filtering error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentFilterPromptResults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sexual: Option<ContentFilterSeverityResult>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub violence: Option<ContentFilterSeverityResult>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hate: Option<ContentFilterSeverityResult>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_harm: Option<ContentFilterSeverityResult>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub profanity: Option<ContentFilterDetectedResult>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBase>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub jailbreak: Option<ContentFilterDetectedResult>,
}

/// Severity information for a content filtering category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentFilterSeverityResult {
    /// Whether the content was filtered.
    pub filtered: bool,

    /// The severity level of the content.
    pub severity: ContentFilterSeverity,
}

/// Whether specific content was detected, and whether it was filtered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentFilterDetectedResult {
    pub filtered: bool,
    pub detected: bool,
}

/// Detection result for protected material in code, including citation
/// information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentFilterDetectedWithCitationResult {
    pub filtered: bool,
    pub detected: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub citation: Option<CitationObject>,
}

/// Citation details for a protected-material result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitationObject {
    #[serde(rename = "URL", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
}

/// Error details for content filtering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBase {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A tool call generated by the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionMessageToolCall {
    /// The ID of the tool call.
    pub id: String,

    /// The type of the tool call, in this case `function`.
    #[serde(rename = "type")]
    pub call_type: ToolCallType,

    /// The function that the model called.
    pub function: FunctionObject,
}

/// The function that the model called.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionObject {
    /// The name of the function to call.
    pub name: String,

    /// The arguments to call the function with, as generated by the model
    /// in JSON format. The model does not always generate valid JSON, and
    /// may hallucinate parameters not defined by the function schema;
    /// validate before calling.
    pub arguments: String,
}

/// Deprecated and replaced by `tool_calls`. The name and arguments of a
/// function that should be called, as generated by the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionFunctionCall {
    pub name: String,
    pub arguments: String,
}

/// Additional context available when Azure OpenAI chat extensions are
/// involved in generating a response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AzureChatExtensionsMessageContext {
    /// The data source retrieval result, used to generate the assistant
    /// message in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citations: Option<Vec<Citation>>,

    /// The detected intent from the chat history, passed to the next turn
    /// to carry over context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<String>,
}

/// Citation information for a chat completions response message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Citation {
    /// The content of the citation.
    pub content: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub filepath: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunk_id: Option<String>,
}

/// Log probability information for a choice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionChoiceLogProbs {
    /// Message content tokens with log probability information.
    pub content: Vec<ChatCompletionTokenLogProb>,
}

/// Token log probability information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionTokenLogProb {
    pub token: String,

    pub logprob: f64,

    /// UTF-8 byte representation of the token.
    pub bytes: Vec<u32>,

    /// The most likely tokens and their log probability at this position.
    /// In rare cases there may be fewer than the requested `top_logprobs`.
    pub top_logprobs: Vec<TopLogProbs>,
}

/// One of the most likely tokens at a given position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopLogProbs {
    pub token: String,

    pub logprob: f64,

    /// UTF-8 byte representation of the token. `None` if the token has no
    /// bytes representation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<Vec<u32>>,
}

wire_enum! {
    /// The type of a tool call.
    pub enum ToolCallType {
        /// The tool call invokes a function.
        Function => "function",
    }
}

wire_enum! {
    /// The role of the author of the response message.
    pub enum ChatCompletionResponseMessageRole {
        Assistant => "assistant",
    }
}

wire_enum! {
    /// The object type of a chat completion response.
    pub enum ChatCompletionResponseObject {
        ChatCompletion => "chat.completion",
    }
}

wire_enum! {
    /// Severity levels for content filtering.
    pub enum ContentFilterSeverity {
        /// General content, or related content in generic or non-harmful
        /// contexts.
        Safe => "safe",
        /// Harmful content at a low intensity and risk level.
        Low => "low",
        /// Harmful content at a medium intensity and risk level.
        Medium => "medium",
        /// Harmful content at a high intensity and risk level.
        High => "high",
    }
}
