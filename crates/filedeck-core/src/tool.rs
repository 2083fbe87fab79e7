//! Tool trait, call and result types.
//!
//! A tool is one named file-management operation with a declared input
//! schema. The registry routes `ToolCall`s to tool implementations and every
//! invocation produces an `ExecutionResult` carrying either content items or
//! a typed failure reason.

use crate::content::TextContent;
use crate::error::ToolError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Named string arguments passed to a tool invocation.
///
/// Handlers perform their own presence checks through [`ToolArguments::require`];
/// the input schema in the tool descriptor exists for the caller's benefit
/// and is not re-enforced here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolArguments(BTreeMap<String, String>);

impl ToolArguments {
    /// Create an empty argument map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an optional argument.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Look up a required argument, failing with `MissingArgument` if absent.
    pub fn require(&self, name: &str) -> Result<&str, ToolError> {
        self.get(name)
            .ok_or_else(|| ToolError::missing_argument(name))
    }

    /// Insert an argument, builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ToolArguments {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// A request to invoke a specific tool with named arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCall {
    /// The name of the tool to invoke.
    pub name: String,
    /// The arguments to pass to the tool.
    #[serde(default)]
    pub arguments: ToolArguments,
}

impl ToolCall {
    /// Create a new tool call.
    pub fn new(name: impl Into<String>, arguments: ToolArguments) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }
}

/// The result of executing a tool.
///
/// Either successful execution with an ordered list of content items, or a
/// failure with a structured reason. Writes are all-or-nothing: there is no
/// partial-success shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionResult {
    /// Tool executed successfully with the given content items.
    Success { content: Vec<TextContent> },

    /// Tool execution failed with a typed reason.
    Failure { reason: ToolError },
}

impl ExecutionResult {
    /// Create a successful result from content items.
    pub fn success(content: Vec<TextContent>) -> Self {
        ExecutionResult::Success { content }
    }

    /// Create a successful result holding a single text item.
    pub fn text(text: impl Into<String>) -> Self {
        ExecutionResult::Success {
            content: vec![TextContent::new(text)],
        }
    }

    /// Create a failed result with a structured reason.
    pub fn failed(reason: ToolError) -> Self {
        ExecutionResult::Failure { reason }
    }

    /// Check if the execution was successful.
    pub fn is_success(&self) -> bool {
        matches!(self, ExecutionResult::Success { .. })
    }

    /// Check if the execution failed.
    pub fn is_failure(&self) -> bool {
        matches!(self, ExecutionResult::Failure { .. })
    }

    /// Get the content items if successful.
    pub fn content(&self) -> Option<&[TextContent]> {
        match self {
            ExecutionResult::Success { content } => Some(content),
            ExecutionResult::Failure { .. } => None,
        }
    }

    /// Get the failure reason if failed.
    pub fn failure_reason(&self) -> Option<&ToolError> {
        match self {
            ExecutionResult::Success { .. } => None,
            ExecutionResult::Failure { reason } => Some(reason),
        }
    }

    /// Convert to a `Result` for `?`-style handling.
    pub fn into_result(self) -> Result<Vec<TextContent>, ToolError> {
        match self {
            ExecutionResult::Success { content } => Ok(content),
            ExecutionResult::Failure { reason } => Err(reason),
        }
    }
}

impl From<Result<Vec<TextContent>, ToolError>> for ExecutionResult {
    fn from(result: Result<Vec<TextContent>, ToolError>) -> Self {
        match result {
            Ok(content) => ExecutionResult::Success { content },
            Err(reason) => ExecutionResult::Failure { reason },
        }
    }
}

/// Catalogue entry describing one invocable tool.
///
/// Serialized as-is in the `list_tools` response; `input_schema` is a JSON
/// Schema object enumerating the tool's named string parameters and which of
/// them are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: serde_json::Value,
}

/// Trait defining one named file-management operation.
///
/// # Example
///
/// ```rust
/// use filedeck_core::{ExecutionResult, Tool, ToolArguments};
///
/// struct EchoTool;
///
/// impl Tool for EchoTool {
///     fn name(&self) -> &str {
///         "echo"
///     }
///
///     fn description(&self) -> &str {
///         "Echo the message argument back"
///     }
///
///     fn input_schema(&self) -> serde_json::Value {
///         serde_json::json!({
///             "type": "object",
///             "properties": {
///                 "message": { "type": "string", "description": "Text to echo" }
///             },
///             "required": ["message"]
///         })
///     }
///
///     fn call(&self, arguments: &ToolArguments) -> ExecutionResult {
///         match arguments.require("message") {
///             Ok(message) => ExecutionResult::text(message),
///             Err(reason) => ExecutionResult::failed(reason),
///         }
///     }
/// }
/// ```
pub trait Tool: Send + Sync {
    /// The unique name identifier used for dispatch.
    fn name(&self) -> &str;

    /// Human-readable description used in the tool catalogue.
    fn description(&self) -> &str;

    /// JSON Schema for the tool's named parameters.
    fn input_schema(&self) -> serde_json::Value;

    /// Execute the tool with the provided arguments.
    fn call(&self, arguments: &ToolArguments) -> ExecutionResult;

    /// Build the catalogue descriptor for this tool.
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            name: self.name().to_string(),
            description: self.description().to_string(),
            input_schema: self.input_schema(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoTool;

    impl Tool for EchoTool {
        fn name(&self) -> &str {
            "echo"
        }

        fn description(&self) -> &str {
            "Echo the message argument back"
        }

        fn input_schema(&self) -> serde_json::Value {
            serde_json::json!({
                "type": "object",
                "properties": {
                    "message": { "type": "string" }
                },
                "required": ["message"]
            })
        }

        fn call(&self, arguments: &ToolArguments) -> ExecutionResult {
            match arguments.require("message") {
                Ok(message) => ExecutionResult::text(format!("Echo: {message}")),
                Err(reason) => ExecutionResult::failed(reason),
            }
        }
    }

    #[test]
    fn tool_can_echo_input() {
        let tool = EchoTool;
        let args = ToolArguments::new().with("message", "filedeck");
        let result = tool.call(&args);
        assert!(result.is_success());
        assert_eq!(result.content().unwrap()[0].text, "Echo: filedeck");
    }

    #[test]
    fn missing_argument_is_typed() {
        let tool = EchoTool;
        let result = tool.call(&ToolArguments::new());
        assert_eq!(
            result.failure_reason(),
            Some(&ToolError::missing_argument("message"))
        );
    }

    #[test]
    fn descriptor_carries_schema() {
        let descriptor = EchoTool.descriptor();
        assert_eq!(descriptor.name, "echo");
        assert_eq!(descriptor.input_schema["required"][0], "message");

        let json = serde_json::to_value(&descriptor).unwrap();
        assert!(json.get("inputSchema").is_some());
    }

    #[test]
    fn arguments_deserialize_from_plain_map() {
        let args: ToolArguments =
            serde_json::from_str(r#"{"file_path": "/tmp/data", "file_name": "a.txt"}"#).unwrap();
        assert_eq!(args.get("file_path"), Some("/tmp/data"));
        assert_eq!(args.require("file_name").unwrap(), "a.txt");
    }
}
