//! Tool registry and dispatch.

use filedeck_core::{DispatchError, ExecutionResult, Tool, ToolCall, ToolDescriptor};
use std::collections::HashMap;
use std::sync::Arc;

/// Trait for managing and dispatching tool calls.
///
/// Registries maintain a static collection of tools built at startup and
/// route incoming calls to the matching implementation. Dispatch is
/// stateless: one lookup, one invocation, no retries.
pub trait ToolRegistry {
    /// Dispatch a tool call to the matching tool implementation.
    ///
    /// Fails with [`DispatchError::UnknownTool`] when no tool carries the
    /// requested name; any handler-level failure is returned inside the
    /// `ExecutionResult`.
    fn dispatch(&self, call: &ToolCall) -> Result<ExecutionResult, DispatchError>;

    /// The catalogue of registered tools, in registration order.
    fn descriptors(&self) -> Vec<ToolDescriptor>;
}

/// In-memory tool registry for local tool storage and dispatch.
///
/// Built once during startup with the builder-style [`with_tool`] and
/// treated as read-only afterwards. Lookup is O(1) by name; the catalogue
/// preserves registration order.
///
/// [`with_tool`]: InMemoryToolRegistry::with_tool
///
/// # Example
///
/// ```rust
/// use filedeck_tools::{InMemoryToolRegistry, ToolRegistry};
/// use filedeck_core::{ExecutionResult, Tool, ToolArguments, ToolCall};
/// use std::sync::Arc;
///
/// struct EchoTool;
///
/// impl Tool for EchoTool {
///     fn name(&self) -> &str { "echo" }
///     fn description(&self) -> &str { "Echo input back" }
///     fn input_schema(&self) -> serde_json::Value {
///         serde_json::json!({ "type": "object", "properties": {}, "required": [] })
///     }
///     fn call(&self, _arguments: &ToolArguments) -> ExecutionResult {
///         ExecutionResult::text("echo")
///     }
/// }
///
/// let registry = InMemoryToolRegistry::new().with_tool(Arc::new(EchoTool));
/// let result = registry.dispatch(&ToolCall::new("echo", ToolArguments::new()));
/// assert!(result.is_ok());
/// ```
#[derive(Clone, Default)]
pub struct InMemoryToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
    // Registration order, for a stable tool catalogue.
    order: Vec<String>,
}

impl InMemoryToolRegistry {
    /// Create a new empty tool registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tool to the registry using the builder pattern.
    ///
    /// The tool registers under its own [`Tool::name`]. Registering a second
    /// tool with the same name replaces the first without changing the
    /// catalogue position.
    pub fn with_tool(mut self, tool: Arc<dyn Tool>) -> Self {
        let name = tool.name().to_string();
        if self.tools.insert(name.clone(), tool).is_none() {
            self.order.push(name);
        }
        self
    }

    /// Get a tool by name.
    pub fn get_tool(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// All registered tool names, in registration order.
    pub fn tool_names(&self) -> Vec<String> {
        self.order.clone()
    }

    /// The number of tools registered.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl ToolRegistry for InMemoryToolRegistry {
    fn dispatch(&self, call: &ToolCall) -> Result<ExecutionResult, DispatchError> {
        let tool = self
            .tools
            .get(&call.name)
            .ok_or_else(|| DispatchError::UnknownTool {
                name: call.name.clone(),
            })?;

        tracing::debug!(tool = %call.name, "dispatching tool call");
        Ok(tool.call(&call.arguments))
    }

    fn descriptors(&self) -> Vec<ToolDescriptor> {
        self.order
            .iter()
            .filter_map(|name| self.tools.get(name))
            .map(|tool| tool.descriptor())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filedeck_core::ToolArguments;

    struct UppercaseTool;

    impl Tool for UppercaseTool {
        fn name(&self) -> &str {
            "uppercase"
        }

        fn description(&self) -> &str {
            "Uppercase the text argument"
        }

        fn input_schema(&self) -> serde_json::Value {
            serde_json::json!({
                "type": "object",
                "properties": { "text": { "type": "string" } },
                "required": ["text"]
            })
        }

        fn call(&self, arguments: &ToolArguments) -> ExecutionResult {
            match arguments.require("text") {
                Ok(text) => ExecutionResult::text(text.to_uppercase()),
                Err(reason) => ExecutionResult::failed(reason),
            }
        }
    }

    struct ReverseTool;

    impl Tool for ReverseTool {
        fn name(&self) -> &str {
            "reverse"
        }

        fn description(&self) -> &str {
            "Reverse the text argument"
        }

        fn input_schema(&self) -> serde_json::Value {
            serde_json::json!({
                "type": "object",
                "properties": { "text": { "type": "string" } },
                "required": ["text"]
            })
        }

        fn call(&self, arguments: &ToolArguments) -> ExecutionResult {
            match arguments.require("text") {
                Ok(text) => ExecutionResult::text(text.chars().rev().collect::<String>()),
                Err(reason) => ExecutionResult::failed(reason),
            }
        }
    }

    fn call(name: &str, text: &str) -> ToolCall {
        ToolCall::new(name, ToolArguments::new().with("text", text))
    }

    #[test]
    fn registry_dispatches_to_correct_tool() {
        let registry = InMemoryToolRegistry::new()
            .with_tool(Arc::new(UppercaseTool))
            .with_tool(Arc::new(ReverseTool));

        let upper = registry.dispatch(&call("uppercase", "filedeck")).unwrap();
        let reversed = registry.dispatch(&call("reverse", "filedeck")).unwrap();

        assert_eq!(upper.content().unwrap()[0].text, "FILEDECK");
        assert_eq!(reversed.content().unwrap()[0].text, "kcedelif");
    }

    #[test]
    fn unknown_tool_is_a_hard_failure() {
        let registry = InMemoryToolRegistry::new().with_tool(Arc::new(UppercaseTool));

        let err = registry
            .dispatch(&call("delete_everything", ""))
            .unwrap_err();
        assert_eq!(
            err,
            filedeck_core::DispatchError::UnknownTool {
                name: "delete_everything".to_string()
            }
        );
    }

    #[test]
    fn descriptors_preserve_registration_order() {
        let registry = InMemoryToolRegistry::new()
            .with_tool(Arc::new(UppercaseTool))
            .with_tool(Arc::new(ReverseTool));

        let names: Vec<_> = registry
            .descriptors()
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, vec!["uppercase", "reverse"]);
        assert_eq!(registry.tool_names(), names);
    }

    #[test]
    fn registry_len_and_is_empty() {
        let empty = InMemoryToolRegistry::new();
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);

        let registry = InMemoryToolRegistry::new()
            .with_tool(Arc::new(UppercaseTool))
            .with_tool(Arc::new(ReverseTool));
        assert!(!registry.is_empty());
        assert_eq!(registry.len(), 2);
    }
}
