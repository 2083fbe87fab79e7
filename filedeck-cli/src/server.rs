//! Line-oriented JSON serve loop.
//!
//! One request per stdin line: `{ "tool_name": ..., "arguments": {...} }`.
//! The reserved name `list_tools` returns the tool catalogue. Handler
//! failures become a uniform single-message text response flagged with
//! `is_error`; unknown tools and malformed requests are hard `error`
//! responses.

use filedeck_core::{ExecutionResult, TextContent, ToolArguments, ToolCall, ToolDescriptor};
use filedeck_tools::{InMemoryToolRegistry, ToolRegistry};
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead, Write};

/// The reserved catalogue request name.
const LIST_TOOLS: &str = "list_tools";

#[derive(Debug, Deserialize)]
struct Request {
    tool_name: String,
    #[serde(default)]
    arguments: ToolArguments,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Response {
    Catalogue {
        tools: Vec<ToolDescriptor>,
    },
    Content {
        content: Vec<TextContent>,
        #[serde(skip_serializing_if = "std::ops::Not::not")]
        is_error: bool,
    },
    Error {
        error: String,
    },
}

/// Turn one request line into a response.
pub fn handle_line(registry: &InMemoryToolRegistry, line: &str) -> Response {
    let request: Request = match serde_json::from_str(line) {
        Ok(request) => request,
        Err(e) => {
            return Response::Error {
                error: format!("Malformed request: {e}"),
            };
        }
    };

    if request.tool_name == LIST_TOOLS {
        return Response::Catalogue {
            tools: registry.descriptors(),
        };
    }

    let call = ToolCall::new(request.tool_name, request.arguments);
    match registry.dispatch(&call) {
        Ok(ExecutionResult::Success { content }) => Response::Content {
            content,
            is_error: false,
        },
        Ok(ExecutionResult::Failure { reason }) => {
            tracing::warn!(tool = %call.name, reason = %reason, "tool call failed");
            Response::Content {
                content: vec![TextContent::new(reason.to_string())],
                is_error: true,
            }
        }
        Err(e) => Response::Error {
            error: e.to_string(),
        },
    }
}

/// Serve requests until the input is exhausted.
pub fn serve(
    registry: &InMemoryToolRegistry,
    reader: impl BufRead,
    mut writer: impl Write,
) -> io::Result<()> {
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = handle_line(registry, &line);
        let encoded = serde_json::to_string(&response).map_err(io::Error::other)?;
        writeln!(writer, "{encoded}")?;
        writer.flush()?;
    }

    Ok(())
}
