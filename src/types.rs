//! Host-facing tool schema types.
//!
//! The hosting assistant consumes these definitions to learn which tools
//! exist and what JSON argument shapes they accept.

use serde::{Deserialize, Serialize};

/// Tool definition published to the host so it knows what's available.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Tool definition type; currently expected to be `"function"`.
    #[serde(rename = "type")]
    pub tool_type: String, // "function"
    /// Function schema published to the host.
    pub function: FunctionDefinition,
}

/// The schema of a callable function.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionDefinition {
    /// Exposed function/tool name.
    pub name: String,
    /// Natural-language description of tool behavior.
    pub description: String,
    /// JSON Schema object describing the parameters.
    pub parameters: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn definition_serializes_type_field_as_type() {
        let def = ToolDefinition {
            tool_type: "function".into(),
            function: FunctionDefinition {
                name: "tmux_list".into(),
                description: "list sessions".into(),
                parameters: serde_json::json!({"type": "object"}),
            },
        };
        let value = serde_json::to_value(&def).expect("serialize");
        assert_eq!(value["type"], "function");
        assert_eq!(value["function"]["name"], "tmux_list");
    }
}
