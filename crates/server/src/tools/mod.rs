//! Tool definitions and the executor that adapts tool calls to the domain
//! services.
//!
//! Four tools are exposed:
//!
//! - `queryShoppingCart` (read)
//! - `queryOrderStatus` (read)
//! - `queryShippingInfo` (read)
//! - `sendEmailNotification` (side-effecting, audited)
//!
//! Every invocation returns a JSON-serialized result envelope; no error is
//! allowed to propagate past this layer as a fault.

mod definitions;
mod executor;

use serde::Serialize;

pub use definitions::all_tools;
pub use executor::ToolExecutor;

/// A tool definition exposed to agent callers.
#[derive(Debug, Clone, Serialize)]
pub struct Tool {
    /// Name of the tool.
    pub name: String,
    /// Description of what the tool does.
    pub description: String,
    /// JSON Schema for the tool's input parameters.
    pub input_schema: serde_json::Value,
    /// Whether invoking the tool mutates state (internal).
    #[serde(skip)]
    pub has_side_effects: bool,
}

/// Get a tool by name.
#[must_use]
pub fn get_tool_by_name(name: &str) -> Option<Tool> {
    all_tools().into_iter().find(|t| t.name == name)
}

/// Get tool names from a list of tools.
#[must_use]
pub fn get_tool_names(tools: &[Tool]) -> Vec<&str> {
    tools.iter().map(|t| t.name.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_exposes_the_four_tools() {
        let tools = all_tools();
        assert_eq!(
            get_tool_names(&tools),
            vec![
                "queryShoppingCart",
                "queryOrderStatus",
                "queryShippingInfo",
                "sendEmailNotification"
            ]
        );
    }

    #[test]
    fn only_the_email_tool_has_side_effects() {
        for tool in all_tools() {
            assert_eq!(tool.has_side_effects, tool.name == "sendEmailNotification");
        }
    }

    #[test]
    fn lookup_by_name() {
        assert!(get_tool_by_name("queryOrderStatus").is_some());
        assert!(get_tool_by_name("dropAllTables").is_none());
    }

    #[test]
    fn schemas_declare_required_fields() {
        let email = get_tool_by_name("sendEmailNotification").expect("registered");
        let required = email.input_schema["required"]
            .as_array()
            .expect("required array");
        for field in ["toEmail", "subject", "content"] {
            assert!(required.iter().any(|v| v == field), "{field} must be required");
        }
    }
}
