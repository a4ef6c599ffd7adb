//! The badge surface handed to a renderer: label, loading flags and
//! accessibility description.

use toolbadge_types::{BadgeStatus, InvocationState, ToolInvocation};

use crate::config::LabelConfig;
use crate::message::generate_message_with;

/// Compute the full badge for `invocation` with default settings.
pub fn describe(invocation: &ToolInvocation) -> BadgeStatus {
    describe_with(invocation, &LabelConfig::default())
}

/// Compute the full badge for `invocation`.
///
/// `is_completed` requires both the completed state and a result payload, so a
/// completed invocation without a result is neither loading nor completed.
pub fn describe_with(invocation: &ToolInvocation, config: &LabelConfig) -> BadgeStatus {
    let message = generate_message_with(&invocation.tool_name, invocation.args.as_ref(), config);
    let is_loading = invocation.state == InvocationState::Pending;
    let is_completed = invocation.state == InvocationState::Completed && invocation.has_result();
    let accessibility_label = accessibility_label(&message, is_loading);

    tracing::debug!(
        tool = %invocation.tool_name,
        state = %invocation.state,
        %message,
        "Described tool invocation"
    );

    BadgeStatus {
        message,
        is_loading,
        is_completed,
        accessibility_label,
    }
}

/// `"<message> - in progress"` while loading, `"<message> - completed"` otherwise.
pub fn accessibility_label(message: &str, is_loading: bool) -> String {
    let suffix = if is_loading { "in progress" } else { "completed" };
    format!("{message} - {suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_app() -> serde_json::Value {
        json!({"command": "create", "path": "/App.jsx"})
    }

    #[test]
    fn pending_invocation_is_loading() {
        let status = describe(&ToolInvocation::pending("str_replace_editor", Some(create_app())));
        assert_eq!(status.message, "Creating App.jsx");
        assert!(status.is_loading);
        assert!(!status.is_completed);
        assert_eq!(status.accessibility_label, "Creating App.jsx - in progress");
    }

    #[test]
    fn completed_invocation_with_result() {
        let inv = ToolInvocation::completed(
            "str_replace_editor",
            Some(create_app()),
            json!({"success": true}),
        );
        let status = describe(&inv);
        assert!(!status.is_loading);
        assert!(status.is_completed);
        assert_eq!(status.accessibility_label, "Creating App.jsx - completed");
    }

    #[test]
    fn completed_without_result_is_not_marked_completed() {
        let mut inv = ToolInvocation::pending("str_replace_editor", Some(create_app()));
        inv.state = InvocationState::Completed;
        let status = describe(&inv);
        assert!(!status.is_loading);
        assert!(!status.is_completed);
        assert_eq!(status.accessibility_label, "Creating App.jsx - completed");
    }

    #[test]
    fn default_label_still_gets_a_description() {
        let status = describe(&ToolInvocation::pending("unknown_tool", None));
        assert_eq!(status.message, "File operation");
        assert_eq!(status.accessibility_label, "File operation - in progress");
    }

    #[test]
    fn accessibility_label_suffixes() {
        assert_eq!(accessibility_label("Deleting a.ts", true), "Deleting a.ts - in progress");
        assert_eq!(accessibility_label("Deleting a.ts", false), "Deleting a.ts - completed");
    }
}
