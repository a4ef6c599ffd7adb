//! Label composition for a single tool invocation.

use serde_json::Value;

use crate::call::{FileAction, ToolCall};
use crate::config::LabelConfig;
use crate::truncation::truncate_filename;

/// Label used whenever nothing more specific can be derived.
pub const DEFAULT_LABEL: &str = "File operation";

/// Derive the display label for `tool_name` invoked with `args`.
///
/// Never fails: absent args, unknown tools, unknown commands and empty paths
/// all produce [`DEFAULT_LABEL`].
pub fn generate_message(tool_name: &str, args: Option<&Value>) -> String {
    generate_message_with(tool_name, args, &LabelConfig::default())
}

/// Like [`generate_message`], truncating filenames to `config.max_filename_len`.
pub fn generate_message_with(tool_name: &str, args: Option<&Value>, config: &LabelConfig) -> String {
    let Some(args) = args.filter(|a| !a.is_null()) else {
        tracing::trace!(tool = tool_name, "No args, using default label");
        return DEFAULT_LABEL.to_string();
    };

    match ToolCall::parse(tool_name, args).action() {
        Some(action) => action.label(config.max_filename_len),
        None => {
            tracing::trace!(tool = tool_name, "No file action derivable, using default label");
            DEFAULT_LABEL.to_string()
        }
    }
}

impl FileAction<'_> {
    /// Render this action as a label, truncating each filename to `max_len`.
    pub fn label(&self, max_len: usize) -> String {
        let name = |f: &str| truncate_filename(f, max_len).into_owned();
        match *self {
            FileAction::Create(file) => format!("Creating {}", name(file)),
            FileAction::Edit(file) => format!("Editing {}", name(file)),
            FileAction::View(file) => format!("Viewing {}", name(file)),
            FileAction::Modify(file) => format!("Modifying {}", name(file)),
            FileAction::Rename { from, to: Some(to) } => {
                format!("Renaming {} to {}", name(from), name(to))
            }
            FileAction::Rename { from, to: None } => format!("Renaming {}", name(from)),
            FileAction::Delete(file) => format!("Deleting {}", name(file)),
        }
    }
}
