//! Status label derivation for tool invocations in a chat transcript.
//!
//! Provides `extract_filename` (path normalization), `truncate_filename`
//! (bounded display names), the typed `ToolCall` model, `generate_message`
//! (the label itself) and `describe` (the full `BadgeStatus` for a renderer).
//! Every function here is total and side-effect free.

pub mod call;
pub mod config;
pub mod message;
pub mod path;
pub mod status;
pub mod truncation;

pub use call::{EditorArgs, EditorCommand, FileAction, FileManagerArgs, FileManagerCommand, ToolCall};
pub use config::LabelConfig;
pub use message::{generate_message, generate_message_with, DEFAULT_LABEL};
pub use path::extract_filename;
pub use status::{accessibility_label, describe, describe_with};
pub use truncation::{truncate_filename, DEFAULT_MAX_FILENAME_LEN};

pub use toolbadge_types::{BadgeError, BadgeStatus, InvocationState, ToolInvocation};
