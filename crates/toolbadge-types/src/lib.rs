//! Shared types and errors for toolbadge.
//!
//! This crate provides the data model used across the other toolbadge crates:
//! - `ToolInvocation`: one recorded tool call as handed over by the producer
//! - `InvocationState`: whether the call is still running or has a result
//! - `BadgeStatus`: the computed label surface handed to a renderer
//! - `BadgeError`: errors raised while decoding producer data or config

use serde::{Deserialize, Serialize};

/// Unified error type for the toolbadge decode boundary.
///
/// Label computation itself never fails; these errors only arise when reading
/// invocations or configuration from outside the process.
#[derive(Debug, thiserror::Error)]
pub enum BadgeError {
    #[error("Invalid tool invocation at index {index}: {message}")]
    InvalidInvocation { index: usize, message: String },

    #[error("Unknown invocation state '{0}'")]
    UnknownState(String),

    #[error("Invalid label config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A convenience alias for `Result<T, BadgeError>`.
pub type Result<T> = std::result::Result<T, BadgeError>;

// ---------------------------------------------------------------------------
// InvocationState
// ---------------------------------------------------------------------------

/// Lifecycle state of a tool invocation.
///
/// Producers that speak in terms of `call`/`result` are accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvocationState {
    #[serde(alias = "call")]
    Pending,
    #[serde(alias = "result")]
    Completed,
}

impl InvocationState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }
}

impl std::fmt::Display for InvocationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for InvocationState {
    type Err = BadgeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pending" | "call" => Ok(Self::Pending),
            "completed" | "result" => Ok(Self::Completed),
            other => Err(BadgeError::UnknownState(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// ToolInvocation
// ---------------------------------------------------------------------------

/// A single tool invocation as recorded in a chat transcript.
///
/// `args` is the raw, tool-specific argument bag. A JSON `null` for `args` or
/// `result` decodes to `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolInvocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
    pub tool_name: String,
    #[serde(default)]
    pub args: Option<serde_json::Value>,
    pub state: InvocationState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
}

impl ToolInvocation {
    /// Create a pending invocation with no result.
    pub fn pending(tool_name: impl Into<String>, args: Option<serde_json::Value>) -> Self {
        Self {
            tool_call_id: None,
            tool_name: tool_name.into(),
            args,
            state: InvocationState::Pending,
            result: None,
        }
    }

    /// Create a completed invocation carrying `result`.
    pub fn completed(
        tool_name: impl Into<String>,
        args: Option<serde_json::Value>,
        result: serde_json::Value,
    ) -> Self {
        Self {
            tool_call_id: None,
            tool_name: tool_name.into(),
            args,
            state: InvocationState::Completed,
            result: Some(result),
        }
    }

    /// Returns `true` when a non-null result payload is attached.
    pub fn has_result(&self) -> bool {
        matches!(&self.result, Some(v) if !v.is_null())
    }
}

// ---------------------------------------------------------------------------
// BadgeStatus
// ---------------------------------------------------------------------------

/// Everything a renderer needs to draw the badge for one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeStatus {
    pub message: String,
    pub is_loading: bool,
    pub is_completed: bool,
    pub accessibility_label: String,
}
