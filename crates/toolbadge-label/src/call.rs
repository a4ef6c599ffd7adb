//! Typed view of a tool invocation's argument bag.
//!
//! The producer hands over `args` as untyped JSON. [`ToolCall::parse`] keys the
//! bag by tool name and keeps only the fields each tool recognizes; a field
//! that is missing or not a string is simply `None`. [`ToolCall::action`] then
//! resolves the call to a single [`FileAction`], or `None` when nothing
//! meaningful can be said about it.

use serde_json::Value;

use crate::path::extract_filename;

/// Tool name of the text editor tool (`create`, `str_replace`, `insert`, `view`).
pub const STR_REPLACE_EDITOR: &str = "str_replace_editor";
/// Tool name of the file manager tool (`rename`, `delete`).
pub const FILE_MANAGER: &str = "file_manager";

/// Sub-command of the `str_replace_editor` tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorCommand<'a> {
    Create,
    StrReplace,
    Insert,
    View,
    Other(&'a str),
}

impl<'a> EditorCommand<'a> {
    pub fn parse(command: &'a str) -> Self {
        match command {
            "create" => Self::Create,
            "str_replace" => Self::StrReplace,
            "insert" => Self::Insert,
            "view" => Self::View,
            other => Self::Other(other),
        }
    }
}

/// Sub-command of the `file_manager` tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileManagerCommand<'a> {
    Rename,
    Delete,
    Other(&'a str),
}

impl<'a> FileManagerCommand<'a> {
    pub fn parse(command: &'a str) -> Self {
        match command {
            "rename" => Self::Rename,
            "delete" => Self::Delete,
            other => Self::Other(other),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditorArgs<'a> {
    pub command: Option<EditorCommand<'a>>,
    pub path: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileManagerArgs<'a> {
    pub command: Option<FileManagerCommand<'a>>,
    pub path: Option<&'a str>,
    pub new_path: Option<&'a str>,
}

/// A tool invocation narrowed to the tools a label can be derived for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolCall<'a> {
    StrReplaceEditor(EditorArgs<'a>),
    FileManager(FileManagerArgs<'a>),
    Unrecognized,
}

impl<'a> ToolCall<'a> {
    /// Narrow a raw `(tool_name, args)` pair.
    pub fn parse(tool_name: &str, args: &'a Value) -> Self {
        match tool_name {
            STR_REPLACE_EDITOR => Self::StrReplaceEditor(EditorArgs {
                command: command_field(args).map(EditorCommand::parse),
                path: str_field(args, "path"),
            }),
            FILE_MANAGER => Self::FileManager(FileManagerArgs {
                command: command_field(args).map(FileManagerCommand::parse),
                path: str_field(args, "path"),
                new_path: str_field(args, "new_path"),
            }),
            _ => Self::Unrecognized,
        }
    }

    /// Canonical tool name, or `None` for unrecognized tools.
    pub fn tool_name(&self) -> Option<&'static str> {
        match self {
            Self::StrReplaceEditor(_) => Some(STR_REPLACE_EDITOR),
            Self::FileManager(_) => Some(FILE_MANAGER),
            Self::Unrecognized => None,
        }
    }

    /// Resolve the call to the file action it describes.
    ///
    /// Returns `None` when the target filename is empty, the command is
    /// missing, or the tool/command pair has no dedicated label.
    pub fn action(&self) -> Option<FileAction<'a>> {
        match *self {
            Self::StrReplaceEditor(EditorArgs { command, path }) => {
                let file = non_empty(extract_filename(path))?;
                Some(match command? {
                    EditorCommand::Create => FileAction::Create(file),
                    EditorCommand::StrReplace | EditorCommand::Insert => FileAction::Edit(file),
                    EditorCommand::View => FileAction::View(file),
                    EditorCommand::Other(_) => FileAction::Modify(file),
                })
            }
            Self::FileManager(FileManagerArgs {
                command,
                path,
                new_path,
            }) => {
                let file = non_empty(extract_filename(path))?;
                match command? {
                    FileManagerCommand::Rename => Some(FileAction::Rename {
                        from: file,
                        to: non_empty(extract_filename(new_path)),
                    }),
                    FileManagerCommand::Delete => Some(FileAction::Delete(file)),
                    FileManagerCommand::Other(_) => None,
                }
            }
            Self::Unrecognized => None,
        }
    }
}

/// One labelled operation on a file, carrying bare (untruncated) filenames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction<'a> {
    Create(&'a str),
    Edit(&'a str),
    View(&'a str),
    Modify(&'a str),
    Rename { from: &'a str, to: Option<&'a str> },
    Delete(&'a str),
}

fn str_field<'a>(args: &'a Value, key: &str) -> Option<&'a str> {
    args.get(key).and_then(|v| v.as_str())
}

fn command_field(args: &Value) -> Option<&str> {
    str_field(args, "command").and_then(non_empty)
}

fn non_empty(s: &str) -> Option<&str> {
    (!s.is_empty()).then_some(s)
}
