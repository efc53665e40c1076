use serde::Deserialize;

use crate::error::NavigatorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
}

/// A modal message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            title: title.into(),
            message: message.into(),
        }
    }
}

impl From<&NavigatorError> for Notice {
    fn from(err: &NavigatorError) -> Self {
        match err {
            NavigatorError::FileNotFound(_) => Notice::warning("File Not Found", err.to_string()),
            NavigatorError::NoEntryPoint(_) => Notice::info("No Index Found", err.to_string()),
            NavigatorError::InvalidAddress { .. } | NavigatorError::NotFileUrl(_) => {
                Notice::warning("Invalid Address", err.to_string())
            }
        }
    }
}

/// Toolbar intents, posted by the toolbar page as JSON over the webview IPC
/// channel, e.g. `{"cmd":"go","text":"docs/index.html"}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum Command {
    Back,
    Forward,
    Reload,
    Go { text: String },
    LoadOfflineSite,
    /// The toolbar page finished loading and wants the current address.
    Ready,
}

impl Command {
    pub fn from_ipc(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str(body)
    }
}
