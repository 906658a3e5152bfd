use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of application errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    /// The session store could not be reached (no window, storage disabled, I/O).
    SessionUnavailable,
    /// A stored session value exists but is not a usable user record.
    SessionMalformed,
    Navigation,
    ThemeUnavailable,
    Config,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::SessionUnavailable => write!(f, "SessionUnavailable"),
            AppErrorKind::SessionMalformed => write!(f, "SessionMalformed"),
            AppErrorKind::Navigation => write!(f, "Navigation"),
            AppErrorKind::ThemeUnavailable => write!(f, "ThemeUnavailable"),
            AppErrorKind::Config => write!(f, "Config"),
        }
    }
}

/// Structured error shared by the view layer and its collaborators.
///
/// None of these are shown to the end user; the views log them and carry on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
}

impl AppError {
    pub fn session_unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::SessionUnavailable,
            message: message.into(),
        }
    }

    pub fn session_malformed(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::SessionMalformed,
            message: message.into(),
        }
    }

    pub fn navigation(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Navigation,
            message: message.into(),
        }
    }

    pub fn theme_unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::ThemeUnavailable,
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Config,
            message: message.into(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}
