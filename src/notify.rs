// src/notify.rs

/// Toasts disappear on their own after this long.
pub const DISMISS_AFTER_MS: u64 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
    Warning,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
            NotificationKind::Warning => "warning",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            NotificationKind::Success => "#4CAF50",
            NotificationKind::Error => "#F44336",
            NotificationKind::Info => "#2196F3",
            NotificationKind::Warning => "#FF9800",
        }
    }
}

/// Fire-and-forget message rendered as a toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Warning)
    }
}
