// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Flash notification kinds and the class names they render with.

/// Class shared by every flash notification element.
pub const FLASH_CLASS: &str = "flash-message";
/// Class of the loader container.
pub const LOADER_CLASS: &str = "loader";
/// Class of the spinner inside the loader.
pub const SPINNER_CLASS: &str = "spinner";
/// Fixed loader caption.
pub const LOADER_LABEL: &str = "Processing...";

/// Visual intent of a flash notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Error,
    Success,
}

impl NotificationKind {
    /// Modifier class appended after [`FLASH_CLASS`].
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Error => "error",
            NotificationKind::Success => "success",
        }
    }

    /// Full class name, e.g. `flash-message error`.
    pub fn class_name(self) -> String {
        format!("{FLASH_CLASS} {}", self.as_str())
    }

    /// Parse the kind back out of a rendered class name.
    pub fn from_class_name(class_name: &str) -> Option<Self> {
        let mut parts = class_name.split_whitespace();
        if parts.next() != Some(FLASH_CLASS) {
            return None;
        }
        match parts.next() {
            Some("error") => Some(NotificationKind::Error),
            Some("success") => Some(NotificationKind::Success),
            _ => None,
        }
    }
}
