// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! File chosen through the native picker (UI-agnostic).

use std::path::{Path, PathBuf};

/// A file selected in a file input. Only the name is inspected by validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    /// Display name as reported by the picker (final path component).
    pub name: String,
    /// Original filesystem path, when the file came from disk.
    pub path: Option<PathBuf>,
}

impl SelectedFile {
    /// Build a selection carrying only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: None,
        }
    }

    /// Build a selection from a picked path; the name is its final component.
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            name,
            path: Some(path.to_path_buf()),
        }
    }

    /// Literal, case-sensitive suffix check on the file name.
    pub fn has_suffix(&self, suffix: &str) -> bool {
        self.name.ends_with(suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_path_uses_final_component() {
        let file = SelectedFile::from_path(Path::new("/data/reports/q3.xlsx"));

        assert_eq!(file.name, "q3.xlsx");
        assert_eq!(file.path, Some(PathBuf::from("/data/reports/q3.xlsx")));
    }

    #[test]
    fn suffix_check_is_case_sensitive() {
        assert!(SelectedFile::named("report.xlsx").has_suffix(".xlsx"));
        assert!(!SelectedFile::named("data.XLSX").has_suffix(".xlsx"));
        assert!(!SelectedFile::named("report.xlsx.txt").has_suffix(".xlsx"));
    }
}
