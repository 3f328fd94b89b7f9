// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Diagnostic for PO files.

use std::path::{Path, PathBuf};

use serde::Serialize;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub path: PathBuf,
    pub check: &'static str,
    #[serde(rename = "line")]
    pub line_number: Option<usize>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Diagnostic {
    /// Create a new `Diagnostic` for a whole file.
    pub fn new(path: &Path, check: &'static str, message: String) -> Self {
        Self {
            path: PathBuf::from(path),
            check,
            message,
            ..Default::default()
        }
    }

    /// Set the line number (1-based) of the diagnostic.
    #[must_use]
    pub fn with_line(mut self, line_number: usize) -> Self {
        self.line_number = Some(line_number);
        self
    }

    /// Set extra details displayed after the location.
    #[must_use]
    pub fn with_detail(mut self, detail: String) -> Self {
        self.detail = Some(detail);
        self
    }
}

impl std::fmt::Display for Diagnostic {
    /// Format the `Diagnostic` on a single line: `<message> at <path>:<line> (<detail>)`.
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} at {}", self.message, self.path.display())?;
        if let Some(line_number) = self.line_number {
            write!(f, ":{line_number}")?;
        }
        if let Some(detail) = &self.detail {
            write!(f, " ({detail})")?;
        }
        Ok(())
    }
}
