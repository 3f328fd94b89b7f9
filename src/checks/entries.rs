// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Implementation of the `check-entries` check: maximum number of messages and lines.

use std::{io, path::Path};

use path_absolutize::Absolutize;

use crate::catalog::{entry::count_msgid_lines, file::CatalogFile};
use crate::checker::{Checker, FileCheck};
use crate::diagnostic::Diagnostic;

#[derive(Debug, Default)]
pub struct EntriesCheck {
    pub max_messages: Option<i64>,
    pub max_lines: Option<i64>,
}

impl EntriesCheck {
    /// Build the check; return `None` if no maximum is given.
    pub fn new(max_messages: Option<i64>, max_lines: Option<i64>) -> Option<Self> {
        if max_messages.is_none() && max_lines.is_none() {
            return None;
        }
        Some(Self {
            max_messages,
            max_lines,
        })
    }

    /// Report a file exceeding a maximum; the absolute path of the file is displayed.
    fn report_exceeded(checker: &mut Checker, path: &Path, message: String) -> io::Result<()> {
        let path = path.absolutize()?;
        let diagnostic = Diagnostic::new(&path, "check-entries", message);
        checker.report(diagnostic);
        Ok(())
    }
}

/// Convert a count to `i64`, saturating on (theoretical) overflow.
fn to_i64(count: usize) -> i64 {
    i64::try_from(count).unwrap_or(i64::MAX)
}

impl FileCheck for EntriesCheck {
    fn name(&self) -> &'static str {
        "check-entries"
    }

    /// Check the number of messages and lines of the file.
    ///
    /// The number of messages is the number of lines starting with `msgid "`, minus one
    /// for the header entry.
    ///
    /// Diagnostics reported:
    /// - `More messages (#) than allowed (#)`
    /// - `More lines (#) than allowed (#)`
    fn check_file(&self, checker: &mut Checker, file: &mut CatalogFile) -> io::Result<()> {
        if let Some(max_messages) = self.max_messages {
            let messages = to_i64(count_msgid_lines(file.lines())) - 1;
            if messages > max_messages {
                Self::report_exceeded(
                    checker,
                    &file.path,
                    format!("More messages ({messages}) than allowed ({max_messages})"),
                )?;
            }
        }
        if let Some(max_lines) = self.max_lines {
            let lines = to_i64(file.lines().len());
            if lines > max_lines {
                Self::report_exceeded(
                    checker,
                    &file.path,
                    format!("More lines ({lines}) than allowed ({max_lines})"),
                )?;
            }
        }
        Ok(())
    }
}
