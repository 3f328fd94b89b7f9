// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Implementation of the `obsolete-messages` check.

use std::io;

use crate::catalog::{file::CatalogFile, obsolete::obsolete_runs};
use crate::checker::{Checker, FileCheck};

pub struct ObsoleteCheck;

impl FileCheck for ObsoleteCheck {
    fn name(&self) -> &'static str {
        "obsolete-messages"
    }

    /// Check for obsolete messages.
    ///
    /// Consecutive obsolete lines are one obsolete message, reported on its first line.
    ///
    /// Reported:
    /// ```text
    /// #~ msgid "this is a test"
    /// #~ msgstr "ceci est un test"
    /// ```
    ///
    /// Not reported:
    /// ```text
    /// msgid "this is a test"
    /// msgstr "ceci est un test"
    /// ```
    ///
    /// Diagnostics reported:
    /// - `Found obsolete message`
    fn check_file(&self, checker: &mut Checker, file: &mut CatalogFile) -> io::Result<()> {
        for line_number in obsolete_runs(file.lines()) {
            checker.report_line(line_number, "Found obsolete message".to_string());
        }
        Ok(())
    }
}
