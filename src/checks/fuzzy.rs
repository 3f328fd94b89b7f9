// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Implementation of the `fuzzy-messages` check.

use std::io;

use crate::catalog::{file::CatalogFile, line::has_fuzzy_flag};
use crate::checker::{Checker, FileCheck};

pub struct FuzzyCheck;

impl FileCheck for FuzzyCheck {
    fn name(&self) -> &'static str {
        "fuzzy-messages"
    }

    /// Check for fuzzy messages.
    ///
    /// Each flag comment containing `fuzzy` is reported, including the ones of
    /// obsolete messages.
    ///
    /// Reported:
    /// ```text
    /// #, fuzzy
    /// msgid "this is a test"
    /// msgstr "mauvaise traduction"
    /// ```
    ///
    /// Not reported:
    /// ```text
    /// msgid "this is a test"
    /// msgstr "ceci est un test"
    /// ```
    ///
    /// Diagnostics reported:
    /// - `Found fuzzy message`
    fn check_file(&self, checker: &mut Checker, file: &mut CatalogFile) -> io::Result<()> {
        let fuzzy_lines: Vec<usize> = file
            .lines()
            .iter()
            .enumerate()
            .filter(|(_, line)| has_fuzzy_flag(line))
            .map(|(idx, _)| idx + 1)
            .collect();
        for line_number in fuzzy_lines {
            checker.report_line(line_number, "Found fuzzy message".to_string());
        }
        Ok(())
    }
}
