// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Implementation of the `lreplace-extracted-comments` check.

use std::io;

use crate::catalog::{
    file::CatalogFile,
    line::{EXTRACTED_COMMENT_PREFIX, LineKind},
};
use crate::checker::{Checker, FileCheck};

/// Prefix of translator comments extracted by Django, followed by one whitespace.
pub const DJANGO_TRANSLATORS: &str = "Translators:";

#[derive(Debug)]
pub struct ExtractedCommentsCheck {
    pub pattern: String,
    pub replacement: String,
    /// Match `Translators:` followed by any whitespace instead of the literal pattern.
    pub django_translators: bool,
    pub dry_run: bool,
}

/// Strip `Translators:` and the whitespace after it (the line terminator is kept).
fn strip_translators(text: &str) -> Option<&str> {
    let rest = text.strip_prefix(DJANGO_TRANSLATORS)?;
    let mut chars = rest.chars();
    let ch = chars.next()?;
    (ch.is_whitespace() && ch != '\n' && ch != '\r').then_some(chars.as_str())
}

impl ExtractedCommentsCheck {
    /// Build the check; return `None` if the string to match or its replacement is missing.
    pub fn new(
        pattern: Option<&str>,
        replacement: Option<&str>,
        django_translators: bool,
        dry_run: bool,
    ) -> Option<Self> {
        let (pattern, replacement) = if django_translators {
            (DJANGO_TRANSLATORS, "")
        } else {
            (pattern?, replacement?)
        };
        Some(Self {
            pattern: pattern.to_string(),
            replacement: replacement.to_string(),
            django_translators,
            dry_run,
        })
    }

    /// Return the line with the beginning of the comment replaced, or `None` if the
    /// line is not an extracted comment starting with the string to match.
    fn replace_line(&self, line: &str) -> Option<String> {
        if LineKind::of(line) != LineKind::ExtractedComment {
            return None;
        }
        let text = line.strip_prefix(EXTRACTED_COMMENT_PREFIX)?;
        let rest = if self.django_translators {
            strip_translators(text)?
        } else {
            text.strip_prefix(self.pattern.as_str())?
        };
        Some(format!(
            "{EXTRACTED_COMMENT_PREFIX}{}{rest}",
            self.replacement
        ))
    }
}

impl FileCheck for ExtractedCommentsCheck {
    fn name(&self) -> &'static str {
        "lreplace-extracted-comments"
    }

    /// Replace the beginning of extracted comments.
    ///
    /// With `--match "Translators: " --replacement ""`:
    /// ```text
    /// #. Translators: Hello
    /// ```
    /// becomes:
    /// ```text
    /// #. Hello
    /// ```
    ///
    /// The file fails the check if at least one line is changed (or would be changed
    /// in dry run mode).
    ///
    /// Diagnostics reported (dry run only):
    /// - `Translator comment would be replaced`
    fn check_file(&self, checker: &mut Checker, file: &mut CatalogFile) -> io::Result<()> {
        let mut changed = false;
        let mut lines = Vec::with_capacity(file.lines().len());
        for (idx, line) in file.lines().iter().enumerate() {
            match self.replace_line(line) {
                Some(new_line) => {
                    if self.dry_run {
                        checker.notice_line(
                            idx + 1,
                            "Translator comment would be replaced".to_string(),
                        );
                    }
                    changed |= new_line != *line;
                    lines.push(new_line);
                }
                None => lines.push(line.clone()),
            }
        }
        if changed {
            checker.fail();
        }
        if !self.dry_run {
            file.replace_lines(lines);
            checker.persist(file)?;
        }
        Ok(())
    }
}
