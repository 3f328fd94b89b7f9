// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Implementation of the `untranslated-messages` check.

use std::{error::Error, io};

use crate::catalog::{entry::EntryScanner, file::CatalogFile};
use crate::checker::{Checker, FileCheck};

/// Minimum of translated messages required in each file.
#[derive(Debug, Clone, PartialEq)]
pub enum Minimum {
    /// Number of translated messages.
    Count(f64),
    /// Percentage of translated messages.
    Percent(f64),
}

impl Minimum {
    /// Parse a minimum: a number, optionally followed by `%`.
    pub fn parse(value: &str) -> Result<Self, Box<dyn Error>> {
        let (number, is_percent) = match value.trim().strip_suffix('%') {
            Some(number) => (number, true),
            None => (value.trim(), false),
        };
        let number: f64 = number
            .trim()
            .parse()
            .map_err(|_| format!("invalid minimum of translated messages: '{value}'"))?;
        if !number.is_finite() {
            return Err(format!("invalid minimum of translated messages: '{value}'").into());
        }
        Ok(if is_percent {
            Minimum::Percent(number)
        } else {
            Minimum::Count(number)
        })
    }

    /// Return the number of translated messages required for a file with `total` messages.
    #[allow(clippy::cast_precision_loss)]
    fn required(&self, total: usize) -> f64 {
        match self {
            Minimum::Count(count) => *count,
            Minimum::Percent(pct) => total as f64 / 100.0 * pct,
        }
    }
}

/// Format a percentage with at most 3 decimals.
fn format_percent(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    format!("{rounded}")
}

#[derive(Default)]
pub struct UntranslatedCheck {
    /// Minimum and its text as given on command line.
    pub min: Option<(Minimum, String)>,
}

impl UntranslatedCheck {
    /// Build the check with an optional minimum (`N` or `N%`).
    pub fn new(min: Option<&str>) -> Result<Self, Box<dyn Error>> {
        let min = match min {
            Some(value) => Some((Minimum::parse(value)?, value.to_string())),
            None => None,
        };
        Ok(Self { min })
    }
}

impl FileCheck for UntranslatedCheck {
    fn name(&self) -> &'static str {
        "untranslated-messages"
    }

    /// Check for untranslated messages (the header entry is ignored).
    ///
    /// Without minimum, each untranslated message is reported:
    /// ```text
    /// msgid "this is a test"
    /// msgstr ""
    /// ```
    ///
    /// With a minimum, the file is reported if it has fewer translated messages than
    /// required.
    ///
    /// Diagnostics reported:
    /// - `Untranslated message`
    /// - `Lower percent of translation (#) than minimum required (#%)`
    /// - `Lower number of messages translated (#) than required (#)`
    #[allow(clippy::cast_precision_loss)]
    fn check_file(&self, checker: &mut Checker, file: &mut CatalogFile) -> io::Result<()> {
        let mut total = 0;
        let mut untranslated_lines = Vec::new();
        for entry in EntryScanner::new(file.lines()).filter(|entry| !entry.header) {
            total += 1;
            if let Some(line_number) = entry.untranslated_line {
                untranslated_lines.push(line_number);
            }
        }
        let Some((min, min_text)) = &self.min else {
            for line_number in untranslated_lines {
                checker.report_line(line_number, "Untranslated message".to_string());
            }
            return Ok(());
        };
        let translated = total - untranslated_lines.len();
        if min.required(total) <= translated as f64 {
            return Ok(());
        }
        match min {
            Minimum::Percent(_) => {
                // The percentage displayed is never lower than 100.
                let pct = f64::max(100.0, translated as f64 / total.max(1) as f64 * 100.0);
                checker.report_file(format!(
                    "Lower percent of translation ({}) than minimum required ({min_text})",
                    format_percent(pct),
                ));
            }
            Minimum::Count(_) => {
                checker.report_file(format!(
                    "Lower number of messages translated ({translated}) than required ({min_text})"
                ));
            }
        }
        Ok(())
    }
}
