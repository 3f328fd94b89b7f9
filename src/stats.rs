// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Statistics for PO files.

use std::{
    fmt,
    io,
    path::{Path, PathBuf},
};

use colored::Colorize;
use serde::Serialize;

use crate::args::{OutputFormat, StatsArgs};
use crate::catalog::{entry::EntryScanner, file::CatalogFile, obsolete::obsolete_runs};
use crate::checker::{EXIT_IO_ERROR, display_error};
use crate::dir::find_po_files;

/// Width of the progress bar, in characters.
const BAR_WIDTH: u64 = 20;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Entries {
    pub total: u64,
    pub translated: u64,
    pub fuzzy: u64,
    pub untranslated: u64,
    pub obsolete: u64,
}

#[derive(Debug, Default, Serialize)]
pub struct StatsFile {
    pub path: PathBuf,
    pub entries: Entries,
}

impl Entries {
    /// Count the entries of a file; the header entry is not counted.
    ///
    /// Fuzzy entries are not counted as translated or untranslated; each run of
    /// obsolete lines is one obsolete entry.
    #[must_use]
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut entries = Self::default();
        for entry in EntryScanner::new(lines).filter(|entry| !entry.header) {
            entries.total += 1;
            if entry.fuzzy {
                entries.fuzzy += 1;
            } else if entry.is_translated() {
                entries.translated += 1;
            } else {
                entries.untranslated += 1;
            }
        }
        entries.obsolete = obsolete_runs(lines).len() as u64;
        entries.total += entries.obsolete;
        entries
    }

    /// Return the percentage of `count` in the total, as integer.
    fn pct(&self, count: u64) -> u64 {
        if self.total == 0 {
            0
        } else {
            count * 100 / self.total
        }
    }

    /// Return the progress bar, with one color per status.
    fn bar(&self) -> String {
        let width = |count| usize::try_from(self.pct(count) * BAR_WIDTH / 100).unwrap_or(0);
        let translated = width(self.translated);
        let fuzzy = width(self.fuzzy);
        let untranslated = width(self.untranslated);
        let obsolete = usize::try_from(BAR_WIDTH)
            .unwrap_or(0)
            .saturating_sub(translated + fuzzy + untranslated);
        let translated = if self.translated == self.total {
            "█".repeat(translated).green()
        } else {
            "█".repeat(translated).green().dimmed()
        };
        format!(
            "{}{translated}{}{}{}{}",
            "[".dimmed(),
            "▒".repeat(fuzzy).yellow().dimmed(),
            " ".repeat(untranslated).red(),
            " ".repeat(obsolete).magenta(),
            "]".dimmed(),
        )
    }
}

impl fmt::Display for Entries {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} = {} {} + {} {} + {} {} + {} {}",
            self.bar(),
            self.total,
            self.translated.to_string().bright_green(),
            format!("({}%)", self.pct(self.translated)).green(),
            self.fuzzy.to_string().bright_yellow(),
            format!("({}%)", self.pct(self.fuzzy)).yellow(),
            self.untranslated.to_string().bright_red(),
            format!("({}%)", self.pct(self.untranslated)).red(),
            self.obsolete.to_string().bright_magenta(),
            format!("({}%)", self.pct(self.obsolete)).magenta(),
        )
    }
}

impl StatsFile {
    /// Read a PO file and compute its statistics.
    pub fn read(path: &Path) -> io::Result<Self> {
        let file = CatalogFile::read(path)?;
        Ok(Self {
            path: PathBuf::from(path),
            entries: Entries::from_lines(file.lines()),
        })
    }
}

/// Display statistics on stdout.
fn display_stats(stats: &[StatsFile], output: OutputFormat) {
    match output {
        OutputFormat::Human => {
            let width = stats
                .iter()
                .map(|s| s.path.as_os_str().len())
                .max()
                .unwrap_or(0);
            for stat in stats {
                println!("{:width$} {}", stat.path.display(), stat.entries);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(&stats).unwrap_or_default());
        }
    }
}

/// Compute and display statistics for all PO files, one line per file; return the
/// exit code.
pub fn run_stats(args: &StatsArgs) -> i32 {
    let mut stats = Vec::new();
    for path in find_po_files(&args.files) {
        match StatsFile::read(&path) {
            Ok(stat) => stats.push(stat),
            Err(err) => {
                display_stats(&stats, args.output);
                display_error(&io::Error::new(
                    err.kind(),
                    format!("{}: {err}", path.display()),
                ));
                return EXIT_IO_ERROR;
            }
        }
    }
    display_stats(&stats, args.output);
    0
}
