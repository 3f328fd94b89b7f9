// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Location of the metadata block (header entry) in a PO file.
//!
//! The metadata is the translation of the first entry, which has an empty `msgid`:
//!
//! ```text
//! msgid ""
//! msgstr ""
//! "Project-Id-Version: 1.2.3\n"
//! "Language: fr\n"
//! ```

use crate::catalog::line::{is_blank, is_empty_msgid, is_empty_msgstr, is_quoted};

/// Range of lines containing the metadata headers (0-based indexes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetadataBlock {
    /// Index of the `msgid ""` line of the header entry.
    pub header: usize,
    /// Index of the first quoted line of the block.
    pub start: usize,
    /// Index of the first line after the block (blank line or end of file).
    pub end: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metadata {
    /// No header entry at all.
    NoHeader,
    /// Header entry found (index of its `msgid ""` line), without metadata lines.
    Empty { header: usize },
    /// Header entry with metadata lines.
    Block(MetadataBlock),
}

/// A `Key: value` line of the metadata block.
#[derive(Debug, PartialEq, Eq)]
pub struct HeaderLine<'a> {
    /// Line number (1-based).
    pub line_number: usize,
    pub key: &'a str,
    pub value: String,
}

/// Return the index of the `msgid ""` line of the header entry.
///
/// Only the first `msgid ""` line directly followed by `msgstr ""` is considered.
#[must_use]
pub fn find_header_entry<S: AsRef<str>>(lines: &[S]) -> Option<usize> {
    lines.windows(2).position(|pair| {
        is_empty_msgid(pair[0].as_ref()) && is_empty_msgstr(pair[1].as_ref())
    })
}

/// Locate the metadata block in the lines of a PO file.
#[must_use]
pub fn locate<S: AsRef<str>>(lines: &[S]) -> Metadata {
    let Some(header) = find_header_entry(lines) else {
        return Metadata::NoHeader;
    };
    let start = header + 2;
    if !lines.get(start).is_some_and(|line| is_quoted(line.as_ref())) {
        return Metadata::Empty { header };
    }
    let end = lines[start..]
        .iter()
        .position(|line| is_blank(line.as_ref()))
        .map_or(lines.len(), |pos| start + pos);
    Metadata::Block(MetadataBlock { header, start, end })
}

/// Clean a header value: remove the line terminator, the closing quote and the
/// escaped newlines (`\n`).
fn clean_value(value: &str) -> String {
    let value = value.trim_end_matches(['\n', '\r']);
    let value = value.strip_suffix('"').unwrap_or(value);
    value.replace("\\n", "").replace('\n', "")
}

impl MetadataBlock {
    /// Return the 1-based line number of the `msgstr ""` line of the header entry.
    #[must_use]
    pub fn msgstr_line_number(&self) -> usize {
        self.header + 2
    }

    /// Return the 1-based line number of the first line of the block.
    #[must_use]
    pub fn first_line_number(&self) -> usize {
        self.start + 1
    }

    /// Return the `Key: value` lines of the block; lines without `": "` are skipped.
    #[must_use]
    pub fn headers<'a, S: AsRef<str>>(&self, lines: &'a [S]) -> Vec<HeaderLine<'a>> {
        lines[self.start..self.end]
            .iter()
            .enumerate()
            .filter_map(|(idx, line)| {
                let (key, value) = line.as_ref().split_once(": ")?;
                Some(HeaderLine {
                    line_number: self.start + idx + 1,
                    key: key.trim_start_matches('"'),
                    value: clean_value(value),
                })
            })
            .collect()
    }

    /// Return the lines with the block removed.
    #[must_use]
    pub fn remove_from<S: AsRef<str>>(&self, lines: &[S]) -> Vec<String> {
        lines[..self.start]
            .iter()
            .chain(lines[self.end..].iter())
            .map(|line| line.as_ref().to_string())
            .collect()
    }
}
