// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Scanner of PO entries.

use serde::Serialize;

use crate::catalog::{
    line::{LineKind, MSGID_PREFIX, has_fuzzy_flag, is_blank, is_empty_msgid},
    metadata::find_header_entry,
};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Line number of the `msgid` (1-based).
    pub line_number: usize,
    /// The `msgid` is the empty string.
    pub empty_msgid: bool,
    /// This entry is the header entry (metadata).
    pub header: bool,
    /// Line number of the empty `msgstr ""` if the entry is not translated.
    pub untranslated_line: Option<usize>,
    /// A `fuzzy` flag precedes the entry.
    pub fuzzy: bool,
}

impl Entry {
    /// Return `true` if the entry has a non-empty translation.
    #[must_use]
    pub fn is_translated(&self) -> bool {
        self.untranslated_line.is_none()
    }
}

/// Iterator over the entries of a PO file, in file order.
///
/// An entry starts on each `msgid "` line; obsolete entries (`#~ msgid`) are not
/// returned.
pub struct EntryScanner<'a, S> {
    lines: &'a [S],
    pos: usize,
    header: Option<usize>,
    pending_fuzzy: bool,
}

impl<'a, S: AsRef<str>> EntryScanner<'a, S> {
    #[must_use]
    pub fn new(lines: &'a [S]) -> Self {
        Self {
            lines,
            pos: 0,
            header: find_header_entry(lines),
            pending_fuzzy: false,
        }
    }

    /// Return `true` if the empty `msgstr ""` at `pos` is followed by end of data or a
    /// blank line.
    fn is_empty_translation_at(&self, pos: usize) -> bool {
        self.lines
            .get(pos + 1)
            .is_none_or(|next| is_blank(next.as_ref()))
    }
}

impl<S: AsRef<str>> Iterator for EntryScanner<'_, S> {
    type Item = Entry;

    fn next(&mut self) -> Option<Self::Item> {
        let mut entry: Option<Entry> = None;
        while let Some(line) = self.lines.get(self.pos) {
            let line = line.as_ref();
            match LineKind::of(line) {
                LineKind::EntryStart => {
                    if entry.is_some() {
                        // This line starts the next entry.
                        return entry;
                    }
                    entry = Some(Entry {
                        line_number: self.pos + 1,
                        empty_msgid: is_empty_msgid(line),
                        header: self.header == Some(self.pos),
                        untranslated_line: None,
                        fuzzy: self.pending_fuzzy,
                    });
                    self.pending_fuzzy = false;
                }
                LineKind::EmptyTranslationStart => {
                    if self.is_empty_translation_at(self.pos)
                        && let Some(current) = entry.as_mut()
                        && current.untranslated_line.is_none()
                    {
                        current.untranslated_line = Some(self.pos + 1);
                    }
                }
                LineKind::Flag => {
                    if has_fuzzy_flag(line) {
                        self.pending_fuzzy = true;
                    }
                }
                LineKind::Obsolete => {
                    // Flags before an obsolete entry belong to it.
                    self.pending_fuzzy = false;
                }
                LineKind::ExtractedComment | LineKind::Plain => {}
            }
            self.pos += 1;
        }
        entry
    }
}

/// Count the lines starting a message (`msgid "`), the header entry included.
#[must_use]
pub fn count_msgid_lines<S: AsRef<str>>(lines: &[S]) -> usize {
    lines
        .iter()
        .filter(|line| line.as_ref().starts_with(MSGID_PREFIX))
        .count()
}
