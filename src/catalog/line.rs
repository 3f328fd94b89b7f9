// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Classification of PO file lines by their prefix.

pub const OBSOLETE_PREFIX: &str = "#~ ";
pub const EXTRACTED_COMMENT_PREFIX: &str = "#. ";
pub const FLAG_PREFIX: &str = "#,";
pub const MSGID_PREFIX: &str = "msgid \"";
pub const EMPTY_MSGID_PREFIX: &str = "msgid \"\"";
pub const EMPTY_MSGSTR_PREFIX: &str = "msgstr \"\"";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `#~ ` (obsolete entry).
    Obsolete,
    /// `#. ` (comment extracted from the source code).
    ExtractedComment,
    /// `#,` (flags like `fuzzy` or `c-format`).
    Flag,
    /// `msgid "` (start of an entry).
    EntryStart,
    /// `msgstr ""` (start of a translation that may be empty).
    EmptyTranslationStart,
    /// Any other line.
    Plain,
}

impl LineKind {
    /// Classify a line using its leading bytes only.
    ///
    /// Prefixes are tested in this order: `#~ `, `#. `, `#,`, `msgid "` and `msgstr ""`.
    #[must_use]
    pub fn of(line: &str) -> Self {
        if line.starts_with(OBSOLETE_PREFIX) {
            LineKind::Obsolete
        } else if line.starts_with(EXTRACTED_COMMENT_PREFIX) {
            LineKind::ExtractedComment
        } else if line.starts_with(FLAG_PREFIX) {
            LineKind::Flag
        } else if line.starts_with(MSGID_PREFIX) {
            LineKind::EntryStart
        } else if line.starts_with(EMPTY_MSGSTR_PREFIX) {
            LineKind::EmptyTranslationStart
        } else {
            LineKind::Plain
        }
    }
}

/// Return `true` if the line is empty or contains only whitespace.
#[must_use]
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Return `true` if the line is a quoted string (continuation of a message).
#[must_use]
pub fn is_quoted(line: &str) -> bool {
    line.starts_with('"')
}

/// Return `true` if the line starts an entry with an empty `msgid`.
#[must_use]
pub fn is_empty_msgid(line: &str) -> bool {
    line.starts_with(EMPTY_MSGID_PREFIX)
}

/// Return `true` if the line starts an empty translation (`msgstr ""`).
#[must_use]
pub fn is_empty_msgstr(line: &str) -> bool {
    line.starts_with(EMPTY_MSGSTR_PREFIX)
}

/// Return `true` if the line is a flag comment mentioning `fuzzy`.
///
/// The list of flags is not split: any occurrence of `fuzzy` in the line counts.
#[must_use]
pub fn has_fuzzy_flag(line: &str) -> bool {
    LineKind::of(line) == LineKind::Flag && line.contains("fuzzy")
}
