// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Checks applied to PO files, one per sub-command.

pub mod entries;
pub mod extracted_comments;
pub mod fuzzy;
pub mod metadata;
pub mod obsolete;
pub mod untranslated;
