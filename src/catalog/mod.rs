// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Line-oriented model of PO files.

pub mod entry;
pub mod file;
pub mod line;
pub mod metadata;
pub mod obsolete;
