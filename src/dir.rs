// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Directory utilities.

use std::path::{Path, PathBuf};

use colored::Colorize;
use ignore::WalkBuilder;

/// Recursively find all gettext files (matching the `*.po` pattern) under a directory,
/// sorted by path.
///
/// The .gitignore rules are respected: ignored files are skipped.
fn find_po_files_in_dir(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkBuilder::new(dir)
        .follow_links(false)
        .build()
        .filter_map(|entry| match entry {
            Ok(dirent) => Some(dirent),
            Err(err) => {
                eprintln!("{}: could not read entry: {err}", "Warning".yellow());
                None
            }
        })
        .filter(|dirent| {
            dirent.file_type().is_some_and(|ft| ft.is_file())
                && dirent.path().extension().is_some_and(|ext| ext == "po")
        })
        .map(|dirent| {
            dirent
                .path()
                .strip_prefix("./")
                .unwrap_or(dirent.path())
                .to_path_buf()
        })
        .collect();
    files.sort();
    files
}

/// Return the list of files to check, in the order of the paths given.
///
/// Directories are replaced by the gettext files they contain; any other path is kept
/// as-is (a missing file is reported when it is read).
pub fn find_po_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        if path.is_dir() {
            files.extend(find_po_files_in_dir(path));
        } else {
            files.push(path.clone());
        }
    }
    files
}
