// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! PO file content, as a list of raw lines.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use memchr::memchr_iter;
use tempfile::NamedTempFile;

#[derive(Debug, Default)]
pub struct CatalogFile {
    pub path: PathBuf,
    lines: Vec<String>,
}

/// Split text into lines, each line keeping its `\n` terminator.
///
/// A trailing fragment without `\n` is the last line; an empty text has no lines.
#[must_use]
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut start = 0;
    for pos in memchr_iter(b'\n', text.as_bytes()) {
        lines.push(text[start..=pos].to_string());
        start = pos + 1;
    }
    if start < text.len() {
        lines.push(text[start..].to_string());
    }
    lines
}

impl CatalogFile {
    /// Create a `CatalogFile` from a path and its content (not read from disk).
    pub fn new<S: AsRef<str>>(path: &Path, content: S) -> Self {
        Self {
            path: PathBuf::from(path),
            lines: split_lines(content.as_ref()),
        }
    }

    /// Read the file at the given path.
    ///
    /// The content must be valid UTF-8.
    pub fn read(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::new(path, content))
    }

    /// Return the lines of the file, with their terminator.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Return the whole content of the file.
    #[must_use]
    pub fn content(&self) -> String {
        self.lines.concat()
    }

    /// Replace all lines of the file (in memory only, see [`persist`](Self::persist)).
    pub fn replace_lines(&mut self, lines: Vec<String>) {
        self.lines = lines;
    }

    /// Write the content in a temporary file of `scratch_dir`, then replace the file on disk.
    ///
    /// The temporary file is moved over the original file; if the move is not possible
    /// (scratch directory on another filesystem), it is copied then removed.
    ///
    /// The permissions of the original file are kept.
    pub fn persist(&self, scratch_dir: &Path) -> io::Result<()> {
        let permissions = fs::metadata(&self.path)?.permissions();
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        let mut tmp = tempfile::Builder::new()
            .prefix(&format!("po-hooks--{file_name}."))
            .tempfile_in(scratch_dir)?;
        tmp.write_all(self.content().as_bytes())?;
        tmp.flush()?;
        tmp.as_file().set_permissions(permissions)?;
        match tmp.persist(&self.path) {
            Ok(_) => Ok(()),
            Err(err) => Self::copy_temp(&err.file, &self.path),
        }
    }

    /// Copy the temporary file over the target; the temporary file is removed on drop.
    fn copy_temp(tmp: &NamedTempFile, target: &Path) -> io::Result<()> {
        fs::copy(tmp.path(), target)?;
        Ok(())
    }
}
