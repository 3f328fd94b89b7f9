// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Checker for a batch of PO files.

use std::{
    io,
    path::{Path, PathBuf},
};

use clap::CommandFactory;
use colored::Colorize;

use crate::{
    args::{Cli, CommonArgs, OutputFormat},
    catalog::file::CatalogFile,
    diagnostic::Diagnostic,
    dir::find_po_files,
};

/// Exit code when at least one file does not pass the check (or wrong options).
pub const EXIT_FAILURE: i32 = 1;

/// Exit code when a file can not be read or written.
pub const EXIT_IO_ERROR: i32 = 2;

/// Settings used by all checks.
#[derive(Debug, Default, Clone)]
pub struct Settings {
    pub quiet: bool,
    pub output: OutputFormat,
    pub scratch_dir: PathBuf,
}

impl Settings {
    /// Build settings from the common arguments of a check command.
    pub fn new(args: &CommonArgs, scratch_dir: &Path) -> Self {
        Self {
            quiet: args.quiet,
            output: args.output,
            scratch_dir: PathBuf::from(scratch_dir),
        }
    }
}

/// A check applied to each file of the batch.
pub trait FileCheck {
    /// Name of the check (the name of the command).
    fn name(&self) -> &'static str;

    /// Check a single file, reporting violations to the checker.
    ///
    /// The file can be rewritten with [`Checker::persist`].
    fn check_file(&self, checker: &mut Checker, file: &mut CatalogFile) -> io::Result<()>;
}

#[derive(Debug)]
pub struct Checker<'s> {
    pub path: PathBuf,
    pub diagnostics: Vec<Diagnostic>,
    settings: &'s Settings,
    current_check: &'static str,
    failed: bool,
}

impl<'s> Checker<'s> {
    /// Create a new `Checker` for the given check name and settings.
    pub fn new(check: &'static str, settings: &'s Settings) -> Self {
        Checker {
            path: PathBuf::new(),
            diagnostics: Vec::new(),
            settings,
            current_check: check,
            failed: false,
        }
    }

    /// Return `true` if at least one file did not pass the check.
    pub fn failed(&self) -> bool {
        self.failed
    }

    /// Mark the batch as failed, without any diagnostic.
    pub fn fail(&mut self) {
        self.failed = true;
    }

    /// Add a diagnostic that does not make the check fail.
    pub fn notice_line(&mut self, line_number: usize, message: String) {
        let diagnostic =
            Diagnostic::new(self.path.as_path(), self.current_check, message).with_line(line_number);
        self.diagnostics.push(diagnostic);
    }

    /// Report a violation for the whole file being checked.
    pub fn report_file(&mut self, message: String) {
        let diagnostic = Diagnostic::new(self.path.as_path(), self.current_check, message);
        self.report(diagnostic);
    }

    /// Report a violation on a line (1-based) of the file being checked.
    pub fn report_line(&mut self, line_number: usize, message: String) {
        let diagnostic =
            Diagnostic::new(self.path.as_path(), self.current_check, message).with_line(line_number);
        self.report(diagnostic);
    }

    /// Report a violation on a line, with details displayed after the location.
    pub fn report_line_detail(&mut self, line_number: usize, message: String, detail: String) {
        let diagnostic = Diagnostic::new(self.path.as_path(), self.current_check, message)
            .with_line(line_number)
            .with_detail(detail);
        self.report(diagnostic);
    }

    /// Report a violation with a custom diagnostic.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
        self.failed = true;
    }

    /// Write the file on disk, through a temporary file in the scratch directory.
    pub fn persist(&self, file: &CatalogFile) -> io::Result<()> {
        file.persist(&self.settings.scratch_dir)
    }

    /// Return the exit code for the batch.
    pub fn exit_code(&self) -> i32 {
        i32::from(self.failed)
    }

    /// Display diagnostics, unless quiet mode is enabled.
    ///
    /// In human format one line per diagnostic is displayed on stderr; in JSON format
    /// a list of diagnostics is displayed on stdout.
    pub fn display_diagnostics(&self) {
        if self.settings.quiet {
            return;
        }
        match self.settings.output {
            OutputFormat::Human => {
                for diag in &self.diagnostics {
                    eprintln!("{diag}");
                }
            }
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::to_string(&self.diagnostics).unwrap_or_default()
                );
            }
        }
    }
}

/// Run a check on a list of files and return the diagnostics found.
///
/// Files are read and checked one after the other; the first I/O error stops the batch.
pub fn check_files<'s>(
    check: &dyn FileCheck,
    files: &[PathBuf],
    settings: &'s Settings,
) -> (Checker<'s>, io::Result<()>) {
    let mut checker = Checker::new(check.name(), settings);
    for path in find_po_files(files) {
        checker.path = path;
        let result = CatalogFile::read(&checker.path)
            .and_then(|mut file| check.check_file(&mut checker, &mut file));
        if let Err(err) = result {
            let err = io::Error::new(err.kind(), format!("{}: {err}", checker.path.display()));
            return (checker, Err(err));
        }
    }
    (checker, Ok(()))
}

/// Check and display result for all PO files; return the exit code.
pub fn run_check(check: &dyn FileCheck, files: &[PathBuf], settings: &Settings) -> i32 {
    let (checker, result) = check_files(check, files, settings);
    checker.display_diagnostics();
    match result {
        Ok(()) => checker.exit_code(),
        Err(err) => {
            display_error(&err);
            EXIT_IO_ERROR
        }
    }
}

/// Display an error on stderr.
pub fn display_error(err: &dyn std::error::Error) {
    eprintln!("{}: {err}", "Error".bright_red().bold());
}

/// Display the usage of a command on stderr and return the failure exit code.
pub fn display_usage(command: &str) -> i32 {
    let mut cli = Cli::command();
    match cli.find_subcommand_mut(command) {
        Some(cmd) => eprintln!("{}", cmd.render_help()),
        None => eprintln!("{}", cli.render_help()),
    }
    EXIT_FAILURE
}
