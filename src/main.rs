// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Po-hooks is a set of pre-commit hooks checking gettext PO files.
//!
//! Each sub-command is a check applied to the files given on command-line (or found
//! in the provided directories), and exits with a non-zero code if a file does not
//! pass the check:
//!
//! - [`obsolete-messages`](#obsolete-and-fuzzy-messages): no obsolete messages
//! - [`fuzzy-messages`](#obsolete-and-fuzzy-messages): no fuzzy messages
//! - [`untranslated-messages`](#untranslated-messages): no untranslated messages
//! - [`check-entries`](#entries): maximum number of messages or lines
//! - [`check-metadata`](#metadata): metadata headers, or their absence
//! - [`lreplace-extracted-comments`](#extracted-comments): replace the beginning of
//!   extracted comments
//! - [`stats`](#stats): display statistics about files
//!
//! # Obsolete and fuzzy messages
//!
//! Obsolete messages (`#~ `) are reported once per block of consecutive lines;
//! fuzzy messages are reported on their `#, fuzzy` flag line.
//!
//! # Untranslated messages
//!
//! Each untranslated message is reported, unless a minimum number or percentage
//! of translated messages is given with `--min`.
//!
//! # Entries
//!
//! The `check-entries` command checks the maximum number of messages (header entry
//! excluded) and/or the maximum number of lines of each file.
//!
//! # Metadata
//!
//! The `check-metadata` command checks that headers of the metadata match regular
//! expressions, or that files have no metadata at all; the metadata can also be
//! removed from files.
//!
//! # Extracted comments
//!
//! The `lreplace-extracted-comments` command replaces the beginning of extracted
//! comments (`#. `) in files; the files changed do not pass the check.
//!
//! # Stats
//!
//! The `stats` command displays the number of entries by status in each file.

mod args;
mod catalog;
mod checker;
mod checks;
mod diagnostic;
mod dir;
mod stats;

use std::{error::Error, path::PathBuf};

use clap::Parser;

use crate::args::{Cli, Command};
use crate::checker::{EXIT_FAILURE, FileCheck, Settings, display_error, display_usage, run_check};
use crate::checks::{
    entries::EntriesCheck, extracted_comments::ExtractedCommentsCheck, fuzzy::FuzzyCheck,
    metadata::MetadataCheck, obsolete::ObsoleteCheck, untranslated::UntranslatedCheck,
};
use crate::stats::run_stats;

/// Run a check built from arguments, or display the error if the arguments are invalid.
fn run_configured<C: FileCheck>(
    check: Result<C, Box<dyn Error>>,
    files: &[PathBuf],
    settings: &Settings,
) -> i32 {
    match check {
        Ok(check) => run_check(&check, files, settings),
        Err(err) => {
            display_error(err.as_ref());
            EXIT_FAILURE
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let scratch_dir = cli.scratch_dir.unwrap_or_else(std::env::temp_dir);
    let rc = match &cli.command {
        Command::ObsoleteMessages(args) => run_check(
            &ObsoleteCheck,
            &args.files,
            &Settings::new(args, &scratch_dir),
        ),
        Command::FuzzyMessages(args) => run_check(
            &FuzzyCheck,
            &args.files,
            &Settings::new(args, &scratch_dir),
        ),
        Command::UntranslatedMessages(args) => run_configured(
            UntranslatedCheck::new(args.min.as_deref()),
            &args.common.files,
            &Settings::new(&args.common, &scratch_dir),
        ),
        Command::CheckEntries(args) => {
            match EntriesCheck::new(args.max_messages, args.max_lines) {
                Some(check) => run_check(
                    &check,
                    &args.common.files,
                    &Settings::new(&args.common, &scratch_dir),
                ),
                None => display_usage("check-entries"),
            }
        }
        Command::CheckMetadata(args) => run_configured(
            MetadataCheck::from_args(args),
            &args.common.files,
            &Settings::new(&args.common, &scratch_dir),
        ),
        Command::LreplaceExtractedComments(args) => match ExtractedCommentsCheck::new(
            args.pattern.as_deref(),
            args.replacement.as_deref(),
            args.django_translators,
            args.dry_run,
        ) {
            Some(check) => run_check(
                &check,
                &args.common.files,
                &Settings::new(&args.common, &scratch_dir),
            ),
            None => display_usage("lreplace-extracted-comments"),
        },
        Command::Stats(args) => run_stats(args),
    };
    std::process::exit(rc);
}
