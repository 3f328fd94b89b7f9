// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    author,
    name = "po-hooks",
    about = "Pre-commit hooks to check gettext PO files.",
    after_help = "For help with a specific command, see: `po-hooks help <command>`."
)]
#[command(version)]
pub struct Cli {
    /// Directory used to write temporary files before replacing checked files [default: system temporary directory]
    #[arg(long, global = true, env = "PO_HOOKS_SCRATCH_DIR", value_name = "DIR")]
    pub scratch_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check that files have no obsolete messages
    ObsoleteMessages(CommonArgs),

    /// Check that files have no fuzzy messages
    FuzzyMessages(CommonArgs),

    /// Check that files have no untranslated messages (or a minimum of translated messages)
    UntranslatedMessages(UntranslatedArgs),

    /// Check the maximum number of messages or lines of files
    CheckEntries(EntriesArgs),

    /// Check the metadata headers of files (or their absence)
    #[command(disable_help_flag = true)]
    CheckMetadata(MetadataArgs),

    /// Replace the beginning of extracted comments
    LreplaceExtractedComments(ExtractedCommentsArgs),

    /// Display statistics about files
    Stats(StatsArgs),
}

/// Arguments shared by all checks.
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// List of files or directories
    pub files: Vec<PathBuf>,

    /// Quiet mode: do not report any error, only set the exit code
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub output: OutputFormat,
}

/// Arguments for the `untranslated-messages` command.
#[derive(Debug, Args)]
pub struct UntranslatedArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Minimum number of translated messages in each file, or percentage of messages if it ends with `%`
    #[arg(short, long, value_name = "N|N%")]
    pub min: Option<String>,
}

/// Arguments for the `check-entries` command.
#[derive(Debug, Args)]
pub struct EntriesArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Maximum number of messages in each file (the header entry is not counted)
    #[arg(short, long, value_name = "NUMBER", allow_negative_numbers = true)]
    pub max_messages: Option<i64>,

    /// Maximum number of lines in each file
    #[arg(short = 'l', long, value_name = "NUMBER", allow_negative_numbers = true)]
    pub max_lines: Option<i64>,
}

/// Arguments for the `check-metadata` command.
#[derive(Debug, Args)]
pub struct MetadataArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Name of a header to check, followed by its value with `--value` (can be given multiple times)
    #[arg(short = 'h', long = "header", value_name = "NAME")]
    pub headers: Vec<String>,

    /// Regular expression the value of the previous `--header` must match at its beginning
    #[arg(short = 'v', long = "value", value_name = "REGEX")]
    pub values: Vec<String>,

    /// Use a standard set of headers (each one can be overridden with `--header` and `--value`)
    #[arg(short, long)]
    pub standard_headers: bool,

    /// Files must not have metadata
    #[arg(short, long)]
    pub no_metadata: bool,

    /// Remove metadata from files that have it
    #[arg(short, long, visible_alias = "remove")]
    pub remove_metadata: bool,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,
}

/// Arguments for the `lreplace-extracted-comments` command.
#[derive(Debug, Args)]
pub struct ExtractedCommentsArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Do not replace comments, only report where they would be replaced
    #[arg(short, long)]
    pub dry_run: bool,

    /// The string to match at the beginning of extracted comments
    #[arg(short = 'm', long = "match", value_name = "MATCH")]
    pub pattern: Option<String>,

    /// The replacement of the matching string
    #[arg(short, long, value_name = "REPL")]
    pub replacement: Option<String>,

    /// Remove the "Translators:" prefix of extracted comments, with the whitespace after it
    #[arg(long)]
    pub django_translators: bool,
}

/// Arguments for the `stats` command.
#[derive(Debug, Args)]
pub struct StatsArgs {
    /// List of files or directories
    pub files: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub output: OutputFormat,
}

/// Output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    /// Human readable text format
    Human,

    /// JSON
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
