// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Implementation of the `check-metadata` check: validate, forbid or remove metadata.

use std::{error::Error, io};

use regex::Regex;

use crate::args::MetadataArgs;
use crate::catalog::{
    file::CatalogFile,
    metadata::{HeaderLine, Metadata, MetadataBlock, locate},
};
use crate::checker::{Checker, FileCheck};

/// Standard set of headers with the pattern their value must match.
pub const STANDARD_HEADERS: [(&str, &str); 7] = [
    ("Project-Id-Version", r"\d+\.\d+\.\d"),
    ("Report-Msgid-Bugs-To", r".+\s<.+@.+\..+>"),
    ("Last-Translator", r".+\s<.+@.+\..+>"),
    ("Language-Team", r".+\s<.+@.+\..+>"),
    ("Language", r"\w\w_?\w?\w?(@\w+)?"),
    ("Content-Type", r"text/plain; charset=[0-9a-zA-Z\-]+"),
    ("Content-Transfer-Encoding", r"\d+bits?"),
];

#[derive(Debug)]
pub struct HeaderPattern {
    pub name: String,
    pub pattern: String,
    regex: Regex,
}

impl HeaderPattern {
    /// Return `true` if the beginning of the value matches the pattern.
    #[must_use]
    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

/// Headers expected in the metadata, in insertion order.
#[derive(Debug, Default)]
pub struct HeaderSpec {
    headers: Vec<HeaderPattern>,
}

impl HeaderSpec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the standard set of headers.
    pub fn standard() -> Result<Self, regex::Error> {
        let mut spec = Self::new();
        for (name, pattern) in STANDARD_HEADERS {
            spec.insert(name, pattern)?;
        }
        Ok(spec)
    }

    /// Add a header; if it already exists, its pattern is replaced (position is kept).
    pub fn insert(&mut self, name: &str, pattern: &str) -> Result<(), regex::Error> {
        let header = HeaderPattern {
            name: name.to_string(),
            pattern: pattern.to_string(),
            regex: Regex::new(&format!("^(?:{pattern})"))?,
        };
        match self.headers.iter_mut().find(|h| h.name == name) {
            Some(existing) => *existing = header,
            None => self.headers.push(header),
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &HeaderPattern> + '_ {
        self.headers.iter()
    }
}

#[derive(Debug)]
pub enum MetadataMode {
    /// Metadata must be present and match the headers.
    Validate(HeaderSpec),
    /// Metadata must not be present.
    AssertAbsent,
    /// Metadata is removed from files.
    Remove,
}

#[derive(Debug)]
pub struct MetadataCheck {
    pub mode: MetadataMode,
}

impl MetadataCheck {
    /// Build the check from command line arguments.
    ///
    /// Options are validated before any file is read.
    pub fn from_args(args: &MetadataArgs) -> Result<Self, Box<dyn Error>> {
        if args.headers.len() != args.values.len() {
            return Err("each '--header' must be followed by a '--value'".into());
        }
        let no_metadata = args.no_metadata || args.remove_metadata;
        if no_metadata && !args.headers.is_empty() {
            return Err("you must pass either '--no-metadata' or headers regexes \
                specification, but not both"
                .into());
        }
        if no_metadata && args.standard_headers {
            return Err(
                "you must pass either '--no-metadata' or '--standard-headers', but not both"
                    .into(),
            );
        }
        let mode = if args.remove_metadata {
            MetadataMode::Remove
        } else if no_metadata {
            MetadataMode::AssertAbsent
        } else {
            let mut spec = if args.standard_headers {
                HeaderSpec::standard()?
            } else {
                HeaderSpec::new()
            };
            for (name, pattern) in args.headers.iter().zip(&args.values) {
                spec.insert(name, pattern)?;
            }
            MetadataMode::Validate(spec)
        };
        Ok(Self { mode })
    }

    /// Check the headers of the metadata block against the expected headers.
    ///
    /// If a header is found multiple times, only its last occurrence is checked.
    fn validate(
        checker: &mut Checker,
        spec: &HeaderSpec,
        block: &MetadataBlock,
        headers: &[HeaderLine<'_>],
    ) {
        let mut found: Vec<(&HeaderLine, &HeaderPattern)> = Vec::new();
        let mut missing: Vec<&HeaderPattern> = Vec::new();
        for header_pattern in spec.iter() {
            match headers.iter().rev().find(|h| h.key == header_pattern.name) {
                Some(header) => found.push((header, header_pattern)),
                None => missing.push(header_pattern),
            }
        }
        found.sort_by_key(|(header, _)| header.line_number);
        for (header, header_pattern) in found {
            if !header_pattern.is_match(&header.value) {
                checker.report_line_detail(
                    header.line_number,
                    "Wrong metadata value".to_string(),
                    format!(
                        "regex '{}' not matching for value '{}' in header '{}'",
                        header_pattern.pattern, header.value, header.key
                    ),
                );
            }
        }
        for header_pattern in missing {
            checker.report_line(
                block.msgstr_line_number(),
                format!("Expected metadata header '{}' not found", header_pattern.name),
            );
        }
    }
}

impl FileCheck for MetadataCheck {
    fn name(&self) -> &'static str {
        "check-metadata"
    }

    /// Check the metadata of the file (header entry).
    ///
    /// A file without header entry has nothing to check and passes in all modes.
    ///
    /// Diagnostics reported:
    /// - `No metadata found` (header entry without metadata lines)
    /// - `Wrong metadata value`
    /// - `Expected metadata header '...' not found`
    /// - `Found unexpected metadata` (with `--no-metadata`)
    /// - `Metadata removed` (with `--remove-metadata`)
    fn check_file(&self, checker: &mut Checker, file: &mut CatalogFile) -> io::Result<()> {
        match (&self.mode, locate(file.lines())) {
            (MetadataMode::Validate(spec), Metadata::Block(block)) => {
                let headers = block.headers(file.lines());
                Self::validate(checker, spec, &block, &headers);
            }
            (MetadataMode::Validate(_), Metadata::Empty { .. }) => {
                checker.report_file("No metadata found".to_string());
            }
            (MetadataMode::AssertAbsent, Metadata::Block(block)) => {
                checker.report_line(
                    block.first_line_number(),
                    "Found unexpected metadata".to_string(),
                );
            }
            (MetadataMode::Remove, Metadata::Block(block)) => {
                let lines = block.remove_from(file.lines());
                file.replace_lines(lines);
                checker.persist(file)?;
                checker.report_line(block.first_line_number(), "Metadata removed".to_string());
            }
            (_, Metadata::NoHeader)
            | (MetadataMode::AssertAbsent | MetadataMode::Remove, Metadata::Empty { .. }) => {}
        }
        Ok(())
    }
}
