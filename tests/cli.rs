// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_po-hooks");

const UNTRANSLATED: &str = "#\nmsgid \"\"\nmsgstr \"\"\n\nmsgid \"A\"\nmsgstr \"\"\n";

const METADATA: &str = r#"#
msgid ""
msgstr ""
"Project-Id-Version: v1.2.3\n"
"Language: es\n"

msgid "Hello"
msgstr "Hola"
"#;

const OBSOLETE: &str = r#"#
msgid ""
msgstr ""

#~ msgid "Hello"
#~ msgstr "Hola"

#~ msgid "Foo"
"#;

/// Files in a temporary directory, and the binary run in this directory.
struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let project_dir = temp_dir.path().canonicalize().unwrap();
        Self {
            _temp_dir: temp_dir,
            project_dir,
        }
    }

    fn with_file(path: &str, content: &str) -> Self {
        let test = Self::new();
        test.write_file(path, content);
        test
    }

    fn write_file(&self, path: &str, content: &str) {
        let file_path = self.project_dir.join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(file_path, content).unwrap();
    }

    fn read_file(&self, path: &str) -> String {
        fs::read_to_string(self.project_dir.join(path)).unwrap()
    }

    fn root(&self) -> &Path {
        &self.project_dir
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(BIN)
            .current_dir(&self.project_dir)
            .env_clear()
            .env("NO_COLOR", "1")
            .env("PO_HOOKS_SCRATCH_DIR", &self.project_dir)
            .args(args)
            .output()
            .unwrap()
    }
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_no_files() {
    let test = CliTest::new();
    for command in ["obsolete-messages", "fuzzy-messages", "untranslated-messages"] {
        let output = test.run(&[command]);
        assert_eq!(output.status.code(), Some(0), "{command}");
        assert_eq!(stderr(&output), "");
    }
}

#[test]
fn test_untranslated() {
    let test = CliTest::with_file("fr.po", UNTRANSLATED);
    let output = test.run(&["untranslated-messages", "fr.po"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "Untranslated message at fr.po:6\n");

    let output = test.run(&["untranslated-messages", "-q", "fr.po"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "");
    assert_eq!(stdout(&output), "");

    let output = test.run(&["untranslated-messages", "--min", "0", "fr.po"]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_untranslated_invalid_minimum() {
    let test = CliTest::with_file("fr.po", UNTRANSLATED);
    let output = test.run(&["untranslated-messages", "--min", "abc", "fr.po"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("invalid minimum"));
}

#[test]
fn test_obsolete_runs() {
    let test = CliTest::with_file("fr.po", OBSOLETE);
    let output = test.run(&["obsolete-messages", "fr.po"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stderr(&output),
        "Found obsolete message at fr.po:5\nFound obsolete message at fr.po:8\n"
    );
}

#[test]
fn test_json_output() {
    let test = CliTest::with_file("fr.po", OBSOLETE);
    let output = test.run(&["obsolete-messages", "--output", "json", "fr.po"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "");
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let diags = value.as_array().unwrap();
    assert_eq!(diags.len(), 2);
    assert_eq!(diags[0]["path"], "fr.po");
    assert_eq!(diags[0]["check"], "obsolete-messages");
    assert_eq!(diags[0]["line"], 5);
    assert_eq!(diags[0]["message"], "Found obsolete message");
}

#[test]
fn test_directory() {
    let test = CliTest::new();
    test.write_file("b.po", OBSOLETE);
    test.write_file("a/x.po", "#, fuzzy\nmsgid \"a\"\nmsgstr \"b\"\n");
    test.write_file("a/readme.txt", "#, fuzzy\n");
    let output = test.run(&["fuzzy-messages", "."]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "Found fuzzy message at a/x.po:1\n");
}

#[test]
fn test_missing_file() {
    let test = CliTest::with_file("fr.po", UNTRANSLATED);
    let output = test.run(&["untranslated-messages", "fr.po", "missing.po"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = stderr(&output);
    assert!(stderr.starts_with("Untranslated message at fr.po:6\n"));
    assert!(stderr.contains("missing.po"));
}

#[test]
fn test_check_entries() {
    let test = CliTest::with_file("fr.po", UNTRANSLATED);
    let output = test.run(&["check-entries", "--max-messages", "1", "fr.po"]);
    assert_eq!(output.status.code(), Some(0));

    let output = test.run(&["check-entries", "-m", "0", "-l", "3", "fr.po"]);
    assert_eq!(output.status.code(), Some(1));
    let path = test.root().join("fr.po");
    assert_eq!(
        stderr(&output),
        format!(
            "More messages (1) than allowed (0) at {path}\n\
            More lines (6) than allowed (3) at {path}\n",
            path = path.display()
        )
    );
}

#[test]
fn test_check_entries_without_maximum() {
    let test = CliTest::with_file("fr.po", UNTRANSLATED);
    let output = test.run(&["check-entries", "fr.po"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Usage"));
}

#[test]
fn test_check_metadata() {
    let test = CliTest::with_file("fr.po", METADATA);
    let output = test.run(&[
        "check-metadata",
        "-h",
        "Project-Id-Version",
        "-v",
        r"v\d+\.\d+\.\d+",
        "-h",
        "Language",
        "-v",
        "es",
        "fr.po",
    ]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stderr(&output), "");

    let output = test.run(&[
        "check-metadata",
        "--header",
        "Language",
        "--value",
        "fr",
        "--header",
        "Language-Team",
        "--value",
        ".+",
        "fr.po",
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stderr(&output),
        "Wrong metadata value at fr.po:5 (regex 'fr' not matching for value 'es' in \
        header 'Language')\n\
        Expected metadata header 'Language-Team' not found at fr.po:3\n"
    );
}

#[test]
fn test_check_metadata_invalid_options() {
    let test = CliTest::with_file("fr.po", METADATA);
    for args in [
        vec!["check-metadata", "-n", "-s", "fr.po"],
        vec!["check-metadata", "-n", "-h", "Language", "-v", "es", "fr.po"],
        vec!["check-metadata", "-h", "Language", "fr.po"],
        vec!["check-metadata", "-h", "Language", "-v", "(es", "fr.po"],
    ] {
        let output = test.run(&args);
        assert_eq!(output.status.code(), Some(1), "{args:?}");
        assert!(stderr(&output).contains("Error"), "{args:?}");
    }
    // Nothing must be changed.
    assert_eq!(test.read_file("fr.po"), METADATA);
}

#[test]
fn test_remove_metadata() {
    let test = CliTest::with_file("fr.po", METADATA);
    let output = test.run(&["check-metadata", "--no-metadata", "fr.po"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "Found unexpected metadata at fr.po:4\n");

    let output = test.run(&["check-metadata", "--remove", "fr.po"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "Metadata removed at fr.po:4\n");
    assert_eq!(
        test.read_file("fr.po"),
        "#\nmsgid \"\"\nmsgstr \"\"\n\nmsgid \"Hello\"\nmsgstr \"Hola\"\n"
    );

    let output = test.run(&["check-metadata", "--no-metadata", "fr.po"]);
    assert_eq!(output.status.code(), Some(0));
    let output = test.run(&["check-metadata", "fr.po"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "No metadata found at fr.po\n");
}

#[test]
fn test_check_metadata_without_header_entry() {
    let test = CliTest::with_file("fr.po", "msgid \"Hello\"\nmsgstr \"Hola\"\n");
    for args in [
        vec!["check-metadata", "-h", "Language", "-v", "fr", "fr.po"],
        vec!["check-metadata", "-s", "fr.po"],
        vec!["check-metadata", "-n", "fr.po"],
        vec!["check-metadata", "--remove", "fr.po"],
    ] {
        let output = test.run(&args);
        assert_eq!(output.status.code(), Some(0), "{args:?}");
        assert_eq!(stderr(&output), "", "{args:?}");
    }
    assert_eq!(test.read_file("fr.po"), "msgid \"Hello\"\nmsgstr \"Hola\"\n");
}

#[test]
fn test_lreplace_extracted_comments() {
    let content = "#\nmsgid \"\"\nmsgstr \"\"\n\n#. Translators: Hello\nmsgid \"Hello\"\nmsgstr \"Hola\"\n";
    let test = CliTest::with_file("fr.po", content);

    let output = test.run(&["lreplace-extracted-comments", "--django-translators", "-d", "fr.po"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stderr(&output),
        "Translator comment would be replaced at fr.po:5\n"
    );
    assert_eq!(test.read_file("fr.po"), content);

    let output = test.run(&["lreplace-extracted-comments", "--django-translators", "fr.po"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "");
    assert_eq!(
        test.read_file("fr.po"),
        "#\nmsgid \"\"\nmsgstr \"\"\n\n#. Hello\nmsgid \"Hello\"\nmsgstr \"Hola\"\n"
    );

    let output = test.run(&["lreplace-extracted-comments", "--django-translators", "fr.po"]);
    assert_eq!(output.status.code(), Some(0));

    let output = test.run(&["lreplace-extracted-comments", "-m", "Hello", "-r", "Bye", "fr.po"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(test.read_file("fr.po").contains("#. Bye\n"));
}

#[test]
fn test_lreplace_extracted_comments_without_match() {
    let test = CliTest::with_file("fr.po", "#. Translators: Hello\n");
    let output = test.run(&["lreplace-extracted-comments", "-m", "Translators: ", "fr.po"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Usage"));
    assert_eq!(test.read_file("fr.po"), "#. Translators: Hello\n");
}

#[test]
fn test_stats() {
    let test = CliTest::new();
    test.write_file("fr.po", UNTRANSLATED);
    test.write_file("es.po", METADATA);
    let output = test.run(&["stats", "-o", "json", "fr.po", "es.po"]);
    assert_eq!(output.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let stats = value.as_array().unwrap();
    assert_eq!(stats.len(), 2);
    assert_eq!(stats[0]["path"], "fr.po");
    assert_eq!(stats[0]["entries"]["total"], 1);
    assert_eq!(stats[0]["entries"]["untranslated"], 1);
    assert_eq!(stats[1]["path"], "es.po");
    assert_eq!(stats[1]["entries"]["translated"], 1);

    let output = test.run(&["stats", "fr.po", "es.po"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output).lines().count(), 2);
}

#[test]
fn test_quiet() {
    let comments = "#\nmsgid \"\"\nmsgstr \"\"\n\n#. Translators: Hello\nmsgid \"a\"\nmsgstr \"b\"\n";
    let test = CliTest::new();
    test.write_file("fr.po", METADATA);
    test.write_file("comments.po", comments);
    for args in [
        vec!["check-metadata", "-q", "-h", "Language", "-v", "fr", "fr.po"],
        vec!["check-metadata", "-q", "-h", "Language-Team", "-v", ".+", "fr.po"],
        vec!["check-metadata", "-q", "-n", "fr.po"],
        vec!["check-entries", "-q", "-m", "0", "fr.po"],
        vec!["check-entries", "-q", "-l", "1", "fr.po"],
        vec!["check-entries", "-q", "-o", "json", "-l", "1", "fr.po"],
        vec!["lreplace-extracted-comments", "-q", "-d", "--django-translators", "comments.po"],
    ] {
        let output = test.run(&args);
        assert_eq!(output.status.code(), Some(1), "{args:?}");
        assert_eq!(stderr(&output), "", "{args:?}");
        assert_eq!(stdout(&output), "", "{args:?}");
    }
    assert_eq!(test.read_file("comments.po"), comments);

    let output = test.run(&["check-metadata", "-q", "--remove", "fr.po"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "");
    assert!(!test.read_file("fr.po").contains("Language"));

    let output = test.run(&["lreplace-extracted-comments", "-q", "--django-translators", "comments.po"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "");
    assert!(test.read_file("comments.po").contains("#. Hello\n"));
}
