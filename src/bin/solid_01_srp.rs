//! Single Responsibility Principle
//!
//! A type should own one part of the program's functionality. Collecting log
//! entries and persisting them are two different jobs, so they live in two
//! different types.
//!
//! Run with: cargo run --bin solid_01_srp

use colored::Colorize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LogError {
    #[error("Failed to create log file '{}'", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write log file '{}'", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn write_lines<'a>(
    path: &Path,
    lines: impl IntoIterator<Item = &'a String>,
) -> Result<(), LogError> {
    let file = File::create(path).map_err(|source| LogError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    let write_err = |source| LogError::Write {
        path: path.to_path_buf(),
        source,
    };
    for line in lines {
        writeln!(writer, "{line}").map_err(write_err)?;
    }
    writer.flush().map_err(write_err)
}

// =============================================================================
// The wrong way: the logger also knows how to reach the disk
// =============================================================================

#[derive(Debug, Default)]
struct SelfSavingLogger {
    entries: Vec<String>,
}

impl SelfSavingLogger {
    fn new() -> Self {
        Self::default()
    }

    fn log(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    // Persistence leaks into the accumulator.
    fn save(&self, path: impl AsRef<Path>) -> Result<(), LogError> {
        write_lines(path.as_ref(), &self.entries)
    }
}

// =============================================================================
// The better way: accumulation and persistence are separate types
// =============================================================================

#[derive(Debug, Default)]
struct Logger {
    entries: Vec<String>,
}

impl Logger {
    fn new() -> Self {
        Self::default()
    }

    fn log(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    fn entries(&self) -> &[String] {
        &self.entries
    }
}

struct LogFileWriter;

impl LogFileWriter {
    /// Writes every entry of `logger` to `path`, one line per entry.
    ///
    /// The file is truncated if it already exists and closed before returning,
    /// on success and on error alike.
    fn save(&self, logger: &Logger, path: impl AsRef<Path>) -> Result<(), LogError> {
        write_lines(path.as_ref(), logger.entries())
    }
}

fn run() -> Result<(), LogError> {
    println!("{}", "--- The wrong way: logger saves itself ---".red());
    let mut wrong_logger = SelfSavingLogger::new();
    wrong_logger.log("entry1");
    wrong_logger.log("entry2");
    wrong_logger.save("./wrong.log")?;
    let saved = wrong_logger.entries.len();
    println!("Saved {saved} entries to ./wrong.log");

    println!("\n{}", "--- The better way: a dedicated writer ---".green());
    let mut logger = Logger::new();
    logger.log("entry1");
    logger.log("entry2");

    let writer = LogFileWriter;
    writer.save(&logger, "./better.log")?;
    let saved = logger.entries().len();
    println!("Saved {saved} entries to ./better.log");

    Ok(())
}

fn main() {
    println!("=== Single Responsibility Principle ===\n");

    if let Err(err) = run() {
        eprintln!("{} {err}", "error:".red());
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_logger_keeps_append_order() {
        let mut logger = Logger::new();
        logger.log("first");
        logger.log(String::from("second"));
        logger.log("third");
        assert_eq!(logger.entries(), ["first", "second", "third"]);
    }

    #[test]
    fn test_save_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("better.log");

        let mut logger = Logger::new();
        let expected: Vec<String> = (0..25).map(|i| format!("entry{i}")).collect();
        for entry in &expected {
            logger.log(entry.as_str());
        }

        LogFileWriter.save(&logger, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.ends_with('\n'));
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines, expected);
    }

    #[test]
    fn test_save_empty_logger_creates_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.log");

        LogFileWriter.save(&Logger::new(), &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_save_truncates_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("existing.log");
        fs::write(&path, "stale line\nanother stale line\n").unwrap();

        let mut logger = Logger::new();
        logger.log("fresh");
        LogFileWriter.save(&logger, &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh\n");
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no-such-dir").join("better.log");

        let mut logger = Logger::new();
        logger.log("entry1");
        let err = LogFileWriter.save(&logger, &path).unwrap_err();

        assert!(matches!(&err, LogError::Create { path: p, .. } if *p == path));
        assert!(err.to_string().contains("better.log"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_self_saving_logger_fails_on_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no-such-dir").join("wrong.log");

        let mut logger = SelfSavingLogger::new();
        logger.log("entry1");
        let err = logger.save(&path).unwrap_err();

        match &err {
            LogError::Create { path: failed, .. } => assert_eq!(failed, &path),
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.source().is_some());
        assert!(!path.exists());
    }

    #[test]
    fn test_self_saving_logger_writes_same_format() {
        let dir = TempDir::new().unwrap();
        let wrong_path = dir.path().join("wrong.log");
        let better_path = dir.path().join("better.log");

        let mut wrong = SelfSavingLogger::new();
        let mut logger = Logger::new();
        for entry in ["entry1", "entry2"] {
            wrong.log(entry);
            logger.log(entry);
        }

        wrong.save(&wrong_path).unwrap();
        LogFileWriter.save(&logger, &better_path).unwrap();

        assert_eq!(
            fs::read_to_string(&wrong_path).unwrap(),
            fs::read_to_string(&better_path).unwrap()
        );
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<LogError>();
        assert_sync::<LogError>();
    }
}
