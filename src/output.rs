//! Output sinks and CLI display formatting.
//!
//! Two concerns live here:
//!
//! 1. **Sink traits** — [`Logger`] and [`Writer`] are the injection points
//!    for everything the build emits besides sidecar files. Consumers and
//!    the extractor take them as explicit constructor parameters with
//!    documented defaults (console output, filesystem writes), so tests can
//!    substitute recording doubles without touching the filesystem.
//! 2. **CLI formatting** — `format_*` functions (returning `Vec<String>`)
//!    for testability, with `print_*` wrappers that write to stdout. Format
//!    functions are pure.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::traverse::{BuildError, Consumer};

// ============================================================================
// Sink traits and defaults
// ============================================================================

/// Observational message sink used by extraction and the logging consumer.
///
/// Purely informational; nothing in the data flow depends on it.
pub trait Logger {
    fn log(&self, message: &str);
}

/// Default [`Logger`]: writes each message as a line to stdout.
#[derive(Debug, Default)]
pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn log(&self, message: &str) {
        println!("{message}");
    }
}

/// Named-file content sink used by the timeline consumer.
///
/// The sink owns actual file placement; callers pass only a file name and
/// content.
pub trait Writer {
    fn write(&mut self, file_name: &str, content: &str) -> io::Result<()>;
}

/// Default [`Writer`]: places files in a fixed output directory, creating it
/// on first write.
#[derive(Debug)]
pub struct DirWriter {
    dir: PathBuf,
}

impl DirWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Writer for DirWriter {
    fn write(&mut self, file_name: &str, content: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.dir.join(file_name), content)
    }
}

// ============================================================================
// Logging consumer
// ============================================================================

/// Consumer that reports each visited directory's base name to a [`Logger`].
pub struct LogConsumer {
    logger: Box<dyn Logger>,
}

impl LogConsumer {
    pub fn new(logger: Box<dyn Logger>) -> Self {
        Self { logger }
    }
}

impl Default for LogConsumer {
    fn default() -> Self {
        Self::new(Box::new(ConsoleLogger))
    }
}

impl Consumer for LogConsumer {
    fn consume(&mut self, dir_path: &Path) -> Result<(), BuildError> {
        let name = dir_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        self.logger.log(&name);
        Ok(())
    }
}

// ============================================================================
// CLI display
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Format the `check` listing: one line per qualifying directory plus a
/// trailing count.
///
/// ```text
/// 001 251013-some-description
/// 002 251014-some-other-description
/// 2 post directories
/// ```
pub fn format_check_output(dirs: &[PathBuf]) -> Vec<String> {
    let mut lines: Vec<String> = dirs
        .iter()
        .enumerate()
        .map(|(i, dir)| {
            let name = dir
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            format!("{} {}", format_index(i + 1), name)
        })
        .collect();
    lines.push(format!("{} post directories", dirs.len()));
    lines
}

pub fn print_check_output(dirs: &[PathBuf]) {
    for line in format_check_output(dirs) {
        println!("{line}");
    }
}

/// Format the end-of-build summary.
pub fn format_build_summary(visited: usize, sidecars_written: usize, pages_written: u32) -> Vec<String> {
    vec![
        format!("Visited {} post directories", visited),
        format!("Extracted {} new metadata files", sidecars_written),
        format!("Wrote {} timeline pages", pages_written),
    ]
}

pub fn print_build_summary(visited: usize, sidecars_written: usize, pages_written: u32) {
    for line in format_build_summary(visited, sidecars_written, pages_written) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::RecordingLogger;

    #[test]
    fn log_consumer_reports_basename_only() {
        let logger = RecordingLogger::default();
        let messages = logger.messages();
        let mut consumer = LogConsumer::new(Box::new(logger));

        consumer
            .consume(Path::new("/some/root/251014-some-other-description"))
            .unwrap();

        assert_eq!(
            messages.borrow().as_slice(),
            ["251014-some-other-description"]
        );
    }

    #[test]
    fn dir_writer_creates_output_dir() {
        let tmp = tempfile::TempDir::new().unwrap();
        let out = tmp.path().join("pages");
        let mut writer = DirWriter::new(&out);

        writer.write("page1.json", "{}").unwrap();

        assert_eq!(std::fs::read_to_string(out.join("page1.json")).unwrap(), "{}");
    }

    #[test]
    fn check_output_lists_dirs_with_count() {
        let dirs = vec![
            PathBuf::from("/root/251013-a"),
            PathBuf::from("/root/251014-b"),
        ];
        assert_eq!(
            format_check_output(&dirs),
            vec!["001 251013-a", "002 251014-b", "2 post directories"]
        );
    }

    #[test]
    fn build_summary_lines() {
        assert_eq!(
            format_build_summary(3, 2, 1),
            vec![
                "Visited 3 post directories",
                "Extracted 2 new metadata files",
                "Wrote 1 timeline pages",
            ]
        );
    }
}
