//! Shared test utilities for the blog-builder test suite.
//!
//! Provides fixture-tree builders and recording sink doubles used by the
//! per-module tests and the integration suite.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use tempfile::TempDir;

use crate::output::{Logger, Writer};
use crate::types::{Post, PostMetadata};

// =========================================================================
// Fixture builders
// =========================================================================

/// Minimal post HTML carrying the stock extraction classes.
pub fn post_html(title: &str, teaser: &str, tags: &[&str]) -> String {
    let tag_spans: String = tags
        .iter()
        .map(|t| format!("<span class=\"blog-builder-tag\">{t}</span>"))
        .collect();
    format!(
        "<!doctype html>\n<html><body>\n\
         <h1 class=\"blog-builder-title\">{title}</h1>\n\
         <p class=\"blog-builder-teaser\">{teaser}</p>\n\
         {tag_spans}\n\
         </body></html>"
    )
}

/// Create a post directory with the given name and `index.html` content.
pub fn write_post(root: &Path, dirname: &str, html: &str) {
    let dir = root.join(dirname);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("index.html"), html).unwrap();
}

/// Write a stock-named sidecar into `dir` for a post titled `title`.
pub fn write_sidecar(dir: &Path, title: &str) {
    let folder_name = dir
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let metadata = PostMetadata {
        post: Post {
            title: title.to_string(),
            teaser: format!("Teaser for {title}"),
            date: crate::naming::derive_date(&folder_name),
            url: format!("/{folder_name}"),
            tags: vec![],
        },
    };
    let json = serde_json::to_string_pretty(&metadata).unwrap();
    std::fs::write(dir.join("blog-builder-metadata.json"), json).unwrap();
}

/// A content tree with three dated post directories, one non-qualifying
/// directory, and a stray loose file.
pub fn sample_tree() -> TempDir {
    let tmp = TempDir::new().unwrap();
    write_post(
        tmp.path(),
        "251013-some-description",
        &post_html("Test", "A teaser", &["rust"]),
    );
    write_post(
        tmp.path(),
        "251014-some-other-description",
        &post_html("Other", "Another teaser", &["rust", "blog"]),
    );
    write_post(
        tmp.path(),
        "251015-third-description",
        &post_html("Third", "Last teaser", &[]),
    );
    std::fs::create_dir(tmp.path().join("expected-full")).unwrap();
    std::fs::write(tmp.path().join("notes.txt"), "not a post").unwrap();
    tmp
}

// =========================================================================
// Recording sink doubles
// =========================================================================

/// [`Logger`] double that records every message.
///
/// Clone the handle via [`RecordingLogger::messages`] before boxing, so the
/// test can inspect messages after the logger moves into a consumer.
#[derive(Default)]
pub struct RecordingLogger {
    messages: Rc<RefCell<Vec<String>>>,
}

impl RecordingLogger {
    pub fn messages(&self) -> Rc<RefCell<Vec<String>>> {
        Rc::clone(&self.messages)
    }
}

impl Logger for RecordingLogger {
    fn log(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

/// [`Writer`] double that records `(file_name, content)` pairs.
#[derive(Default)]
pub struct RecordingWriter {
    calls: Rc<RefCell<Vec<(String, String)>>>,
}

impl RecordingWriter {
    pub fn calls(&self) -> Rc<RefCell<Vec<(String, String)>>> {
        Rc::clone(&self.calls)
    }
}

impl Writer for RecordingWriter {
    fn write(&mut self, file_name: &str, content: &str) -> std::io::Result<()> {
        self.calls
            .borrow_mut()
            .push((file_name.to_string(), content.to_string()));
        Ok(())
    }
}
