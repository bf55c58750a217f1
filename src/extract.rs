//! HTML metadata extraction.
//!
//! Turns a post's `index.html` into a [`Post`] record using configured CSS
//! class names. Parsing is delegated to the `scraper` crate; this module
//! only encodes the selection rules:
//!
//! - **Title / teaser**: trimmed text of the *first* element bearing the
//!   configured class; empty string when no element matches.
//! - **Tags**: trimmed text of *every* element bearing the tag class, in
//!   document order, duplicates preserved.
//! - **Date / URL**: derived from the directory name, not the HTML (see
//!   [`crate::naming`]).
//!
//! Missing elements are not errors — a post without a teaser simply has an
//! empty teaser. The extractor never validates content.

use std::io;
use std::path::Path;

use scraper::{Html, Selector};

use crate::config::BuilderConfig;
use crate::naming;
use crate::output::{ConsoleLogger, Logger};
use crate::types::{Post, PostMetadata};

/// Build a CSS class selector (`.name`). A class name that doesn't compile
/// to a valid selector behaves exactly like a class that matches nothing.
fn class_selector(class: &str) -> Option<Selector> {
    Selector::parse(&format!(".{class}")).ok()
}

/// Trimmed text content of the first element bearing `class`, or empty.
fn first_text(document: &Html, class: &str) -> String {
    class_selector(class)
        .and_then(|selector| {
            document
                .select(&selector)
                .next()
                .map(|element| element.text().collect::<String>().trim().to_string())
        })
        .unwrap_or_default()
}

/// Trimmed text of every element bearing `class`, in document order.
fn all_text(document: &Html, class: &str) -> Vec<String> {
    match class_selector(class) {
        Some(selector) => document
            .select(&selector)
            .map(|element| element.text().collect::<String>().trim().to_string())
            .collect(),
        None => Vec::new(),
    }
}

/// Extract a [`Post`] from an HTML document.
///
/// `folder_name` is the post directory's own base name; it supplies the
/// date (`YYMMDD` prefix → `20YY-MM-DD`) and the URL (`/` + name).
pub fn extract(html: &str, config: &BuilderConfig, folder_name: &str) -> Post {
    let document = Html::parse_document(html);
    Post {
        title: first_text(&document, &config.title_class),
        teaser: first_text(&document, &config.teaser_class),
        date: naming::derive_date(folder_name),
        url: format!("/{folder_name}"),
        tags: all_text(&document, &config.tag_class),
    }
}

/// File-reading wrapper around [`extract()`], reporting each processed path
/// through an injected [`Logger`].
pub struct Digest {
    logger: Box<dyn Logger>,
}

impl Digest {
    pub fn new(logger: Box<dyn Logger>) -> Self {
        Self { logger }
    }

    /// Read `index_path`, extract its metadata, and wrap it in the sidecar
    /// shape. The folder name is taken from the file's parent directory.
    pub fn process(
        &self,
        index_path: &Path,
        config: &BuilderConfig,
    ) -> io::Result<PostMetadata> {
        self.logger.log(&index_path.to_string_lossy());
        let html = std::fs::read_to_string(index_path)?;
        let folder_name = index_path
            .parent()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        Ok(PostMetadata {
            post: extract(&html, config, &folder_name),
        })
    }
}

/// Defaults to process-standard console output.
impl Default for Digest {
    fn default() -> Self {
        Self::new(Box::new(ConsoleLogger))
    }
}
