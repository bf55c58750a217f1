//! Timeline consumer: paginated post listings.
//!
//! Reads the sidecar metadata written by the cache consumer and accumulates
//! posts into fixed-size pages, writing each page through an injected
//! [`Writer`] the moment it fills. Depends on the cache consumer having run
//! earlier in the same pass — register it after the cache consumer.
//!
//! Page files are named `blog-builder-timeline-page{N}.json` with `N`
//! 1-based and monotonically increasing across all writes, including the
//! final flush. Content is the [`Page`] shape pretty-printed with 3-space
//! indentation (the format timeline pages have always shipped with).

use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::config::BuilderConfig;
use crate::output::Writer;
use crate::traverse::{BuildError, Consumer};
use crate::types::{Page, PostMetadata};

/// Consumer that batches posts into timeline page files.
///
/// Holds cross-call accumulation state: the in-memory page is owned
/// exclusively by this instance and reset after every write.
pub struct TimelineConsumer {
    writer: Box<dyn Writer>,
    config: BuilderConfig,
    page: Page,
    write_counter: u32,
}

impl TimelineConsumer {
    pub fn new(writer: Box<dyn Writer>, config: BuilderConfig) -> Self {
        Self {
            writer,
            config,
            page: Page::default(),
            write_counter: 1,
        }
    }

    /// Number of page files written so far.
    pub fn pages_written(&self) -> u32 {
        self.write_counter - 1
    }

    /// Write the current page and start a fresh one. The counter advances on
    /// every write regardless of how many posts the page holds.
    fn write_page(&mut self) -> Result<(), BuildError> {
        let content = to_json_3_indent(&self.page).map_err(std::io::Error::from)?;
        let file_name = format!("blog-builder-timeline-page{}.json", self.write_counter);
        self.writer.write(&file_name, &content)?;
        self.write_counter += 1;
        self.page = Page::default();
        Ok(())
    }
}

impl Consumer for TimelineConsumer {
    fn consume(&mut self, dir_path: &Path) -> Result<(), BuildError> {
        let metadata_path = dir_path.join(&self.config.metadata_file);
        if !metadata_path.exists() {
            log::debug!("no sidecar in {}, skipping", dir_path.display());
            return Ok(());
        }

        let content = std::fs::read_to_string(&metadata_path)?;
        // A sidecar that exists but doesn't parse means the cache itself is
        // corrupt; that aborts the walk rather than dropping posts silently.
        let metadata: PostMetadata =
            serde_json::from_str(&content).map_err(|source| BuildError::Metadata {
                path: metadata_path,
                source,
            })?;

        self.page.posts.push(metadata.post);
        if self.config.posts_per_page == Some(self.page.posts.len()) {
            self.write_page()?;
        }
        Ok(())
    }

    /// Write the remainder page, if any. A no-op on an empty page, so no
    /// zero-post files are ever emitted.
    fn flush(&mut self) -> Result<(), BuildError> {
        if !self.page.posts.is_empty() {
            self.write_page()?;
        }
        Ok(())
    }
}

/// Serialize with 3-space indentation.
fn to_json_3_indent<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"   ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
