//! Metadata cache consumer.
//!
//! Persists extracted post metadata as a JSON sidecar file colocated with
//! each post's `index.html`. The sidecar doubles as the cache marker:
//! a directory that already has one is never re-extracted, so re-running
//! the walk over a processed tree is a no-op.
//!
//! # Skip rules
//!
//! - Sidecar already exists → skip (at-most-once extraction per directory).
//! - No `index.html` → skip; absence of source content is not a failure.
//!
//! Neither case is an error. Only actual read/write failures abort the walk.
//!
//! # Write semantics
//!
//! Sidecars are written as 2-space pretty-printed UTF-8 JSON, via a
//! temp-file-and-rename so a crashed run never leaves a half-written
//! sidecar that a later run would treat as a completed extraction.

use std::fs;
use std::io;
use std::path::Path;

use crate::config::BuilderConfig;
use crate::extract::Digest;
use crate::traverse::{BuildError, Consumer};

const INDEX_FILENAME: &str = "index.html";

/// Consumer that extracts and caches per-directory post metadata.
pub struct CacheConsumer {
    config: BuilderConfig,
    digest: Digest,
    written: usize,
}

impl CacheConsumer {
    pub fn new(config: BuilderConfig) -> Self {
        Self::with_digest(config, Digest::default())
    }

    pub fn with_digest(config: BuilderConfig, digest: Digest) -> Self {
        Self {
            config,
            digest,
            written: 0,
        }
    }

    /// Number of sidecar files written by this consumer so far.
    pub fn written(&self) -> usize {
        self.written
    }
}

impl Consumer for CacheConsumer {
    fn consume(&mut self, dir_path: &Path) -> Result<(), BuildError> {
        let metadata_path = dir_path.join(&self.config.metadata_file);
        let index_path = dir_path.join(INDEX_FILENAME);

        if metadata_path.exists() {
            log::debug!("sidecar present, skipping {}", dir_path.display());
            return Ok(());
        }
        if !index_path.exists() {
            log::debug!("no {INDEX_FILENAME} in {}, skipping", dir_path.display());
            return Ok(());
        }

        let metadata = self.digest.process(&index_path, &self.config)?;
        let json = serde_json::to_string_pretty(&metadata).map_err(io::Error::from)?;
        write_replace(&metadata_path, &json)?;
        self.written += 1;
        Ok(())
    }
}

/// Write `content` to `path` through a sibling temp file and rename, so the
/// final path only ever holds complete content.
fn write_replace(path: &Path, content: &str) -> io::Result<()> {
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, content)?;
    fs::rename(&tmp, path)
}
