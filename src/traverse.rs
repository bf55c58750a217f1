//! Directory traversal and consumer dispatch.
//!
//! The walker is the build's driver: it resolves the list of qualifying post
//! directories once, in ascending name order, then streams each directory
//! through every registered [`Consumer`]. The walker itself performs no
//! writes; all side effects belong to consumers.
//!
//! Consumer registration order matters within a pass. The metadata cache
//! consumer must run before the timeline consumer so the sidecar files it
//! writes are visible to the timeline read in the same pass.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::ConfigError;
use crate::naming;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed metadata file {}: {source}", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// A unit of per-directory processing invoked by the walker.
///
/// `consume` is called once per qualifying directory per traversal, in
/// directory order. Consumers that accumulate state across directories
/// override `flush`, which the caller invokes on every consumer after the
/// walk completes; the default is a no-op.
pub trait Consumer {
    fn consume(&mut self, dir_path: &Path) -> Result<(), BuildError>;

    fn flush(&mut self) -> Result<(), BuildError> {
        Ok(())
    }
}

/// List the qualifying post directories under a root, sorted by name.
///
/// A qualifying directory is an immediate subdirectory whose name follows
/// the `YYMMDD-description` convention. Files and non-matching directories
/// are silently skipped. The sort is byte-lexicographic, which for the
/// fixed-width date prefix equals chronological order.
///
/// Fails with an IO error when the root itself is unreadable.
pub fn qualifying_dirs(root: &Path) -> Result<Vec<PathBuf>, BuildError> {
    let mut dirs: Vec<PathBuf> = fs::read_dir(root)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            if !p.is_dir() {
                return false;
            }
            let qualifies = p
                .file_name()
                .map(|n| naming::is_post_dirname(&n.to_string_lossy()))
                .unwrap_or(false);
            if !qualifies {
                log::debug!("skipping non-post entry {}", p.display());
            }
            qualifies
        })
        .collect();

    dirs.sort();
    Ok(dirs)
}

/// Walk the content root, invoking every consumer on each qualifying
/// directory in sorted order.
///
/// Consumers run in registration order; one consumer's side effects are
/// visible to the next within the same directory. An empty consumer list is
/// a no-op. The first consumer error aborts the walk.
///
/// `flush` is *not* called here — callers finalize accumulating consumers
/// via [`flush_all`] once the walk completes.
pub fn traverse(root: &Path, consumers: &mut [&mut dyn Consumer]) -> Result<(), BuildError> {
    for dir in qualifying_dirs(root)? {
        for consumer in consumers.iter_mut() {
            consumer.consume(&dir)?;
        }
    }
    Ok(())
}

/// Flush every consumer, in registration order.
pub fn flush_all(consumers: &mut [&mut dyn Consumer]) -> Result<(), BuildError> {
    for consumer in consumers.iter_mut() {
        consumer.flush()?;
    }
    Ok(())
}
