//! # Blog Builder
//!
//! Metadata extractor and timeline builder for static HTML blogs. Your
//! filesystem is the data source: each post lives in a dated directory
//! (`251013-some-description/`) containing an `index.html`, and the build
//! derives everything else from that convention.
//!
//! # Architecture: One Walk, Ordered Consumers
//!
//! A single traversal drives the whole build. The walker resolves the list
//! of qualifying post directories once, in ascending name order (which the
//! `YYMMDD` prefix makes chronological), then streams each directory through
//! a list of consumers in registration order:
//!
//! ```text
//! traverse posts/
//!   ├── LogConsumer       251013-some-description        (observational)
//!   ├── CacheConsumer     index.html → metadata sidecar  (idempotent)
//!   └── TimelineConsumer  sidecar → timeline page files  (paginated)
//! ```
//!
//! This shape exists for three reasons:
//!
//! - **Idempotent re-runs**: the sidecar file is both the cache and its own
//!   marker. Re-running the build over a processed tree writes nothing.
//! - **Composability**: consumers are independent; the CLI registers only
//!   the ones a subcommand needs. A consumer's side effects are visible to
//!   the next consumer in the same pass, which is how the timeline reads
//!   sidecars written moments earlier.
//! - **Testability**: consumers take their sinks ([`output::Logger`],
//!   [`output::Writer`]) as constructor parameters, so tests swap in
//!   recording doubles and never touch stdout or an output directory.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`traverse`] | Walks the content root, dispatches to [`traverse::Consumer`]s, owns [`traverse::BuildError`] |
//! | [`extract`] | HTML → [`types::Post`] extraction via configured CSS classes |
//! | [`cache`] | Metadata cache consumer — idempotent JSON sidecar writer |
//! | [`timeline`] | Timeline consumer — fixed-size page accumulator and writer |
//! | [`config`] | `config.toml` loading, defaults, validation |
//! | [`naming`] | `YYMMDD-description` directory convention parser |
//! | [`types`] | Serialized shapes: `Post`, `PostMetadata`, `Page` |
//! | [`output`] | Sink traits, console/filesystem defaults, CLI display |
//!
//! # Design Decisions
//!
//! ## Scraper Over Hand-Rolled Parsing
//!
//! HTML is parsed with the [`scraper`] crate (a real html5ever tree with CSS
//! selectors), not regexes. Extraction rules stay declarative: "first
//! element with this class" is a selector and an iterator call, and broken
//! markup degrades the way browsers degrade it.
//!
//! ## The Sidecar Is the Cache
//!
//! There is no separate cache manifest. A post directory either has its
//! metadata JSON next to `index.html` or it doesn't, and that file's
//! existence is the entire incremental-build story. Deleting a sidecar is
//! how you force re-extraction of one post; deleting all of them rebuilds
//! everything.
//!
//! ## Dates From Directory Names, Not Content
//!
//! The post date comes from the `YYMMDD` prefix, never from the HTML. The
//! two-digit year maps to the 2000s unconditionally — the convention is a
//! blog's publication timeline, not a general calendar.

pub mod cache;
pub mod config;
pub mod extract;
pub mod naming;
pub mod output;
pub mod timeline;
pub mod traverse;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
