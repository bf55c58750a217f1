use blog_builder::cache::CacheConsumer;
use blog_builder::config;
use blog_builder::output::{self, DirWriter, LogConsumer};
use blog_builder::timeline::TimelineConsumer;
use blog_builder::traverse::{self, Consumer};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "blog-builder")]
#[command(about = "Metadata extractor and timeline builder for static HTML blogs")]
#[command(long_about = "\
Metadata extractor and timeline builder for static HTML blogs

Your filesystem is the data source. Each post lives in a dated directory
containing an index.html; the build extracts post metadata into JSON
sidecar files and aggregates them into paginated timeline listings.

Content structure:

  posts/
  ├── config.toml                      # Builder config (optional)
  ├── 251013-some-description/         # Post (YYMMDD- prefix = included)
  │   ├── index.html                   # Source content
  │   └── blog-builder-metadata.json   # Sidecar cache (written by build)
  ├── 251014-some-other-description/
  │   └── index.html
  └── fixtures/                        # No date prefix = invisible

Extraction (CSS classes, configurable):
  Title:  first element with class blog-builder-title
  Teaser: first element with class blog-builder-teaser
  Tags:   every element with class blog-builder-tag, in document order
  Date:   directory name prefix 251013- → 2025-10-13
  URL:    /<directory name>

A directory that already has its sidecar is never re-extracted. Delete the
sidecar to force re-extraction of one post.

Run 'blog-builder gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Posts directory
    #[arg(long, default_value = "posts", global = true)]
    source: PathBuf,

    /// Output directory for timeline page files
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the full pipeline: extract sidecars, then build timeline pages
    Build,
    /// Extract metadata sidecars only
    Extract,
    /// Build timeline pages from existing sidecars only
    Timeline,
    /// List qualifying post directories without writing anything
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let config = config::load_config(&cli.source)?;
            let mut log = LogConsumer::default();
            let mut cache = CacheConsumer::new(config.clone());
            let mut timeline =
                TimelineConsumer::new(Box::new(DirWriter::new(&cli.output)), config);
            let visited = {
                let mut consumers: Vec<&mut dyn Consumer> =
                    vec![&mut log, &mut cache, &mut timeline];
                let visited = traverse::qualifying_dirs(&cli.source)?.len();
                traverse::traverse(&cli.source, &mut consumers)?;
                traverse::flush_all(&mut consumers)?;
                visited
            };
            output::print_build_summary(visited, cache.written(), timeline.pages_written());
        }
        Command::Extract => {
            let config = config::load_config(&cli.source)?;
            let mut log = LogConsumer::default();
            let mut cache = CacheConsumer::new(config);
            let visited = traverse::qualifying_dirs(&cli.source)?.len();
            {
                let mut consumers: Vec<&mut dyn Consumer> = vec![&mut log, &mut cache];
                traverse::traverse(&cli.source, &mut consumers)?;
                traverse::flush_all(&mut consumers)?;
            }
            output::print_build_summary(visited, cache.written(), 0);
        }
        Command::Timeline => {
            let config = config::load_config(&cli.source)?;
            let mut timeline =
                TimelineConsumer::new(Box::new(DirWriter::new(&cli.output)), config);
            let visited = traverse::qualifying_dirs(&cli.source)?.len();
            {
                let mut consumers: Vec<&mut dyn Consumer> = vec![&mut timeline];
                traverse::traverse(&cli.source, &mut consumers)?;
                traverse::flush_all(&mut consumers)?;
            }
            output::print_build_summary(visited, 0, timeline.pages_written());
        }
        Command::Check => {
            let dirs = traverse::qualifying_dirs(&cli.source)?;
            output::print_check_output(&dirs);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
