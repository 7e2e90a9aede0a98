use clap::Parser;

pub mod global;

pub use global::GlobalFlags;

/// Top-level CLI parser for the `ctxgen` binary.
#[derive(Debug, Parser)]
#[command(
    name = "ctxgen",
    version,
    about = "Pick database tables and project files, and bundle them into one LLM prompt context"
)]
pub struct Cli {
    /// Project root path (defaults to auto-detect via artisan/composer.json)
    #[arg(short, long)]
    pub project: Option<String>,

    /// Bundle file to write, relative to the project root
    #[arg(short, long)]
    pub output: Option<String>,

    /// Setup store file, relative to the project root
    #[arg(short, long)]
    pub store: Option<String>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            quiet: self.quiet,
            verbose: self.verbose,
            project: self.project.clone(),
            output: self.output.clone(),
            store: self.store.clone(),
        }
    }
}
