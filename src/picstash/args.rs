use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for dev builds.
/// Format: "0.3.2" or "0.3.2@abc1234 2024-01-15 14:30"
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "picstash", version = get_version())]
#[command(about = "Fetch an image into the next numbered storage slot and publish it", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Image URL (shorthand for `picstash add <url>`)
    pub url: Option<String>,

    /// Storage root (defaults to the current directory)
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,

    /// Place slots under an items/ collection
    #[arg(long, global = true)]
    pub items: bool,

    /// Skip the git stage/commit/push step
    #[arg(long, global = true)]
    pub no_publish: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch an image into the next numbered slot and publish it
    #[command(alias = "a")]
    Add {
        /// URL of the image to ingest
        url: String,
    },

    /// Print the next slot number without creating anything
    #[command(alias = "n")]
    Next,

    /// List existing slots
    #[command(alias = "ls")]
    List,

    /// Get or set configuration
    Config {
        /// Configuration key (layout, quality)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
