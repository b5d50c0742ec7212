use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::debug;

use version_up::config::{Config, config_path, log_path};
use version_up::logging::init_logging;
use version_up::version::listing::{DirectoryLister, FileLister};
use version_up::version::next::{next_version, next_version_path};
use version_up::version::number::find_version;
use version_up::version::pattern::to_version_wildcard;
use version_up::version::publish::publish_file;
use version_up::version::resolver::resolve;

#[derive(Parser)]
#[command(name = "version-up")]
#[command(version, about = "Resolve and auto-increment versioned file names")]
struct Cli {
    /// Config file (defaults to $XDG_CONFIG_HOME/version-up/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a filename pattern against a directory and print JSON
    Resolve {
        /// Placeholder (`shot_v###.ma`) or concrete (`shot_v002.ma`) name
        pattern: String,
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
    /// Print the path of the next version of a file
    Next { path: PathBuf },
    /// Print the next version for version folders inside a directory
    Auto {
        dir: PathBuf,
        #[arg(long)]
        pattern: Option<String>,
    },
    /// Print the glob wildcard form of a concrete filename
    Wildcard { filename: String },
    /// Print the last version token found in a string
    Number {
        input: String,
        #[arg(long)]
        pattern: Option<String>,
    },
    /// Copy a file into a versioned publish folder
    Publish {
        source: PathBuf,
        target_root: PathBuf,
        #[arg(long)]
        pattern: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _log_guard = init_logging(&log_path());

    let config_file = cli.config.unwrap_or_else(config_path);
    let config = Config::load(&config_file)?;
    debug!("Loaded config from {:?}: {:?}", config_file, config);

    let lister = DirectoryLister;
    match cli.command {
        Command::Resolve { pattern, dir } => {
            let files = lister.list(&dir)?;
            let resolution = resolve(&pattern, &files)?;
            println!("{}", serde_json::to_string_pretty(&resolution)?);
        }
        Command::Next { path } => {
            let next = next_version_path(&lister, &path, config.normalize_filenames)?;
            println!("{}", next.display());
        }
        Command::Auto { dir, pattern } => {
            let pattern = pattern.unwrap_or(config.default_version_pattern);
            println!("{}", next_version(&lister, &dir, &pattern)?);
        }
        Command::Wildcard { filename } => {
            let wildcard = to_version_wildcard(&filename)
                .with_context(|| format!("No version digits in {filename:?}"))?;
            println!("{wildcard}");
        }
        Command::Number { input, pattern } => {
            let pattern = pattern.unwrap_or(config.default_version_pattern);
            println!("{}", find_version(&input, &pattern)?.unwrap_or_default());
        }
        Command::Publish {
            source,
            target_root,
            pattern,
        } => {
            let pattern = pattern.unwrap_or(config.publish_version_pattern);
            let outcome = publish_file(&lister, &source, &target_root, &pattern)?;
            println!("{}", outcome.path().display());
        }
    }

    Ok(())
}
