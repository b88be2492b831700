pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use logscrub::ScrubMode;

#[derive(Parser)]
#[command(name = "logscrub")]
#[command(about = "Remove log and print statements from source code", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Write a default .logscrub.toml in the current project")]
    Init {
        #[arg(short, long, default_value = ".")]
        path: PathBuf,
    },

    #[command(about = "Scrub log statements from files (dry run unless --write)")]
    Clean {
        #[arg(help = "Files or directories to scrub (reads stdin if none given)")]
        paths: Vec<PathBuf>,
        #[arg(short, long, help = "Rewrite files in place")]
        write: bool,
        #[arg(short, long, help = "Force a language instead of inferring from extension")]
        language: Option<String>,
        #[arg(short, long, value_enum, help = "Override the configured scrub mode")]
        mode: Option<ModeArg>,
        #[arg(long, help = "Print the summary as JSON")]
        json: bool,
    },

    #[command(about = "Show what would be removed from a file")]
    Preview {
        #[arg(help = "File to preview")]
        path: PathBuf,
        #[arg(short, long, help = "Force a language instead of inferring from extension")]
        language: Option<String>,
    },

    #[command(about = "List supported languages")]
    Languages,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Delete,
    Comment,
}

impl From<ModeArg> for ScrubMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Delete => ScrubMode::Delete,
            ModeArg::Comment => ScrubMode::Comment,
        }
    }
}
