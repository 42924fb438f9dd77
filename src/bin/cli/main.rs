mod app;
mod commands;
mod render;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "kalimat", about = "Daily Levantine Arabic vocabulary picker", version)]
struct Cli {
    /// Config file (default: ~/.config/kalimat/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Vocabulary list, overriding the config file
    #[arg(long, global = true)]
    corpus: Option<PathBuf>,

    /// Progress file, overriding the config file
    #[arg(long, global = true)]
    seen: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Pick today's new words, write the hand-off file and remember them
    Run {
        /// Number of words (default: words_per_day from config)
        #[arg(long, allow_negative_numbers = true)]
        count: Option<i64>,
        /// Seed for a reproducible pick
        #[arg(long)]
        seed: Option<u64>,
        /// Write the hand-off document here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Show what a run would pick without saving anything
    Preview {
        /// Number of words (default: words_per_day from config)
        #[arg(long, allow_negative_numbers = true)]
        count: Option<i64>,
        /// Seed for a reproducible pick
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show how much of the corpus has been introduced
    Status,

    /// Forget all progress and start over
    Reset {
        /// Do not ask for confirmation
        #[arg(long)]
        yes: bool,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && std::io::stdout().is_terminal();

    let app = app::App::new(cli.config.as_deref(), cli.corpus, cli.seen)?;

    match cli.command {
        Command::Run { count, seed, out } => {
            commands::run::run(&app, count, seed, out.as_deref(), &cli.format, cli.no_color)?;
        }
        Command::Preview { count, seed } => {
            commands::preview::run(&app, count, seed, &cli.format, use_color)?;
        }
        Command::Status => {
            commands::status::run(&app, &cli.format, use_color)?;
        }
        Command::Reset { yes } => {
            commands::reset::run(&app, yes, &cli.format)?;
        }
    }

    Ok(())
}
