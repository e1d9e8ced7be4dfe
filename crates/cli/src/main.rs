mod cmd;
mod logging;

use atlink_core::buffer::Position;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "atl", version, about = "Symbol-triggered note linking for markdown vaults")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and check linking settings against the vault
    Doctor,

    /// List ranked link candidates for a trigger symbol and query
    Candidates(CandidatesArgs),

    /// Type text into a note and insert the chosen link
    Mention(MentionArgs),
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    /// Target paths only, one per line
    Quiet,
}

#[derive(Debug, Args)]
pub struct CandidatesArgs {
    /// Trigger symbol whose scope applies
    #[arg(long, default_value = "@")]
    pub symbol: String,

    /// Query typed after the symbol (empty lists everything)
    #[arg(long, default_value = "")]
    pub query: String,

    /// Show at most this many candidates
    #[arg(long)]
    pub limit: Option<usize>,

    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct MentionArgs {
    /// Note to edit, relative to the vault root
    #[arg(long)]
    pub note: String,

    /// Where typing starts, as 1-based LINE:COL (default: end of the note)
    #[arg(long, value_parser = parse_position)]
    pub at: Option<Position>,

    /// Characters to type, e.g. "@bran"
    #[arg(long = "type")]
    pub text: String,

    /// Pick the Nth candidate (1-based) instead of prompting
    #[arg(long)]
    pub select: Option<usize>,

    /// Never prompt; requires --select
    #[arg(long)]
    pub batch: bool,

    /// Print the resulting note instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

fn parse_position(s: &str) -> Result<Position, String> {
    let (line, col) = s.split_once(':').ok_or_else(|| format!("expected LINE:COL, got '{s}'"))?;
    let line: usize = line.trim().parse().map_err(|_| format!("invalid line in '{s}'"))?;
    let col: usize = col.trim().parse().map_err(|_| format!("invalid column in '{s}'"))?;
    if line == 0 || col == 0 {
        return Err("LINE and COL start at 1".to_string());
    }
    Ok(Position::new(line - 1, col - 1))
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Doctor => cmd::doctor::run(cli.config.as_deref(), cli.profile.as_deref()),
        Commands::Candidates(args) => {
            cmd::candidates::run(cli.config.as_deref(), cli.profile.as_deref(), args)
        }
        Commands::Mention(args) => {
            cmd::mention::run(cli.config.as_deref(), cli.profile.as_deref(), args)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_are_one_based() {
        assert_eq!(parse_position("1:1"), Ok(Position::new(0, 0)));
        assert_eq!(parse_position("3:12"), Ok(Position::new(2, 11)));
        assert!(parse_position("0:1").is_err());
        assert!(parse_position("7").is_err());
        assert!(parse_position("a:b").is_err());
    }
}
