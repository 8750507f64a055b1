use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "todo", about = concat!("[ ] todo v", env!("CARGO_PKG_VERSION"), " - one list, one screen"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: $TODO_CONFIG, then ./todo.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Append logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a script of list operations without the TUI and print the result
    Replay(ReplayArgs),
}

#[derive(Args)]
pub struct ReplayArgs {
    /// Script file (default: stdin)
    pub file: Option<PathBuf>,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["todo", "--config", "x.toml"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
    }

    #[test]
    fn replay_args() {
        let cli = Cli::try_parse_from(["todo", "replay", "script.txt", "--json"]).unwrap();
        match cli.command {
            Some(Commands::Replay(args)) => {
                assert_eq!(args.file, Some(PathBuf::from("script.txt")));
                assert!(args.json);
            }
            None => panic!("expected replay"),
        }
    }
}
