use clap::Parser;
use todo::cli::commands::{Cli, Commands};
use todo::cli::replay;
use todo::io::config_io::{self, ConfigSource};
use todo::logging;

fn main() {
    if let Err(e) = run(Cli::parse()) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let (config, source) = config_io::load_config_from_env(cli.config.as_deref())?;

    match cli.command {
        None => {
            // No subcommand → launch TUI
            logging::init_tui_logging(&config.log, cli.log_file.as_deref())?;
            log_config_source(&source);
            todo::tui::run(&config)
        }
        Some(Commands::Replay(args)) => {
            logging::init_cli_logging(&config.log, cli.log_file.as_deref())?;
            log_config_source(&source);
            replay::cmd_replay(args, &config)
        }
    }
}

fn log_config_source(source: &ConfigSource) {
    match source {
        ConfigSource::File(path) => tracing::info!(path = %path.display(), "loaded config"),
        ConfigSource::Defaults => tracing::info!("no config file, using defaults"),
    }
}
