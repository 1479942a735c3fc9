//! lmpmap binary entry point

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use lmpmap::cli::{Cli, Commands, ConfigCommands};
use lmpmap::tui::current_theme;

fn main() {
    let cli = Cli::parse();

    // Logging is best effort; nothing else depends on it
    let _ = lmpmap::logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        tracing::error!(error = %format!("{:#}", e), "command failed");
        let theme = current_theme();
        eprintln!("{}", theme.error_text(&format!("Error: {:#}", e)));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Play(args) => commands::play::handle(args),
        Commands::Inspect(args) => commands::inspect::handle(args),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Edit => commands::config::handle_edit(),
            ConfigCommands::Path => commands::config::handle_path(),
        },
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "lmpmap", &mut std::io::stdout());
            Ok(())
        }
    }
}
