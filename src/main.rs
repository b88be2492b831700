mod cli;

use anyhow::Result;
use clap::Parser;
use cli::commands;

fn main() {
    // Setup tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    // Run the command and handle errors gracefully
    if let Err(err) = run_command(cli) {
        commands::display_error(&err);
        std::process::exit(1);
    }
}

fn run_command(cli: cli::Cli) -> Result<()> {
    use cli::Commands;

    match cli.command {
        Commands::Init { path } => commands::init::handle(&path),
        Commands::Clean {
            paths,
            write,
            language,
            mode,
            json,
        } => commands::clean::handle(paths, write, language, mode, json),
        Commands::Preview { path, language } => {
            commands::preview::handle(&path, language.as_deref())
        }
        Commands::Languages => commands::languages::handle(),
    }
}
