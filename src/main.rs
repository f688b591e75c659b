use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tasktrack::cli::Cli;
use tasktrack::cmd::*;
use tasktrack::config::Config;
use tasktrack::error::{exit_codes, StoreError, TaskError};

fn main() {
    // Logs go to stderr so command output on stdout stays clean.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let cli = Cli::parse();
    let config = Config::from_cli(&cli);

    let result = match cli.command {
        Commands::Add { name, deadline, category, priority, recurring } =>
            cmd_add(&config, name, deadline, category, priority, recurring),

        Commands::List { pending, done } => cmd_list(&config, pending, done),

        Commands::Search { query } => cmd_search(&config, query),

        Commands::Filter { category } => cmd_filter(&config, category),

        Commands::Complete { name, positions } => cmd_complete(&config, name, positions),

        Commands::Delete { name, position } => cmd_delete(&config, name, position),

        Commands::Menu => cmd_menu(&config),

        Commands::Migrate => cmd_migrate(&config),

        Commands::Completions { shell } => {
            cmd_completions(shell);
            Ok(())
        }
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(exit_code(&err));
    }
}

fn exit_code(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<TaskError>() {
            return e.exit_code();
        }
        if cause.downcast_ref::<StoreError>().is_some() {
            return exit_codes::PERSISTENCE_FAILED;
        }
    }
    exit_codes::GENERAL
}
