//! vsnotes CLI entry point.

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use vsnotes::cli::args::{Cli, Commands};
use vsnotes::cli::output::Output;
use vsnotes::cli::{create, list, tags, tree};
use vsnotes::config::Config;
use vsnotes::error::{NotesError, exit_code};
use vsnotes::store::NoteStore;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli).await {
        Ok(()) => ExitCode::from(exit_code::SUCCESS as u8),
        Err(e) => {
            if !cli.quiet {
                eprintln!("Error: {}", e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// Logs go to stderr. `RUST_LOG` takes precedence over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("vsnotes={}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: &Cli) -> Result<(), NotesError> {
    let config = Config::load(cli.config.as_deref())?;
    let output = Output::new(cli.output_format(), cli.quiet);

    let open_store = || -> Result<NoteStore, NotesError> {
        let root = config.resolve_store_path(cli.store.as_deref())?;
        NoteStore::new(root, config.ignore_patterns()?)
    };

    match &cli.command {
        Commands::List(args) => list::run(&open_store()?, &config, args, &output).await?,
        Commands::Tags => tags::get_tags(&open_store()?, &output).await?,
        Commands::Tagged(args) => tags::get_tagged(&open_store()?, &args.tag, &output).await?,
        Commands::Ls(args) => tree::ls(&open_store()?, args, &output).await?,
        Commands::Tree(args) => tree::tree(&open_store()?, &config, args, &output).await?,
        Commands::Title(args) => create::title(args, &output).await?,
        Commands::Templates => {
            let root = config.resolve_store_path(cli.store.as_deref())?;
            create::templates(&root, &config, &output).await?
        }
        Commands::New(args) => {
            let root = config.resolve_store_path(cli.store.as_deref())?;
            create::new_note(&root, &config, args, &output).await?
        }
    }

    Ok(())
}
