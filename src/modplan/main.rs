use clap::Parser;
use console::style;
use directories::ProjectDirs;
use modplan::error::Result;
use modplan::logic::Logic;
use modplan::model::{Application, VersionedModel};
use modplan::storage::{JsonStorage, Storage};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let data_dir = resolve_data_dir(&cli);
    let storage = JsonStorage::new(data_dir);

    // A broken data file should not lock the user out of the planner.
    let initial = match storage.load() {
        Ok(Some(snapshot)) => snapshot,
        Ok(None) => Application::default(),
        Err(cause) => {
            warn!(%cause, "could not read persisted data, starting empty");
            Application::default()
        }
    };
    let mut logic = Logic::new(VersionedModel::new(initial), storage);

    println!("modplan - type `help` for the command list.");
    repl(&mut logic)
}

fn repl(logic: &mut Logic<JsonStorage>) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        if line.trim().is_empty() {
            continue;
        }

        match logic.execute(&line) {
            Ok(result) => {
                println!("{}", result.feedback);
                if result.is_exit {
                    break;
                }
            }
            Err(e) => println!("{}", style(e).red()),
        }
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "modplan=debug" } else { "modplan=warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn resolve_data_dir(cli: &Cli) -> PathBuf {
    if let Some(dir) = &cli.data_dir {
        return dir.clone();
    }
    ProjectDirs::from("com", "modplan", "modplan")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".modplan"))
}
