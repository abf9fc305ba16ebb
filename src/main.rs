use std::io;
use std::path::Path;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use plainquiz::cli::Cli;
use plainquiz::error::QuizError;
use plainquiz::session::{Session, SessionOptions};
use plainquiz::{parser, persist};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("plainquiz=warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), QuizError> {
    let cli = Cli::parse();
    let path = Path::new(&cli.path);

    let questions = parser::load_questions(path)?;

    // Handle --status
    if cli.status {
        return persist::print_status(&questions, path);
    }

    // Handle --export
    if let Some(ref export_path) = cli.export {
        persist::export_questions(&questions, Path::new(export_path))?;
        eprintln!("Questions exported to {}", export_path);
        return Ok(());
    }

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let options = SessionOptions {
        shuffle_questions: !cli.no_shuffle,
        shuffle_options: !cli.no_shuffle,
    };
    let base_dir = std::env::current_dir()?;

    let mut session = Session::new(rng, base_dir).with_options(options);
    session.run(questions, &mut io::stdin().lock(), &mut io::stdout().lock())?;

    Ok(())
}
