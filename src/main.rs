use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Mutex;

use arith_quiz::{Difficulty, Quiz, QuizError, QuizSession, RandomProblems, SessionResult};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Ten-question arithmetic quiz", long_about = None)]
struct Args {
    /// Difficulty for the first game: easy, moderate, advanced (or 1-3)
    #[arg(short, long)]
    difficulty: Option<Difficulty>,

    /// Seed for reproducible problems
    #[arg(long)]
    seed: Option<u64>,

    /// Read answers line by line from stdin instead of the terminal UI
    #[arg(long)]
    plain: bool,

    /// Print the last finished game as JSON on exit
    #[arg(long)]
    json: bool,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error running quiz: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), QuizError> {
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let source = match args.seed {
        Some(seed) => RandomProblems::seeded(seed),
        None => RandomProblems::new(),
    };
    let quiz = Quiz::new(QuizSession::with_source(Box::new(source)))
        .with_difficulty(args.difficulty);

    let result = if args.plain {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        quiz.run_plain(stdin.lock(), &mut stdout)?
    } else {
        quiz.run()?
    };

    if args.json {
        print_summary(result.as_ref())?;
    }
    Ok(())
}

fn print_summary(result: Option<&SessionResult>) -> Result<(), QuizError> {
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}

/// Logs go to a file because the terminal UI owns the screen.
fn init_logging(path: &Path) -> Result<(), QuizError> {
    let file = File::create(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("arith_quiz=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
