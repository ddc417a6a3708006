use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use latin_quiz::{
    Case, DEFAULT_CASES, DEFAULT_LENGTH, DEFAULT_SLOT_ATTEMPTS, Declension, Quiz, QuizGenerator,
    QuizSettings, ReferenceData,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

#[derive(Parser, Debug)]
#[command(version, about = "Latin noun declension quiz", long_about = None)]
struct Args {
    /// Reference dataset (JSON); the bundled dataset is used when omitted
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Declensions to practice, e.g. "1,2,3"
    #[arg(long, value_delimiter = ',', default_value = "1")]
    declensions: Vec<Declension>,

    /// Cases to practice, e.g. "nominative,genitive"
    #[arg(long, value_delimiter = ',')]
    cases: Vec<Case>,

    /// Number of questions
    #[arg(short, long, default_value_t = DEFAULT_LENGTH)]
    length: usize,

    /// Seed for reproducible quizzes
    #[arg(long)]
    seed: Option<u64>,

    /// Random combinations tried per question before it is skipped
    #[arg(long, default_value_t = DEFAULT_SLOT_ATTEMPTS)]
    attempts: usize,

    /// Print one generated quiz as JSON instead of starting the quiz
    #[arg(long)]
    print: bool,

    /// Write logs to this file (interactive mode discards them otherwise)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let cases = if args.cases.is_empty() {
        DEFAULT_CASES.to_vec()
    } else {
        args.cases.clone()
    };
    let settings = QuizSettings::new(args.declensions.iter().copied(), cases, args.length)
        .context("invalid quiz settings")?;

    let data = ReferenceData::load_or_fallback(args.data.as_deref());
    let rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    if args.print {
        let questions = QuizGenerator::new(&data, &settings, rng)
            .with_attempts(args.attempts)
            .generate_quiz();
        let mut stdout = io::stdout().lock();
        serde_json::to_writer_pretty(&mut stdout, &questions)
            .context("failed to write quiz")?;
        writeln!(stdout)?;
        return Ok(());
    }

    Quiz::new(data, settings, rng)
        .with_attempts(args.attempts)
        .run()
        .context("error running quiz")?;
    Ok(())
}

fn init_logging(args: &Args) -> Result<()> {
    let writer = match &args.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        None if args.print => BoxMakeWriter::new(io::stderr),
        None => BoxMakeWriter::new(io::sink),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Ok(())
}
