use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use spellingbee::{
    sorted, LetterBank, Letters, Result, SpellingBeeSolver, DEFAULT_MIN_LENGTH, DEFAULT_WORDLIST,
};
use tracing::{error, info};

/// Find the words that can be spelled from a set of letters.
#[derive(Debug, Parser)]
#[clap(name = "spellingbee", version)]
struct Opt {
    /// Letters a word may be spelled with, each usable any number of times
    available: Letters,

    /// Letters every word must contain
    required: Option<Letters>,

    /// Newline delimited dictionary to search
    #[clap(long, short, env = "SPELLINGBEE_WORDLIST", default_value = DEFAULT_WORDLIST)]
    wordlist: PathBuf,

    /// Shortest word to report
    #[clap(long, short, env = "SPELLINGBEE_MIN_LENGTH", default_value_t = DEFAULT_MIN_LENGTH)]
    min_length: usize,

    /// Print at most this many words
    #[clap(long = "limit", short = 'n')]
    limit: Option<usize>,

    /// Show a progress bar while reading the wordlist
    #[clap(long)]
    progress: bool,

    /// Make output more verbose, can be specified more than once
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn configure_logging(verbosity: u8) {
    use tracing_subscriber::layer::SubscriberExt;

    let mut directives = match verbosity {
        0 => "spellingbee=info",
        1 => "spellingbee=debug",
        _ => "spellingbee=trace",
    }
    .to_string();
    if let Ok(overrides) = std::env::var("RUST_LOG") {
        directives = overrides;
    }

    let env_filter = tracing_subscriber::filter::EnvFilter::new(directives);
    let registry = tracing_subscriber::Registry::default().with(env_filter);
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(verbosity > 1);

    let _ = tracing::subscriber::set_global_default(registry.with(fmt_layer));
}

fn run(opt: Opt) -> Result<()> {
    let letters = LetterBank::new(
        opt.available,
        opt.required.unwrap_or_default(),
        opt.min_length,
    )?;
    let solver = SpellingBeeSolver::new(letters).with_progress(opt.progress);
    let solutions = solver.solve_path(&opt.wordlist)?;
    info!("Found {} words", solutions.len());

    let limit = opt.limit.unwrap_or(usize::MAX);
    for word in sorted(solutions).into_iter().take(limit) {
        println!("{word}");
    }

    Ok(())
}

fn main() -> ExitCode {
    // a missing .env file is not an error
    dotenv::dotenv().ok();

    let opt = Opt::parse();
    configure_logging(opt.verbose);

    match run(opt) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
