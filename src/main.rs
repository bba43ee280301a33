//! Hangman Solver - CLI
//!
//! Plays Hangman rounds for words read from stdin, benchmarks the solver on
//! a dictionary, or prints random dictionary words.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman_solver::{
    commands::{PlayConfig, Terminal, run_benchmark, run_play, run_random, select_targets},
    core::Word,
    output::print_benchmark_result,
    solver::StrategyType,
    wordlists::load_from_file,
};
use std::io::{self, IsTerminal};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hangman_solver",
    about = "Hangman solver driven by letter frequencies over a dictionary",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file, one or more words per line
    #[arg(short, long, global = true, env = "hangman_dict", default_value = "words.txt")]
    dict: PathBuf,

    /// Wrong guesses allowed per round (values below 1 mean 5)
    #[arg(
        short,
        long,
        global = true,
        env = "hangman_guesses",
        default_value_t = 5,
        allow_negative_numbers = true
    )]
    guesses: i64,

    /// Log every game state and guess
    #[arg(long, global = true, env = "hangman_debug")]
    debug: bool,

    /// Strategy: frequency (default) or random
    #[arg(short, long, global = true, default_value = "frequency")]
    strategy: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one round per word read from stdin (default)
    Play,

    /// Play dictionary words and report score statistics
    Benchmark {
        /// Only play the first N dictionary words
        #[arg(short, long)]
        limit: Option<usize>,

        /// Play N distinct random dictionary words
        #[arg(short = 'n', long, conflicts_with = "limit")]
        sample: Option<usize>,
    },

    /// Print N distinct random dictionary words
    Random {
        /// Number of words to print
        count: usize,
    },
}

fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn load_dictionary(config: &PlayConfig) -> Result<Vec<Word>> {
    load_from_file(&config.dict_path).with_context(|| {
        format!(
            "Cannot open dictionary file '{}' for reading",
            config.dict_path.display()
        )
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = PlayConfig::new(cli.dict, cli.guesses, cli.debug);
    init_logging(config.debug);

    let dictionary = load_dictionary(&config)?;

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(&cli.strategy, dictionary, &config),
        Commands::Benchmark { limit, sample } => {
            run_benchmark_command(&cli.strategy, dictionary, &config, limit, sample)
        }
        Commands::Random { count } => {
            run_random(&dictionary, count, &mut rand::rng(), &mut io::stdout().lock())
        }
    }
}

fn run_play_command(strategy_name: &str, dictionary: Vec<Word>, config: &PlayConfig) -> Result<()> {
    let mut strategy = StrategyType::from_name(strategy_name, dictionary.clone());

    let stdin = io::stdin();
    let mut terminal = Terminal {
        interactive: stdin.is_terminal(),
        input: stdin.lock(),
        output: io::stdout().lock(),
        errors: io::stderr().lock(),
    };

    run_play(&mut strategy, &dictionary, config, &mut terminal)?;
    Ok(())
}

fn run_benchmark_command(
    strategy_name: &str,
    dictionary: Vec<Word>,
    config: &PlayConfig,
    limit: Option<usize>,
    sample: Option<usize>,
) -> Result<()> {
    let targets = select_targets(&dictionary, limit, sample, &mut rand::rng())?;
    println!(
        "Running benchmark on {} words with up to {} wrong guesses...",
        targets.len(),
        config.max_wrong_guesses
    );

    let mut strategy = StrategyType::from_name(strategy_name, dictionary);
    let result = run_benchmark(&mut strategy, &targets, config.max_wrong_guesses)?;
    print_benchmark_result(&result);
    Ok(())
}
