//! Morphology - CLI
//!
//! Word-ladder puzzle game with TUI and CLI modes, plus puzzle generation
//! and word-graph analysis tools.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use morphology::{
    commands::{
        GenerateConfig, analyze_graph, analyze_word, check_words, generate_puzzles,
        run_benchmark, run_simple,
    },
    config::GameConfig,
    graph::GraphBuilder,
    logging,
    output::{
        print_analysis_result, print_benchmark_result, print_check_result, print_generate_result,
        print_word_analysis,
    },
    puzzle::GameWords,
    wordlists::loader::{EMBEDDED_SOURCE, load_source},
};

#[derive(Parser)]
#[command(
    name = "morphology",
    about = "Word-ladder puzzles: change one letter at a time to reach the target",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Letters per word
    #[arg(short = 'l', long, global = true, default_value = "5")]
    length: usize,

    /// Fewest moves a puzzle's shortest solution may take
    #[arg(long, global = true, default_value = "2")]
    min_steps: usize,

    /// Most moves a puzzle's shortest solution may take
    #[arg(long, global = true, default_value = "5")]
    max_steps: usize,

    /// Suffix excluded from puzzle words (plurals by default)
    #[arg(long, global = true, default_value = "s")]
    suffix: String,

    /// Keep words ending in the suffix
    #[arg(long, global = true)]
    keep_plurals: bool,

    /// Pairs sampled before giving up on a puzzle
    #[arg(long, global = true, default_value = "10000")]
    attempts: usize,

    /// Graph builder: pairwise (default) or bucketed
    #[arg(short = 'g', long, global = true, default_value = "pairwise")]
    graph: String,

    /// Wordlist: 'embedded' (default) or path to file
    #[arg(short = 'w', long, global = true, default_value = EMBEDDED_SOURCE)]
    wordlist: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (play without TUI)
    Simple,

    /// Generate puzzles
    Generate {
        /// Number of puzzles to generate
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,

        /// Seed for reproducible puzzles
        #[arg(short, long)]
        seed: Option<u64>,

        /// Show a sample solution for each puzzle
        #[arg(short = 'p', long)]
        show_path: bool,
    },

    /// Analyze the word graph, or one word's place in it
    Analyze {
        /// Word to analyze
        word: Option<String>,
    },

    /// Benchmark graph construction and puzzle generation
    Benchmark {
        /// Number of puzzles to generate
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },

    /// Check whether one word may follow another
    Check {
        /// Current word
        previous: String,

        /// Proposed next word
        candidate: String,
    },
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let config = GameConfig {
            word_length: self.length,
            min_steps: self.min_steps,
            max_steps: self.max_steps,
            exclude_suffix: (!self.keep_plurals && !self.suffix.is_empty())
                .then(|| self.suffix.clone()),
            max_attempts: self.attempts,
            graph_builder: GraphBuilder::from_name(&self.graph),
        };
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = cli.game_config()?;
    let raw = load_source(&cli.wordlist)
        .with_context(|| format!("failed to load word list '{}'", cli.wordlist))?;
    info!("Loaded {} raw words from {}", raw.len(), cli.wordlist);

    match cli.command {
        Some(Commands::Benchmark { count }) => {
            println!("Running benchmark with {count} puzzles...");
            let result = run_benchmark(&raw, &config, count, true)?;
            print_benchmark_result(&result);
            Ok(())
        }
        command => {
            let game = GameWords::build(&raw, &config).context("no puzzle available")?;
            run_game_command(command, &game)
        }
    }
}

fn run_game_command(command: Option<Commands>, game: &GameWords) -> Result<()> {
    match command {
        Some(Commands::Simple) => run_simple(game).map_err(|e| anyhow::anyhow!(e)),
        Some(Commands::Generate {
            count,
            seed,
            show_path,
        }) => {
            let mut config = GenerateConfig::new(count);
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            let result = generate_puzzles(game, config)?;
            print_generate_result(&result, show_path);
            Ok(())
        }
        Some(Commands::Analyze { word: Some(word) }) => {
            let result = analyze_word(&word, game).map_err(|e| anyhow::anyhow!(e))?;
            print_word_analysis(&result);
            Ok(())
        }
        Some(Commands::Analyze { word: None }) => {
            print_analysis_result(&analyze_graph(game));
            Ok(())
        }
        Some(Commands::Check {
            previous,
            candidate,
        }) => {
            print_check_result(&check_words(&previous, &candidate, game.dictionary()));
            Ok(())
        }
        Some(Commands::Play) | None => run_play_command(game),
        // Handled before the game words are built
        Some(Commands::Benchmark { .. }) => Ok(()),
    }
}

fn run_play_command(game: &GameWords) -> Result<()> {
    use morphology::interactive::{App, run_tui};

    let app = App::new(game)?;
    run_tui(app)
}
