//! Wordle Advisor - CLI
//!
//! Ranks the next Wordle guess by expected information gain and generates the
//! offline opening cache and quality-tier snapshots.

use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use wordle_advisor::{
    commands::{AdvisorSources, build_advisor, generate_openings, generate_tiers, parse_history, suggest},
    config::AdvisorConfig,
    output::print_suggest_result,
    pool::PlayMode,
};

#[derive(Parser)]
#[command(
    name = "wordle_advisor",
    about = "Wordle guess advisor using expected information gain",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    sources: SourceArgs,

    /// Answers evaluated per entropy score; larger sets are sampled (0 disables sampling)
    #[arg(long, global = true, default_value_t = AdvisorConfig::default().sample_size)]
    sample_size: usize,

    /// Remaining answers above this use the early-game tier
    #[arg(long, global = true, default_value_t = AdvisorConfig::default().early_game_threshold)]
    early: usize,

    /// Remaining answers above this (and not early) use the mid-game tier
    #[arg(long, global = true, default_value_t = AdvisorConfig::default().late_game_threshold)]
    late: usize,
}

#[derive(Args)]
struct SourceArgs {
    /// Answer-eligible word list, one word per line
    #[arg(short, long, global = true, default_value = "answers.txt")]
    answers: PathBuf,

    /// Guess-only word list
    #[arg(short, long, global = true)]
    guesses: Option<PathBuf>,

    /// Opening cache JSON
    #[arg(long, global = true)]
    openings: Option<PathBuf>,

    /// Quality tiers JSON
    #[arg(long, global = true)]
    tiers: Option<PathBuf>,

    /// Used answers CSV (word,game_id,date)
    #[arg(long, global = true)]
    used: Option<PathBuf>,

    /// Used answers from this game id onward stay answer-eligible
    #[arg(long, global = true, requires = "used")]
    cutoff: Option<u32>,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend the next guess for a history like `crane=YGWWW slate=WWGGY`
    Suggest {
        /// Guesses so far as word=FEEDBACK (G/Y/W/. per letter)
        history: Vec<String>,

        /// Only suggest words consistent with all feedback
        #[arg(long)]
        hard: bool,

        /// Number of recommendations
        #[arg(short = 'n', long, default_value_t = AdvisorConfig::default().top_n)]
        top: usize,

        /// Print JSON instead of the table
        #[arg(long)]
        json: bool,
    },

    /// Generate the opening cache for both modes
    Openings {
        /// Openings kept per mode
        #[arg(short = 'n', long, default_value_t = AdvisorConfig::default().top_n)]
        top: usize,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate quality tiers from the full vocabulary
    Tiers {
        /// Guess-only words kept for the mid-game tier
        #[arg(short = 'n', long, default_value = "100")]
        top_guess_only: usize,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl From<SourceArgs> for AdvisorSources {
    fn from(args: SourceArgs) -> Self {
        Self {
            answers: args.answers,
            guesses: args.guesses,
            openings: args.openings,
            tiers: args.tiers,
            used_words: args.used,
            cutoff: args.cutoff,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if cli.late > cli.early {
        bail!("--late ({}) must not exceed --early ({})", cli.late, cli.early);
    }

    let config = AdvisorConfig {
        sample_size: cli.sample_size,
        early_game_threshold: cli.early,
        late_game_threshold: cli.late,
        ..AdvisorConfig::default()
    };
    let sources = AdvisorSources::from(cli.sources);

    match cli.command {
        Commands::Suggest {
            history,
            hard,
            top,
            json,
        } => run_suggest_command(&sources, config, &history, hard, top, json),
        Commands::Openings { top, output } => {
            // A stale cache would short-circuit the ranking being generated
            let sources = AdvisorSources {
                openings: None,
                ..sources
            };
            let advisor = build_advisor(&sources, config)?;
            generate_openings(&advisor, top, output.as_deref())
        }
        Commands::Tiers {
            top_guess_only,
            output,
        } => {
            let advisor = build_advisor(&sources, config)?;
            generate_tiers(&advisor, top_guess_only, output.as_deref())
        }
    }
}

fn run_suggest_command(
    sources: &AdvisorSources,
    config: AdvisorConfig,
    history: &[String],
    hard: bool,
    top: usize,
    json: bool,
) -> Result<()> {
    let history = parse_history(history)?;
    let advisor = build_advisor(sources, AdvisorConfig { top_n: top, ..config })?;
    let mode = if hard { PlayMode::Hard } else { PlayMode::Normal };

    let result = suggest(&advisor, history, mode, top);
    if json {
        println!("{}", serde_json::to_string_pretty(&result.recommendations)?);
    } else {
        print_suggest_result(&result);
    }
    Ok(())
}
