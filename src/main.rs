//! Puzzle Insight - command line entry point
//!
//! Reads one board snapshot (file or stdin), answers one query and prints the
//! result as JSON or text. Logs go to stderr; set `RUST_LOG` to change the
//! filter.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use puzzle_insight::board::{render_snapshot, GridParser};
use puzzle_insight::core::config::AnalyzerConfig;
use puzzle_insight::core::error::Result;
use puzzle_insight::core::types::Direction;
use puzzle_insight::help::RuleHelp;
use puzzle_insight::navigation::MoveOptions;
use puzzle_insight::query::{Query, QueryExecutor};

/// Rule inference and reachability for rule-rewriting grid puzzles
#[derive(Parser, Debug)]
#[command(name = "puzzle-insight")]
#[command(disable_help_subcommand = true)]
#[command(about = "Answer rule and reachability questions about a puzzle board snapshot")]
struct Args {
    /// Analyzer config (TOML); built-in defaults when absent
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Snapshot file, `-` for stdin
    #[arg(long, default_value = "-")]
    snapshot: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List active rules
    Rules,
    /// Positions of the kind holding a property
    Positions { property: String },
    /// Reachable entities and word tiles, grouped by row
    Reachable,
    /// Whether any occurrence of an entity is reachable
    IsReachable {
        entity: String,
        /// Look for the word tile instead of the object
        #[arg(long)]
        word_tile: bool,
    },
    /// Moves that end by entering (x, y) with the given direction
    Path {
        x: usize,
        y: usize,
        last_move: Direction,
    },
    /// Validate proposed plans from a JSON file
    Validate { plans: PathBuf },
    /// Rules, positions, reachability and a route to win
    Insights,
    /// Re-render the snapshot in canonical layout
    Render,
    /// Rule help text
    Help {
        /// Help JSON file
        #[arg(long)]
        file: PathBuf,
        topic: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("puzzle_insight=info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => AnalyzerConfig::load(path)?,
        None => AnalyzerConfig::default(),
    };

    // Help never needs a snapshot
    if let Command::Help { file, topic } = &args.command {
        let help = RuleHelp::load(file)?;
        println!("{}", help.lookup(topic.as_deref())?);
        return Ok(());
    }

    let snapshot = read_snapshot(&args.snapshot)?;

    if let Command::Render = args.command {
        let board = GridParser::new(&config.format).parse(&snapshot)?;
        print!("{}", render_snapshot(&board, &config.format));
        return Ok(());
    }

    let query = match args.command {
        Command::Rules => Query::Rules,
        Command::Positions { property } => Query::Positions { property },
        Command::Reachable => Query::Reachable,
        Command::IsReachable { entity, word_tile } => Query::IsReachable { entity, word_tile },
        Command::Path { x, y, last_move } => Query::ShortestPath { x, y, last_move },
        Command::Validate { plans } => {
            let options: MoveOptions = serde_json::from_str(&fs::read_to_string(&plans)?)?;
            Query::Validate {
                options: options.options,
            }
        }
        Command::Insights => Query::Insights,
        Command::Render | Command::Help { .. } => return Ok(()),
    };

    let executor = QueryExecutor::new(config);
    let response = executor.execute(&snapshot, &query)?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&response)?),
        OutputFormat::Text => println!("{}", response),
    }
    Ok(())
}

fn read_snapshot(source: &str) -> Result<String> {
    if source == "-" {
        tracing::debug!("Reading snapshot from stdin");
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        tracing::debug!("Reading snapshot from {}", source);
        Ok(fs::read_to_string(source)?)
    }
}
