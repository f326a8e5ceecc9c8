use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{anyhow, Context};
use clap::Parser;
use sofa_mover::config::SolverConfig;
use sofa_mover::scenario::Puzzle;
use sofa_mover::scenarios;
use sofa_mover::search::SearchError;

#[derive(Parser, Debug)]
#[command(name = "sofa")]
#[command(version)]
#[command(about = "Minimum number of moves to carry a 1x2 sofa to its destination")]
#[command(long_about = None)]
struct Cli {
    /// Puzzle file: `M N` then M*N cells. Reads stdin when absent or `-`.
    input: Option<PathBuf>,

    /// JSON solver config (obstacle sigils, unknown-cell policy, limits)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Run a builtin puzzle instead of reading input
    #[arg(long, conflicts_with = "input")]
    scenario: Option<String>,

    /// List builtin puzzle names and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Print search counters as JSON on stderr
    #[arg(long)]
    stats: bool,

    /// Debug-level logging (RUST_LOG takes precedence)
    #[arg(long, short)]
    verbose: bool,
}

/// Exit 2 for anything wrong with what the user handed us, 1 for search failures.
enum Failure {
    Input(anyhow::Error),
    Search(anyhow::Error),
}

impl Failure {
    fn report(self) -> ExitCode {
        match self {
            Failure::Input(e) => {
                eprintln!("Invalid input: {e:#}");
                ExitCode::from(2)
            }
            Failure::Search(e) => {
                eprintln!("Search failed: {e:#}");
                ExitCode::from(1)
            }
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(default.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(p) if p != Path::new("-") => {
            std::fs::read_to_string(p).with_context(|| format!("failed to read {}", p.display()))
        }
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn load_puzzle(cli: &Cli, cfg: &SolverConfig) -> anyhow::Result<Puzzle> {
    if let Some(name) = &cli.scenario {
        let builtin = scenarios::builtin(name).ok_or_else(|| {
            let known: Vec<&str> = scenarios::builtin_names().collect();
            anyhow!("unknown scenario `{name}` (known: {})", known.join(", "))
        })?;
        return builtin
            .puzzle()
            .with_context(|| format!("builtin scenario `{name}` is malformed"));
    }

    let text = read_input(cli.input.as_deref())?;
    Ok(Puzzle::parse(&text, &cfg.parse_options())?)
}

fn run(cli: &Cli) -> Result<(), Failure> {
    let cfg = match &cli.config {
        Some(path) => SolverConfig::load(path).map_err(|e| Failure::Input(e.into()))?,
        None => SolverConfig::default(),
    };

    let puzzle = load_puzzle(cli, &cfg).map_err(Failure::Input)?;

    let report = puzzle.solve(cfg.limits).map_err(|e| match e {
        SearchError::InvalidStart { .. } | SearchError::InvalidDestination { .. } => {
            Failure::Input(e.into())
        }
        _ => Failure::Search(e.into()),
    })?;

    println!("{}", report.outcome);

    if cli.stats {
        let out = serde_json::json!({
            "outcome": report.outcome.to_string(),
            "stats": report.stats,
        });
        let rendered = serde_json::to_string_pretty(&out)
            .context("failed to render stats")
            .map_err(Failure::Search)?;
        eprintln!("{rendered}");
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.list_scenarios {
        for b in scenarios::BUILTINS {
            println!("{:<16} {}", b.name, b.description);
        }
        return ExitCode::SUCCESS;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(f) => f.report(),
    }
}
