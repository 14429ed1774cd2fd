use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use scrabble_solver::{
    markers_from_assignments, parse_marker_assignment, Config, Marker, Score, Solver,
};
use std::process::ExitCode;
use std::time::Instant;

/// Find the best scrabble words that extend a fragment on the board
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the wordlist: one word per line, or a csv file with a `name` column
    #[arg(short, long)]
    wordlist: String,

    /// Letters on your rack, up to 7, in any order
    #[arg(short, long)]
    rack: String,

    /// Letters on the board to add to, in order
    #[arg(short, long)]
    fragment: String,

    /// Number of open squares before the fragment
    #[arg(short, long, default_value_t = 0)]
    before: usize,

    /// Number of open squares after the fragment
    #[arg(short, long, default_value_t = 0)]
    after: usize,

    /// Bonus square before the fragment as `position=bonus`, bonus one of 2l, 3l, 2w, 3w.
    /// Negative positions are ignored
    #[arg(
        long = "before-bonus",
        value_parser = parse_marker_assignment,
        allow_hyphen_values = true
    )]
    before_bonus: Vec<(i64, Marker)>,

    /// Bonus square after the fragment as `position=bonus`, bonus one of 2l, 3l, 2w, 3w.
    /// Negative positions are ignored
    #[arg(
        long = "after-bonus",
        value_parser = parse_marker_assignment,
        allow_hyphen_values = true
    )]
    after_bonus: Vec<(i64, Marker)>,

    /// Maximum number of results to show
    #[arg(short = 'n', long)]
    limit: Option<usize>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            rack: self.rack.clone(),
            fragment: self.fragment.clone(),
            squares_before: self.before,
            squares_after: self.after,
            before_markers: markers_from_assignments(&self.before_bonus, "before"),
            after_markers: markers_from_assignments(&self.after_bonus, "after"),
        }
    }
}

/// `info` by default, `debug` with `--debug`. `RUST_LOG` overrides both.
fn init_logger(debug_enabled: bool) {
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }
    builder.init();
}

fn render(scores: &[Score]) -> String {
    let width = scores
        .iter()
        .map(|s| s.word.len())
        .max()
        .unwrap_or(0)
        .max("legal word:".len());
    let mut lines = vec![
        String::from("- Legal Scrabble Moves and Associated Points -"),
        format!("{:>width$} {:>7}", "legal word:", "points:", width = width),
    ];
    lines.extend(
        scores
            .iter()
            .map(|s| format!("{:>width$} {:>7}", s.word, s.score, width = width)),
    );
    lines.join("\n")
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.config();
    let rack = config.rack().context("invalid rack")?;
    let solver = Solver::from_config(&config)
        .context("invalid fragment")?
        .with_wordlist_from_file(&cli.wordlist)?;
    log::debug!("lane: {}", solver.lane());

    let t0 = Instant::now();
    let mut scores = solver.word_scores(&rack)?;
    log::info!(
        "{} legal words with {} in {:?}",
        scores.len(),
        rack,
        t0.elapsed()
    );
    if let Some(limit) = cli.limit {
        scores.truncate(limit);
    }
    println!("{}", render(&scores));
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.debug);
    if let Err(err) = run(&cli) {
        eprintln!("Error: {:?}", err);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
