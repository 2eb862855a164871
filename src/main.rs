//! Wordle Minimax CLI
//!
//! With no feedback arguments, solves every answer in the answer list and reports the running
//! average. With `GUESS CODE` pairs, reports the best next guess for that game.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use eyre::{Result, WrapErr};
use log::debug;
use std::path::PathBuf;
use wordle_minimax::{ColorCode, Corpus, KeyMode, Solver, Word, DEFAULT_OPENING};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Words that may be played as guesses, one per line
    #[arg(long, value_name = "PATH", default_value = "data/words2.txt")]
    guesses: PathBuf,

    /// Words that may be the secret, one per line
    #[arg(long, value_name = "PATH", default_value = "data/answers.txt")]
    answers: PathBuf,

    /// First guess played when solving every answer
    #[arg(long, default_value = DEFAULT_OPENING)]
    opening: String,

    /// Key the guess cache on exact word sets instead of combined hashes
    #[arg(long)]
    exact_cache_keys: bool,

    /// Feedback received so far, as alternating guess and color code (g/y/b) arguments
    #[arg(value_name = "GUESS CODE")]
    feedback: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let played = match parse_feedback(&cli.feedback) {
        Ok(played) => played,
        Err(err) => Cli::command()
            .error(ErrorKind::InvalidValue, format!("{err:#}"))
            .exit(),
    };

    let guesses = Corpus::load(&cli.guesses).wrap_err_with(|| {
        format!("The guess list '{}' could not be loaded.", cli.guesses.display())
    })?;
    let answers = Corpus::load(&cli.answers).wrap_err_with(|| {
        format!("The answer list '{}' could not be loaded.", cli.answers.display())
    })?;

    let mode = if cli.exact_cache_keys {
        KeyMode::Exact
    } else {
        KeyMode::Fingerprint
    };
    let mut solver = Solver::with_key_mode(&guesses, &answers, mode)?;

    if played.is_empty() {
        solve_all(&mut solver, &cli.opening)
    } else {
        solve_next(&solver, &played)
    }
}

/// Pair up alternating guess and color code arguments.
fn parse_feedback(args: &[String]) -> Result<Vec<(Word, ColorCode)>> {
    if args.len() % 2 != 0 {
        eyre::bail!("Either no arguments or pairs of arguments");
    }
    args.chunks(2)
        .map(|pair| -> wordle_minimax::Result<(Word, ColorCode)> {
            let guess: Word = pair[0].parse()?;
            let code = ColorCode::parse_for(&guess, &pair[1])?;
            Ok((guess, code))
        })
        .collect::<wordle_minimax::Result<Vec<_>>>()
        .wrap_err("The feedback arguments are malformed.")
}

fn solve_next(solver: &Solver<'_>, played: &[(Word, ColorCode)]) -> Result<()> {
    println!("Solving next");
    let recommendation = solver.recommend(played)?;
    debug!("{} candidates remain", recommendation.candidates.len());
    if recommendation.candidates.len() <= 10 {
        println!("Remaining: {:?}", recommendation.candidates);
    }
    println!("Next guess: {}", recommendation.guess);
    Ok(())
}

fn solve_all(solver: &mut Solver<'_>, opening: &str) -> Result<()> {
    println!("Solving all");
    let opening: Word = opening.parse().wrap_err("The opening guess is invalid.")?;
    println!("Starting with {} possibilities", solver.answers().len());

    let report = solver.benchmark(&opening, |record, report| {
        println!(
            "Solved {} -> {:?} in {} guesses ({:.4} avg)",
            record.secret,
            record.guesses,
            record.guesses.len(),
            report.average()
        );
    })?;

    println!();
    println!("Guess distribution:");
    for (guesses, count) in &report.distribution {
        let pct = *count as f64 / report.solved as f64 * 100.0;
        println!("  {} guesses: {:>5} ({:>5.1}%)", guesses, count, pct);
    }
    if let Some((secret, count)) = &report.worst {
        println!("Hardest: {} ({} guesses)", secret, count);
    }
    println!("Average guesses: {:.4}", report.average());
    Ok(())
}
