use crate::cmd::{read_text, OutputFormat};
use crate::reports;
use cipherforge::config::SearchParams;
use cipherforge::error::CfResult;
use cipherforge::key::DecryptKey;
use cipherforge::optimizer::{ProgressCallback, Solver};
use cipherforge::random::rng_from_seed;
use cipherforge::scorer::QuadgramScorer;
use clap::{ArgMatches, Args};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct CrackArgs {
    #[command(flatten)]
    pub params: SearchParams,

    /// JSON file with search parameters; explicit flags win
    #[arg(long)]
    pub config: Option<String>,

    /// Read ciphertext from this file instead of TEXT/stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Write the recovered plaintext to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    #[arg(long, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print the score, key and attempt tables before the plaintext
    #[arg(long, default_value_t = false)]
    pub report: bool,

    pub text: Option<String>,
}

#[derive(Serialize)]
struct CrackReport<'a> {
    key: &'a DecryptKey,
    score: f64,
    plaintext: &'a str,
    attempts: &'a [f64],
}

struct AttemptLogger {
    total: usize,
}

impl ProgressCallback for AttemptLogger {
    fn on_attempt(&self, attempt: usize, score: f64, best_score: f64) {
        info!(
            "➡️  Attempt #{}/{} | Score: {:.2} | Best: {:.2}",
            attempt + 1,
            self.total,
            score,
            best_score
        );
    }
}

pub fn run(args: CrackArgs, scorer: Arc<QuadgramScorer>, matches: &ArgMatches) -> CfResult<()> {
    let params = match &args.config {
        Some(path) => {
            info!("⚙️  Loading Search Params from: {}", path);
            let mut file_params = SearchParams::load_from_file(path)?;
            file_params.merge_from_cli(&args.params, matches);
            file_params
        }
        None => args.params.clone(),
    };
    let solver = Solver::new(params)?;

    let ciphertext = match &args.input {
        Some(path) => fs::read_to_string(path)?,
        None => read_text(args.text.clone())?,
    };

    let logger = AttemptLogger {
        total: solver.params().restarts,
    };
    let start = Instant::now();

    let solution = if solver.params().parallel {
        let seed = args.seed.unwrap_or_else(|| rng_from_seed(None).u64(..));
        info!(
            "🔥 Running {} attempts in parallel (seed {})",
            solver.params().restarts,
            seed
        );
        solver.solve_parallel_with_progress(&scorer, &ciphertext, seed, &logger)
    } else {
        let mut rng = rng_from_seed(args.seed);
        solver.solve_with_progress(&scorer, &ciphertext, &mut rng, &logger)
    };

    info!("⏱️  Search took {:.2}s", start.elapsed().as_secs_f32());

    let plaintext = solution.plaintext(&ciphertext);

    if let Some(path) = &args.output {
        fs::write(path, &plaintext)?;
        info!("💾 Plaintext written to {}", path.display());
    }

    match args.format {
        OutputFormat::Json => {
            let report = CrackReport {
                key: &solution.key,
                score: solution.score,
                plaintext: &plaintext,
                attempts: &solution.attempts,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            if args.report {
                reports::print_attempt_table(&solution.attempts);
                reports::print_key_table("recovered", &solution.key);
                println!("Score: {:.6}", solution.score);
            }
            if args.output.is_none() || args.report {
                println!("{}", plaintext);
            }
        }
    }
    Ok(())
}
