use cipherforge::error::{CfResult, CipherForgeError};
use cipherforge::scorer::loader::load_quadgrams;
use cipherforge::scorer::QuadgramScorer;
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use std::sync::Arc;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// `QUAD,count` table used by `score` and `crack`
    #[arg(global = true, short, long)]
    quadgrams: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rotate text with the Caesar cipher
    CaesarEncrypt(cmd::caesar::EncryptArgs),
    /// Brute-force all 26 shifts against a dictionary
    CaesarDecrypt(cmd::caesar::DecryptArgs),
    /// Quadgram English-ness score of a text
    Score(cmd::score::ScoreArgs),
    /// Apply a random substitution cipher
    Encrypt(cmd::encrypt::EncryptArgs),
    /// Recover a substitution key from ciphertext alone
    Crack(cmd::crack::CrackArgs),
}

fn load_scorer(path: Option<&str>) -> CfResult<Arc<QuadgramScorer>> {
    let path = path.ok_or_else(|| {
        CipherForgeError::Config("no quadgram table given, pass --quadgrams <PATH>".to_string())
    })?;
    let table = load_quadgrams(path)?;
    Ok(Arc::new(QuadgramScorer::new(&table)?))
}

fn run(cli: Cli, matches: &ArgMatches) -> CfResult<()> {
    match cli.command {
        Commands::CaesarEncrypt(args) => cmd::caesar::run_encrypt(args),
        Commands::CaesarDecrypt(args) => cmd::caesar::run_decrypt(args),
        Commands::Encrypt(args) => cmd::encrypt::run(args),
        Commands::Score(args) => {
            let scorer = load_scorer(cli.quadgrams.as_deref())?;
            cmd::score::run(args, &scorer)
        }
        Commands::Crack(args) => {
            let sub_matches = matches
                .subcommand_matches("crack")
                .ok_or_else(|| CipherForgeError::Config("missing crack arguments".to_string()))?;
            let scorer = load_scorer(cli.quadgrams.as_deref())?;
            cmd::crack::run(args, scorer, sub_matches)
        }
    }
}

fn main() {
    // Raw matches are kept so explicit flags can be told apart from defaults.
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    info!("🚀 Initializing CipherForge...");

    if let Err(e) = run(cli, &matches) {
        error!("❌ {}", e);
        process::exit(1);
    }
}
