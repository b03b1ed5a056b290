use crate::cmd::read_text;
use crate::reports;
use cipherforge::caesar::{crack_caesar, rotate};
use cipherforge::error::CfResult;
use cipherforge::scorer::loader::load_dictionary;
use clap::Args;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct EncryptArgs {
    /// Letters to rotate by (negative rotates backwards)
    #[arg(short, long, allow_hyphen_values = true)]
    pub shift: i64,

    /// Text to encrypt; read from stdin when omitted
    pub text: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct DecryptArgs {
    /// Word list, one word per line
    #[arg(short, long)]
    pub dictionary: String,

    /// Print candidates as a table
    #[arg(long, default_value_t = false)]
    pub report: bool,

    /// Text to decrypt; read from stdin when omitted
    pub text: Option<String>,
}

pub fn run_encrypt(args: EncryptArgs) -> CfResult<()> {
    let plaintext = read_text(args.text)?;
    println!("{}", rotate(&plaintext, args.shift));
    Ok(())
}

pub fn run_decrypt(args: DecryptArgs) -> CfResult<()> {
    let dict = load_dictionary(&args.dictionary)?;
    let ciphertext = read_text(args.text)?;

    let candidates = crack_caesar(&ciphertext, &dict);
    info!("🔎 {} of 26 shifts look like English", candidates.len());

    if candidates.is_empty() {
        println!("No good decryptions found");
    } else if args.report {
        reports::print_caesar_candidates(&candidates);
    } else {
        for c in &candidates {
            println!("{}", c.text);
        }
    }
    Ok(())
}
