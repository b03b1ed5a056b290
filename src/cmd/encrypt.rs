use crate::cmd::read_text;
use crate::reports;
use cipherforge::codec::encrypt;
use cipherforge::error::CfResult;
use cipherforge::key::EncryptKey;
use cipherforge::random::rng_from_seed;
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct EncryptArgs {
    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Also print the generated key
    #[arg(long, default_value_t = false)]
    pub show_key: bool,

    /// Text to encrypt; read from stdin when omitted
    pub text: Option<String>,
}

pub fn run(args: EncryptArgs) -> CfResult<()> {
    let plaintext = read_text(args.text)?;
    let mut rng = rng_from_seed(args.seed);
    let key = EncryptKey::random(&mut rng);

    if args.show_key {
        reports::print_key_table("generated", &key);
    }
    println!("{}", encrypt(&key, &plaintext));
    Ok(())
}
