use crate::cmd::read_text;
use cipherforge::error::CfResult;
use cipherforge::scorer::QuadgramScorer;
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    /// Text to score; read from stdin when omitted
    pub text: Option<String>,
}

pub fn run(args: ScoreArgs, scorer: &QuadgramScorer) -> CfResult<()> {
    let text = read_text(args.text)?;
    println!("{}", scorer.score(&text));
    Ok(())
}
