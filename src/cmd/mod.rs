pub mod caesar;
pub mod crack;
pub mod encrypt;
pub mod score;

use cipherforge::error::CfResult;
use std::io::{self, Read};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

/// Positional text if given, otherwise all of stdin minus the final line break.
pub fn read_text(arg: Option<String>) -> CfResult<String> {
    if let Some(text) = arg {
        return Ok(text);
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
    Ok(buf)
}
