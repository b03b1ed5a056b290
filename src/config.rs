use crate::error::{CfResult, CipherForgeError};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_RESTARTS: usize = 25;
pub const DEFAULT_PATIENCE: usize = 1000;

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// Independent hill-climb attempts
    #[arg(long, default_value_t = DEFAULT_RESTARTS)]
    pub restarts: usize,

    /// Consecutive non-improving swaps before an attempt stops
    #[arg(long, default_value_t = DEFAULT_PATIENCE)]
    pub patience: usize,

    /// Run attempts on the rayon pool
    #[arg(long, default_value_t = false)]
    pub parallel: bool,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            restarts: DEFAULT_RESTARTS,
            patience: DEFAULT_PATIENCE,
            parallel: false,
        }
    }
}

impl SearchParams {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CfResult<Self> {
        let content = fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&content)?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> CfResult<()> {
        if self.restarts == 0 {
            return Err(CipherForgeError::Config(
                "restarts must be at least 1".to_string(),
            ));
        }
        if self.patience == 0 {
            return Err(CipherForgeError::Config(
                "patience must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Overwrites fields the user typed on the command line, leaving file values for the rest.
    pub fn merge_from_cli(&mut self, cli: &SearchParams, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field.clone();
                }
            };
        }

        update_if_present!(restarts, "restarts");
        update_if_present!(patience, "patience");
        update_if_present!(parallel, "parallel");
    }
}
