// src/config/options.rs
use std::path::PathBuf;

/// Everything one CLI run needs to know. Built by `cli::parse_cli`,
/// consumed by `runner::run`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    /// Match-result lines. None = read stdin.
    pub input: Option<PathBuf>,
    /// Preload the default PSL team list before processing.
    pub seed_default: bool,
    /// Extra team names to seed, one per line.
    pub seed_file: Option<PathBuf>,
    /// Write the ranking to a text file. A directory path (or trailing
    /// separator) gets the default filename appended.
    pub out: Option<PathBuf>,
    pub export: bool,
    /// Print the seeded/known team names and exit.
    pub list_teams: bool,
}

impl Params {
    pub fn new() -> Self {
        Self {
            input: None,
            seed_default: false,
            seed_file: None,
            out: None,
            export: false,
            list_teams: false,
        }
    }
}

impl Default for Params {
    fn default() -> Self { Self::new() }
}
