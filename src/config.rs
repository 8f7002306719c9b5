use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::converter::DEFAULT_COMMISSION;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// One line per bet
    Table,
}

/// Convert Western Asian Handicap lines into Myanmar margin bets
#[derive(Parser, Debug, Clone)]
#[command(name = "myanmar-bets", version, about)]
pub struct Config {
    /// JSON file holding an array of {team, handicap, odds} bets.
    /// Without it the built-in sample bets are converted.
    #[arg(long, env = "BETS_FILE", conflicts_with = "odds")]
    pub bets: Option<PathBuf>,

    /// API-Football odds document to read the Asian Handicap line from
    #[arg(long, env = "ODDS_FILE")]
    pub odds: Option<PathBuf>,

    /// Payout rate multiplier (1.0 = no commission)
    #[arg(long, env = "MYANMAR_COMMISSION", default_value_t = DEFAULT_COMMISSION, allow_negative_numbers = true)]
    pub commission: f64,

    /// Output format
    #[arg(long, env = "OUTPUT_FORMAT", value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

impl Config {
    /// Only checks that input files exist; commission is passed through as given.
    pub fn validate(&self) -> anyhow::Result<()> {
        for path in [&self.bets, &self.odds].into_iter().flatten() {
            if !path.is_file() {
                anyhow::bail!("input file not found: {}", path.display());
            }
        }
        Ok(())
    }
}
