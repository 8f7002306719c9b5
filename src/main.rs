use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use tracing::{info, warn};

use myanmar_bets::config::{Config, OutputFormat};
use myanmar_bets::converter::{convert_bets, convert_inputs, BetInput, BetOutput, RawBet};
use myanmar_bets::odds::myanmar_bet_from_odds;

fn sample_bets() -> Vec<BetInput> {
    vec![
        BetInput::new("Liverpool", -1.5, 1.92),
        BetInput::new("Chelsea", -1.0, 2.01),
        BetInput::new("Man United", 0.0, 2.0),
        BetInput::new("Arsenal", -2.5, 2.18),
    ]
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse {}", path.display()))
}

fn print_table(outputs: &[BetOutput]) {
    for out in outputs {
        println!(
            "{:<16} {:>6.2} @ {:<5.2} {:<11} x{:.2}  {}",
            out.team,
            out.handicap,
            out.western_odds,
            out.myanmar_type,
            out.myanmar_payout_rate,
            out.myanmar_rule
        );
    }
}

fn main() -> Result<()> {
    // Initialise tracing / logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    config.validate()?;

    if let Some(path) = &config.odds {
        let odds: serde_json::Value = read_json(path)?;
        match myanmar_bet_from_odds(&odds, config.commission) {
            Some(bet) => match config.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&bet)?),
                OutputFormat::Table => println!(
                    "{:>6.2} {:<11} x{:.2}  {}",
                    bet.handicap, bet.myanmar_type, bet.myanmar_payout_rate, bet.myanmar_rule
                ),
            },
            None => warn!("No Asian Handicap line found in {}", path.display()),
        }
        return Ok(());
    }

    let outputs = match &config.bets {
        Some(path) => {
            let bets: Vec<RawBet> = read_json(path)?;
            info!("Loaded {} bet(s) from {}", bets.len(), path.display());
            convert_bets(&bets, config.commission).context("Bet conversion failed")?
        }
        None => {
            info!("No bets file given, converting sample bets");
            convert_inputs(&sample_bets(), config.commission)
        }
    };

    let unknown = outputs.iter().filter(|o| !o.myanmar_type.is_known()).count();
    if unknown > 0 {
        warn!("{} bet(s) have no Myanmar equivalent", unknown);
    }

    match config.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outputs)?),
        OutputFormat::Table => print_table(&outputs),
    }

    Ok(())
}
