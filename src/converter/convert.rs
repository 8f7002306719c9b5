use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::tables::{payout_rate, MyanmarBetType};

/// Commission multiplier applied when the caller does not supply one.
pub const DEFAULT_COMMISSION: f64 = 1.0;

/// Errors raised while coercing a loosely-typed bet into a [`BetInput`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    #[error("bet is missing required field '{field}'")]
    MissingField { field: &'static str },

    #[error("field '{field}' is not numeric: {value}")]
    NotNumeric { field: &'static str, value: String },
}

/// A bet as it arrives from JSON: `handicap` and `odds` may be numbers,
/// numeric strings or anything else a caller sends. `team` is echoed back
/// whatever its JSON type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawBet {
    #[serde(default)]
    pub team: Option<Value>,
    #[serde(default)]
    pub handicap: Option<Value>,
    #[serde(default)]
    pub odds: Option<Value>,
}

/// A typed Western Asian Handicap bet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BetInput {
    pub team: String,
    /// Handicap line, usually in steps of 0.5 (e.g. -1.5)
    pub handicap: f64,
    /// Decimal odds (e.g. 1.92)
    pub western_odds: f64,
}

/// Myanmar-style description of a single bet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BetOutput {
    pub team: String,
    pub handicap: f64,
    pub western_odds: f64,
    pub myanmar_type: MyanmarBetType,
    pub myanmar_rule: String,
    /// Commission rounded to two decimals
    pub myanmar_payout_rate: f64,
}

/// Coerce a JSON value to f64 the way a numeric cast would: numbers pass
/// through, strings are trimmed and parsed, booleans become 1.0 / 0.0.
fn coerce_number(field: &'static str, value: Option<&Value>) -> Result<f64, ConvertError> {
    let value = match value {
        None | Some(Value::Null) => return Err(ConvertError::MissingField { field }),
        Some(v) => v,
    };

    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };

    parsed.ok_or_else(|| ConvertError::NotNumeric {
        field,
        value: value.to_string(),
    })
}

/// Team label for output: strings as-is, other JSON values as their JSON
/// text, missing or null as "".
fn team_text(team: Option<&Value>) -> String {
    match team {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

impl BetInput {
    pub fn new(team: impl Into<String>, handicap: f64, western_odds: f64) -> Self {
        BetInput {
            team: team.into(),
            handicap,
            western_odds,
        }
    }

    /// Map this bet onto its Myanmar equivalent. Unmapped lines yield
    /// `Unknown` with the fallback rule rather than an error.
    pub fn convert(&self, commission: f64) -> BetOutput {
        let myanmar_type = MyanmarBetType::from_handicap(self.handicap);
        BetOutput {
            team: self.team.clone(),
            handicap: self.handicap,
            western_odds: self.western_odds,
            myanmar_type,
            myanmar_rule: myanmar_type.rule().to_string(),
            myanmar_payout_rate: payout_rate(commission),
        }
    }
}

impl TryFrom<&RawBet> for BetInput {
    type Error = ConvertError;

    fn try_from(raw: &RawBet) -> Result<Self, Self::Error> {
        let handicap = coerce_number("handicap", raw.handicap.as_ref())?;
        let western_odds = coerce_number("odds", raw.odds.as_ref())?;
        Ok(BetInput {
            team: team_text(raw.team.as_ref()),
            handicap,
            western_odds,
        })
    }
}

/// Convert one loosely-typed bet. Fails only when `handicap` or `odds`
/// cannot be read as a number.
pub fn convert_bet(bet: &RawBet, commission: f64) -> Result<BetOutput, ConvertError> {
    let input = BetInput::try_from(bet)?;
    Ok(input.convert(commission))
}

/// Convert a sequence of bets, preserving order. The first bad element
/// aborts the whole batch with its error.
pub fn convert_bets(bets: &[RawBet], commission: f64) -> Result<Vec<BetOutput>, ConvertError> {
    bets.iter().map(|bet| convert_bet(bet, commission)).collect()
}

/// Infallible batch conversion for already-typed input.
pub fn convert_inputs(bets: &[BetInput], commission: f64) -> Vec<BetOutput> {
    bets.iter().map(|bet| bet.convert(commission)).collect()
}
