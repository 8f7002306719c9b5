use serde::{Serialize, Serializer};
use std::fmt;

/// Rule text used when a handicap has no Myanmar equivalent.
pub const NO_RULE: &str = "No Myanmar rule for this handicap.";

/// Handicap lines are keyed in quarter goals so lookups never depend on
/// float equality (-1.5 → -6, 0.0 → 0).
const QUARTERS_PER_GOAL: f64 = 4.0;

/// Myanmar margin bet types reachable from a Western Asian Handicap line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MyanmarBetType {
    /// "1-30%": win by 1 pays 30%, win by 2+ pays in full.
    OneThirty,
    /// "1-50%"
    OneFifty,
    /// "0.5-50%"
    HalfFifty,
    /// "Level Ball": plain win/draw/lose, draw refunds.
    LevelBall,
    /// "2-50%"
    TwoFifty,
    /// "2-30%"
    TwoThirty,
    /// No mapping for the handicap line.
    Unknown,
}

/// Handicap (in quarter goals) → bet type. Never mutated.
const HANDICAP_TYPES: [(i32, MyanmarBetType); 6] = [
    (-6, MyanmarBetType::OneThirty),
    (-4, MyanmarBetType::OneFifty),
    (-2, MyanmarBetType::HalfFifty),
    (0, MyanmarBetType::LevelBall),
    (-8, MyanmarBetType::TwoFifty),
    (-10, MyanmarBetType::TwoThirty),
];

/// Bet type → rule description. Covers every type in `HANDICAP_TYPES`.
const MYANMAR_RULES: [(MyanmarBetType, &str); 6] = [
    (
        MyanmarBetType::OneThirty,
        "Win by 1 goal \u{2192} 30% payout, win by 2+ goals \u{2192} 100% payout, else lose.",
    ),
    (
        MyanmarBetType::OneFifty,
        "Win by 1 goal \u{2192} 50% payout, win by 2+ goals \u{2192} 100% payout, else lose.",
    ),
    (
        MyanmarBetType::HalfFifty,
        "Win by any \u{2192} 100%, draw \u{2192} 50% refund, lose \u{2192} lose.",
    ),
    (
        MyanmarBetType::LevelBall,
        "Win \u{2192} 100%, draw \u{2192} refund, lose \u{2192} lose.",
    ),
    (
        MyanmarBetType::TwoFifty,
        "Win by 2 goals \u{2192} 50% payout, win by 3+ goals \u{2192} 100% payout, else lose.",
    ),
    (
        MyanmarBetType::TwoThirty,
        "Win by 2 goals \u{2192} 30% payout, win by 3+ goals \u{2192} 100% payout, else lose.",
    ),
];

/// Convert a handicap line to whole quarter goals.
///
/// Returns `None` for non-finite values and for lines that are not an exact
/// multiple of 0.25, so e.g. -1.49 never lands on the -1.5 entry.
fn quarter_goals(handicap: f64) -> Option<i32> {
    if !handicap.is_finite() {
        return None;
    }
    let scaled = handicap * QUARTERS_PER_GOAL;
    if scaled.fract() != 0.0 || scaled.abs() > i32::MAX as f64 {
        return None;
    }
    Some(scaled as i32)
}

impl MyanmarBetType {
    /// Exact-match lookup of a Western handicap line.
    pub fn from_handicap(handicap: f64) -> Self {
        quarter_goals(handicap)
            .and_then(|q| {
                HANDICAP_TYPES
                    .iter()
                    .find(|(key, _)| *key == q)
                    .map(|(_, bet_type)| *bet_type)
            })
            .unwrap_or(MyanmarBetType::Unknown)
    }

    pub fn label(self) -> &'static str {
        match self {
            MyanmarBetType::OneThirty => "1-30%",
            MyanmarBetType::OneFifty => "1-50%",
            MyanmarBetType::HalfFifty => "0.5-50%",
            MyanmarBetType::LevelBall => "Level Ball",
            MyanmarBetType::TwoFifty => "2-50%",
            MyanmarBetType::TwoThirty => "2-30%",
            MyanmarBetType::Unknown => "Unknown",
        }
    }

    /// Human-readable payout rule, falling back to [`NO_RULE`].
    pub fn rule(self) -> &'static str {
        MYANMAR_RULES
            .iter()
            .find(|(bet_type, _)| *bet_type == self)
            .map(|(_, rule)| *rule)
            .unwrap_or(NO_RULE)
    }

    pub fn is_known(self) -> bool {
        self != MyanmarBetType::Unknown
    }
}

impl fmt::Display for MyanmarBetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl Serialize for MyanmarBetType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Payout rate reported for a commission multiplier: the commission rounded
/// to two decimals. No range check; zero or negative values pass through.
pub fn payout_rate(commission: f64) -> f64 {
    // Beyond 2^52 / 100 there is no fractional part left and scaling overflows
    if !commission.is_finite() || commission.abs() >= 2f64.powi(52) / 100.0 {
        return commission;
    }
    (commission * 100.0).round() / 100.0
}
