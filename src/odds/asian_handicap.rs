use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use std::sync::OnceLock;
use tracing::debug;

use crate::converter::{payout_rate, MyanmarBetType};

/// Myanmar bet derived from a fixture's Asian Handicap market.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MyanmarBet {
    pub handicap: f64,
    pub myanmar_type: MyanmarBetType,
    pub myanmar_rule: String,
    pub myanmar_payout_rate: f64,
}

/// First signed decimal number in a label. ASCII digits only.
fn decimal_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"-?[0-9]+(?:\.[0-9]+)?").expect("valid handicap pattern"))
}

/// Find the first signed decimal number in a string, e.g. "Home -1.5" → -1.5.
/// A leading '+' is skipped, so "Away +0.25" → 0.25.
fn first_decimal(s: &str) -> Option<f64> {
    decimal_re().find(s)?.as_str().parse().ok()
}

/// Read a handicap from a bookmaker value field. Numbers are taken as-is,
/// strings yield their first decimal number, anything else is rejected.
pub fn parse_handicap(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => first_decimal(s),
        _ => None,
    }
}

/// First non-null of `handicap`, `value`, `name` on a market value entry.
fn handicap_field(entry: &Value) -> Option<&Value> {
    ["handicap", "value", "name"]
        .iter()
        .filter_map(|key| entry.get(key))
        .find(|v| !v.is_null())
}

/// Extract the handicap line from an API-Football odds document.
///
/// Accepts either the bare `response` array or the full envelope. Only the
/// first fixture is inspected; each bookmaker contributes its first bet whose
/// name contains "asian handicap", and the first value that parses wins.
pub fn extract_handicap(odds: &Value) -> Option<f64> {
    let fixtures = if let Some(arr) = odds.as_array() {
        arr
    } else {
        odds.get("response")?.as_array()?
    };

    let bookmakers = fixtures.first()?.get("bookmakers")?.as_array()?;

    for bookmaker in bookmakers {
        let Some(bets) = bookmaker.get("bets").and_then(|b| b.as_array()) else {
            continue;
        };
        let market = bets.iter().find(|bet| {
            bet.get("name")
                .and_then(|n| n.as_str())
                .map(|n| n.to_lowercase().contains("asian handicap"))
                .unwrap_or(false)
        });
        let Some(values) = market.and_then(|m| m.get("values")).and_then(|v| v.as_array())
        else {
            continue;
        };

        for entry in values {
            if let Some(handicap) = handicap_field(entry).and_then(parse_handicap) {
                debug!(
                    "Asian Handicap line {} from bookmaker {}",
                    handicap,
                    bookmaker.get("name").and_then(|n| n.as_str()).unwrap_or("unknown")
                );
                return Some(handicap);
            }
        }
    }

    None
}

/// Map a fixture's Asian Handicap line onto its Myanmar bet.
/// Returns `None` when the document carries no parseable handicap.
pub fn myanmar_bet_from_odds(odds: &Value, commission: f64) -> Option<MyanmarBet> {
    let handicap = extract_handicap(odds)?;
    let myanmar_type = MyanmarBetType::from_handicap(handicap);
    Some(MyanmarBet {
        handicap,
        myanmar_type,
        myanmar_rule: myanmar_type.rule().to_string(),
        myanmar_payout_rate: payout_rate(commission),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::NO_RULE;
    use approx::assert_relative_eq;
    use serde_json::json;

    fn build_odds(value: Value) -> Value {
        json!([{
            "bookmakers": [{
                "name": "Bet365",
                "bets": [{
                    "name": "Asian Handicap",
                    "values": [value]
                }]
            }]
        }])
    }

    #[test]
    fn test_first_decimal() {
        assert_eq!(first_decimal("-1.5"), Some(-1.5));
        assert_eq!(first_decimal("Home -1.5"), Some(-1.5));
        assert_eq!(first_decimal("Away +0.25"), Some(0.25));
        assert_eq!(first_decimal("Home 2"), Some(2.0));
        assert_eq!(first_decimal("line 1."), Some(1.0));
        assert_eq!(first_decimal("--1"), Some(-1.0));
        assert_eq!(first_decimal("1.5.3"), Some(1.5));
        assert_eq!(first_decimal("Home \u{0663}"), None);
        assert_eq!(first_decimal("Home"), None);
        assert_eq!(first_decimal(""), None);
    }

    #[test]
    fn test_parse_handicap_types() {
        assert_eq!(parse_handicap(&json!(-1.0)), Some(-1.0));
        assert_eq!(parse_handicap(&json!("Home -2.5")), Some(-2.5));
        assert_eq!(parse_handicap(&json!(true)), None);
        assert_eq!(parse_handicap(&json!({"a": 1})), None);
    }

    #[test]
    fn test_plain_numeric_string() {
        let h = extract_handicap(&build_odds(json!({ "value": "-1.5" })));
        assert_eq!(h, Some(-1.5));
    }

    #[test]
    fn test_value_with_team_prefix() {
        let h = extract_handicap(&build_odds(json!({ "value": "Home -1.5" })));
        assert_eq!(h, Some(-1.5));
    }

    #[test]
    fn test_unmapped_line_still_extracted() {
        let bet = myanmar_bet_from_odds(&build_odds(json!({ "value": "Away +0.25" })), 1.0)
            .unwrap();
        assert_relative_eq!(bet.handicap, 0.25);
        assert_eq!(bet.myanmar_type, MyanmarBetType::Unknown);
        assert_eq!(bet.myanmar_rule, NO_RULE);
    }

    #[test]
    fn test_handicap_field_preferred_over_value() {
        let h = extract_handicap(&build_odds(json!({ "handicap": "-2", "value": "Home -1.5" })));
        assert_eq!(h, Some(-2.0));
    }

    #[test]
    fn test_null_handicap_falls_through_to_value() {
        let h = extract_handicap(&build_odds(json!({ "handicap": null, "value": "Home -1" })));
        assert_eq!(h, Some(-1.0));
    }

    #[test]
    fn test_skips_unparseable_values() {
        let odds = json!([{
            "bookmakers": [{
                "bets": [{
                    "name": "Asian Handicap First Half",
                    "values": [{ "value": "Home" }, { "value": "Away -0.5" }]
                }]
            }]
        }]);
        assert_eq!(extract_handicap(&odds), Some(-0.5));
    }

    #[test]
    fn test_falls_back_to_next_bookmaker() {
        let odds = json!({
            "response": [{
                "bookmakers": [
                    { "bets": [{ "name": "Match Winner", "values": [{ "value": "Home" }] }] },
                    { "bets": [{ "name": "asian handicap", "values": [{ "value": "Home -1" }] }] }
                ]
            }]
        });
        let bet = myanmar_bet_from_odds(&odds, 1.0).unwrap();
        assert_eq!(bet.myanmar_type, MyanmarBetType::OneFifty);
    }

    #[test]
    fn test_no_asian_handicap_market() {
        let odds = json!([{
            "bookmakers": [{ "bets": [{ "name": "Goals Over/Under", "values": [{ "value": "Over 2.5" }] }] }]
        }]);
        assert_eq!(extract_handicap(&odds), None);
        assert!(myanmar_bet_from_odds(&odds, 1.0).is_none());
    }

    #[test]
    fn test_empty_documents() {
        assert_eq!(extract_handicap(&json!([])), None);
        assert_eq!(extract_handicap(&json!({})), None);
        assert_eq!(extract_handicap(&json!(null)), None);
        assert_eq!(extract_handicap(&json!([{ "bookmakers": [] }])), None);
    }

    #[test]
    fn test_commission_rounded() {
        let bet = myanmar_bet_from_odds(&build_odds(json!({ "value": "Home 0" })), 0.925).unwrap();
        assert_eq!(bet.myanmar_type, MyanmarBetType::LevelBall);
        assert_relative_eq!(bet.myanmar_payout_rate, 0.93, epsilon = 1e-12);
    }
}
