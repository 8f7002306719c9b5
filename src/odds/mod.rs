pub mod asian_handicap;

pub use asian_handicap::{extract_handicap, myanmar_bet_from_odds, parse_handicap, MyanmarBet};
