//! Convert Western Asian Handicap lines into Myanmar margin bet descriptions.
//!
//! The converter is a pure lookup over two fixed tables; the odds module
//! pulls a handicap line out of an API-Football odds document first.

pub mod config;
pub mod converter;
pub mod odds;

pub use converter::{
    convert_bet, convert_bets, BetInput, BetOutput, ConvertError, MyanmarBetType, RawBet,
};
pub use odds::{myanmar_bet_from_odds, MyanmarBet};
