pub mod convert;
pub mod tables;

pub use convert::{
    convert_bet, convert_bets, convert_inputs, BetInput, BetOutput, ConvertError, RawBet,
    DEFAULT_COMMISSION,
};
pub use tables::{payout_rate, MyanmarBetType, NO_RULE};
