pub mod table;

use thiserror::Error;

pub use table::session::{CancelFlag, Session};
pub use table::{
    Card, Move, Outcome, Rank, RoundPhase, RoundSummary, Suit, Table, TableEventHandler,
};

/// Table rules. The only two knobs the game exposes: how many 52-card decks
/// the shoe is built from, and what a winning bet pays.
#[derive(Clone, Copy, Debug)]
pub struct Rule {
    pub decks_amount: u8,
    pub chips_multiplier: u32,
}

impl Default for Rule {
    fn default() -> Self {
        Rule {
            decks_amount: 1,
            chips_multiplier: 2,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// A card was built from a label outside the 13 valid ranks.
    #[error("invalid rank '{0}' given to a card")]
    InvalidRank(String),

    /// A draw was attempted with no cards left. Round arithmetic keeps this
    /// from happening in a correctly sized shoe, so hitting it means an
    /// internal bug, not user error.
    #[error("cannot draw from an empty shoe")]
    EmptyShoe,

    /// The bet is below 1 chip or above the player's balance. Recovered by
    /// re-requesting a bet; never fatal.
    #[error("invalid bet of {bet} with {chips} chips remaining")]
    InvalidBet { bet: u32, chips: u32 },

    /// Settlement fell through every winning condition. Indicates a logic
    /// defect; the round must abort rather than misreport a winner.
    #[error("unexpected winning condition in the game")]
    UnexpectedOutcome,

    /// A transition method was called outside its allowed round phase.
    #[error("{0}")]
    WrongPhase(String),
}
