pub mod hand;
pub mod participant;
pub mod session;
pub mod shoe;

use serde_enum_str::{Deserialize_enum_str, Serialize_enum_str};
use strum_macros::EnumIter;
use tracing::debug;
use twentyone_macros::allowed_phase;

use crate::{GameError, Rule};

use self::participant::{Participant, DEFAULT_CHIPS};
use self::shoe::Shoe;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Suit {
    Spade,
    Diamond,
    Heart,
    Club,
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Suit::Spade => "♤",
            Suit::Diamond => "♦",
            Suit::Heart => "♥",
            Suit::Club => "♣",
        };
        f.write_str(symbol)
    }
}

/// Card rank, identified by its printed label. The serde form is the label
/// itself, which is also what `Card::from_label` parses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, Serialize_enum_str, Deserialize_enum_str)]
pub enum Rank {
    #[serde(rename = "A")]
    Ace,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "J")]
    Jack,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "K")]
    King,
}

impl Rank {
    pub fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    /// Scoring value: aces count 1 here; the 11 alternative is handled by
    /// the soft-hand resolution in `Hand`.
    pub fn score_value(self) -> u32 {
        match self {
            Rank::Ace => 1,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
        }
    }
}

/// Represents a card in the real world with a suit and a rank. Immutable
/// once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Card {
        Card { rank, suit }
    }

    /// Builds a card from a printed rank label. Any label outside
    /// `A,2..10,J,Q,K` is rejected.
    pub fn from_label(suit: Suit, label: &str) -> Result<Card, GameError> {
        let rank: Rank = label
            .parse()
            .map_err(|_| GameError::InvalidRank(String::from(label)))?;
        Ok(Card { rank, suit })
    }

    pub fn is_ace(&self) -> bool {
        self.rank == Rank::Ace
    }

    pub fn score_value(&self) -> u32 {
        self.rank.score_value()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}/{}]", self.rank.label(), self.suit)
    }
}

/// A turn decision. The player supplies one per prompt; the dealer's fixed
/// policy produces exactly one per round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Hit,
    Stand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    PlayerWin,
    HouseWin,
    Push,
}

/// What a finished round reports back to the session.
#[derive(Debug, Clone, Copy)]
pub struct RoundSummary {
    pub outcome: Outcome,
    /// Net chip change: `+bet × multiplier` on a win, `-bet` on a loss,
    /// 0 on a push.
    pub payout: i64,
    /// Player balance after the payout was applied.
    pub chips: u32,
    /// The player sum the outcome was decided on. On the soft-hand path
    /// this is the best soft result, not the raw sum.
    pub player_sum: u32,
    pub dealer_sum: u32,
    pub soft_hand_used: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    AwaitingBet,
    Dealing,
    PlayerTurn,
    DealerTurn,
    Settlement,
    Terminal,
}

/// Presentation collaborator contract. The engine blocks on the `request_*`
/// calls; the "retry until valid input" policy for raw console input lives
/// behind this trait, while bet range validation stays in the engine.
pub trait TableEventHandler {
    fn request_bet(&mut self, max_chips: u32) -> u32;
    fn request_move(&mut self) -> Move;
    fn request_continue(&mut self) -> bool;
    fn notify(&mut self, message: &str);
}

/// A blackjack table hosting one player against the house. Holds the round
/// state machine; every transition method is gated on the current phase and
/// fails with `GameError::WrongPhase` when called out of order.
pub struct Table {
    rule: Rule,
    phase: RoundPhase,
    shoe: Shoe,
    player: Participant,
    dealer: Participant,
}

impl Table {
    pub fn new(rule: &Rule) -> Table {
        Table {
            rule: *rule,
            phase: RoundPhase::Terminal,
            shoe: Shoe::new(rule.decks_amount),
            player: Participant::player(DEFAULT_CHIPS),
            dealer: Participant::dealer(),
        }
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn player(&self) -> &Participant {
        &self.player
    }

    pub fn dealer(&self) -> &Participant {
        &self.dealer
    }

    /// Plays one full round against the given handler: bet, deal, player
    /// turns, the dealer's single decision, settlement. Invalid bets are
    /// reported through `notify` and re-requested; the retry loop lives
    /// here at the collaborator boundary, not inside the gated methods.
    pub fn play_round_with_handler<H: TableEventHandler>(
        &mut self,
        handler: &mut H,
    ) -> Result<RoundSummary, GameError> {
        self.begin_round()?;
        handler.notify(&format!(
            "Round to be played with {} cards.",
            self.shoe.size()
        ));
        handler.notify("Please make a bet on the number of chips for this round.");

        loop {
            let bet = handler.request_bet(self.player.chips());
            match self.place_bet(bet) {
                Ok(()) => break,
                Err(GameError::InvalidBet { bet, .. }) => {
                    if bet < 1 {
                        handler.notify("INVALID BET: You should at least bet 1 chip.");
                    } else {
                        handler.notify(
                            "INVALID BET: You don't have enough chips to place that bet.",
                        );
                    }
                }
                Err(other) => return Err(other),
            }
        }
        handler.notify(&format!(
            "Bet: {} chips. Game starts!",
            self.player.bet()
        ));

        self.deal_initial_cards()?;
        handler.notify(&format!(
            "Dealer cards are:\n{}",
            self.dealer.display_info(false)
        ));
        handler.notify(&format!(
            "Player cards are:\n{}",
            self.player.display_info(false)
        ));

        while !self.player_turn_finished() {
            match handler.request_move() {
                Move::Hit => {
                    self.play_hit()?;
                    handler.notify(&format!(
                        "Player cards are:\n{}",
                        self.player.display_info(false)
                    ));
                }
                Move::Stand => self.play_stand()?,
            }
        }

        if self.phase == RoundPhase::DealerTurn {
            match self.dealer_play()? {
                Move::Hit => handler.notify(&format!(
                    "Dealer hits and now has {} cards.",
                    self.dealer.hand().len()
                )),
                Move::Stand => handler.notify(&format!(
                    "Dealer stands with {} cards.",
                    self.dealer.hand().len()
                )),
            }
        }

        let summary = self.settle()?;
        handler.notify(&format!(
            "Dealer cards were:\n{}",
            self.dealer.display_info(true)
        ));
        if summary.soft_hand_used {
            handler.notify(&format!(
                "Player has a soft hand. Its best result is {}.",
                summary.player_sum
            ));
        }
        handler.notify(&outcome_announcement(&summary));
        Ok(summary)
    }

    /// Starts a fresh round: new shoe, empty hands, no bet. Can only be
    /// called in the Terminal phase.
    #[allowed_phase(Terminal)]
    pub fn begin_round(&mut self) -> Result<(), GameError> {
        self.shoe = Shoe::new(self.rule.decks_amount);
        self.player.reset_for_round();
        self.dealer.reset_for_round();
        self.phase = RoundPhase::AwaitingBet;
        debug!(
            cards = self.shoe.size(),
            decks = self.rule.decks_amount,
            "shoe rebuilt for a new round"
        );
        Ok(())
    }

    /// Can only be called in the AwaitingBet phase. Rejects a bet below
    /// 1 chip or above the player's balance, leaving the phase unchanged so
    /// the bet can be re-requested. Chips are not deducted here; they only
    /// ever move at settlement.
    #[allowed_phase(AwaitingBet)]
    pub fn place_bet(&mut self, bet: u32) -> Result<(), GameError> {
        if bet < 1 || bet > self.player.chips() {
            return Err(GameError::InvalidBet {
                bet,
                chips: self.player.chips(),
            });
        }
        self.player.set_bet(bet);
        self.phase = RoundPhase::Dealing;
        Ok(())
    }

    /// Can only be called in the Dealing phase. Two cards to the dealer,
    /// then two to the player.
    #[allowed_phase(Dealing)]
    pub fn deal_initial_cards(&mut self) -> Result<(), GameError> {
        for _ in 0..2 {
            let card = self.shoe.draw()?;
            self.dealer.take_card(card);
        }
        for _ in 0..2 {
            let card = self.shoe.draw()?;
            self.player.take_card(card);
        }
        self.phase = RoundPhase::PlayerTurn;
        Ok(())
    }

    /// Can only be called in the PlayerTurn phase. Draws one card for the
    /// player. Returns true when the player's turn is over: a bust goes
    /// straight to settlement, a sum of exactly 21 hands over to the dealer.
    #[allowed_phase(PlayerTurn)]
    pub fn play_hit(&mut self) -> Result<bool, GameError> {
        let card = self.shoe.draw()?;
        self.player.take_card(card);
        if self.player.hand().is_busted() {
            self.phase = RoundPhase::Settlement;
            return Ok(true);
        }
        if self.player.hand().sum() == 21 {
            self.phase = RoundPhase::DealerTurn;
            return Ok(true);
        }
        Ok(false)
    }

    /// Can only be called in the PlayerTurn phase.
    #[allowed_phase(PlayerTurn)]
    pub fn play_stand(&mut self) -> Result<(), GameError> {
        self.phase = RoundPhase::DealerTurn;
        Ok(())
    }

    /// Can only be called in the DealerTurn phase. The dealer makes exactly
    /// one hit-or-stand decision per round: hit below 17, stand otherwise.
    /// Either way the round proceeds to settlement.
    #[allowed_phase(DealerTurn)]
    pub fn dealer_play(&mut self) -> Result<Move, GameError> {
        let decision = if self.dealer.hand().sum() < 17 {
            Move::Hit
        } else {
            Move::Stand
        };
        if decision == Move::Hit {
            let card = self.shoe.draw()?;
            self.dealer.take_card(card);
        }
        self.phase = RoundPhase::Settlement;
        Ok(decision)
    }

    /// Can only be called in the Settlement phase. Decides the outcome in
    /// strict priority order, computes the payout fully and applies it to
    /// the player's chips in a single step.
    #[allowed_phase(Settlement)]
    pub fn settle(&mut self) -> Result<RoundSummary, GameError> {
        let player_sum = self.player.hand().sum();
        let dealer_sum = self.dealer.hand().sum();

        let mut counted_sum = player_sum;
        let mut soft_hand_used = false;

        let outcome = if self.player.hand().is_busted() {
            Outcome::HouseWin
        } else if self.dealer.hand().is_busted() {
            Outcome::PlayerWin
        } else if player_sum == dealer_sum {
            Outcome::Push
        } else if player_sum > dealer_sum {
            Outcome::PlayerWin
        } else if player_sum < dealer_sum {
            if self.player.hand().has_soft_hand() {
                soft_hand_used = true;
                counted_sum = self.player.hand().best_soft_result();
                if counted_sum > dealer_sum {
                    Outcome::PlayerWin
                } else if counted_sum == dealer_sum {
                    Outcome::Push
                } else {
                    Outcome::HouseWin
                }
            } else {
                Outcome::HouseWin
            }
        } else {
            return Err(GameError::UnexpectedOutcome);
        };

        let bet = i64::from(self.player.bet());
        let payout = match outcome {
            Outcome::PlayerWin => bet * i64::from(self.rule.chips_multiplier),
            Outcome::HouseWin => -bet,
            Outcome::Push => 0,
        };
        self.player.apply_payout(payout);
        self.phase = RoundPhase::Terminal;

        let summary = RoundSummary {
            outcome,
            payout,
            chips: self.player.chips(),
            player_sum: counted_sum,
            dealer_sum,
            soft_hand_used,
        };
        debug!(
            outcome = ?summary.outcome,
            payout = summary.payout,
            chips = summary.chips,
            "round settled"
        );
        Ok(summary)
    }

    /// A sum of exactly 21 ends the player's turn without asking for a
    /// move; otherwise the turn runs until a stand or a bust.
    fn player_turn_finished(&mut self) -> bool {
        if self.phase == RoundPhase::PlayerTurn && self.player.hand().sum() == 21 {
            self.phase = RoundPhase::DealerTurn;
        }
        self.phase != RoundPhase::PlayerTurn
    }
}

fn outcome_announcement(summary: &RoundSummary) -> String {
    match summary.outcome {
        Outcome::HouseWin if summary.player_sum > 21 => format!(
            "*** HOUSE WINS: Player's hand ({}) is over 21. Player loses {} chips. ***",
            summary.player_sum, -summary.payout
        ),
        Outcome::HouseWin => format!(
            "*** HOUSE WINS: Player's hand ({}) sum is less than the one from the Dealer ({}). Player loses {} chips. ***",
            summary.player_sum, summary.dealer_sum, -summary.payout
        ),
        Outcome::PlayerWin if summary.dealer_sum > 21 => format!(
            "*** PLAYER WINS: Dealer's hand ({}) is over 21. Player wins {} chips. ***",
            summary.dealer_sum, summary.payout
        ),
        Outcome::PlayerWin => format!(
            "*** PLAYER WINS: Dealer's hand ({}) sum is less than the one from the Player ({}). Player wins {} chips. ***",
            summary.dealer_sum, summary.player_sum, summary.payout
        ),
        Outcome::Push => format!(
            "*** NO WINNER: Tie at {}, bet needs to be replaced. ***",
            summary.player_sum
        ),
    }
}
