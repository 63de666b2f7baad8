use super::hand::Hand;
use super::Card;

pub const DEFAULT_CHIPS: u32 = 100;

/// The two sides of the table, distinguished by capability rather than
/// subclassing: the player carries chips and a bet, the dealer fixes both
/// to zero and hides its hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Player,
    Dealer,
}

#[derive(Debug)]
pub struct Participant {
    role: Role,
    hand: Hand,
    chips: u32,
    bet: u32,
}

impl Participant {
    pub fn player(chips: u32) -> Participant {
        Participant {
            role: Role::Player,
            hand: Hand::new(),
            chips,
            bet: 0,
        }
    }

    pub fn dealer() -> Participant {
        Participant {
            role: Role::Dealer,
            hand: Hand::new(),
            chips: 0,
            bet: 0,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn chips(&self) -> u32 {
        self.chips
    }

    pub fn bet(&self) -> u32 {
        self.bet
    }

    pub fn take_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    pub(crate) fn set_bet(&mut self, bet: u32) {
        self.bet = bet;
    }

    pub(crate) fn reset_for_round(&mut self) {
        self.hand.reset();
        self.bet = 0;
    }

    /// The single place chips ever change. The payout is computed in full
    /// before this is called, so a failed round can never leave the
    /// balance half-updated.
    pub(crate) fn apply_payout(&mut self, payout: i64) {
        self.chips = (i64::from(self.chips) + payout).max(0) as u32;
    }

    /// Renders the hand one card per line. The dealer shows only its first
    /// card until `reveal` is set; every other card prints as `[?/?]`.
    pub fn display_info(&self, reveal: bool) -> String {
        let mut info = String::new();
        for (index, card) in self.hand.cards().iter().enumerate() {
            if self.role == Role::Dealer && !reveal && index > 0 {
                info.push_str("- [?/?]\n");
            } else {
                info.push_str(&format!("- {}\n", card));
            }
        }
        info.push('\n');
        info
    }
}

#[cfg(test)]
mod tests {
    use crate::table::{Rank, Suit};

    use super::*;

    fn heart(rank: Rank) -> Card {
        Card::new(Suit::Heart, rank)
    }

    #[test]
    fn player_starts_with_chips_and_dealer_without() {
        assert_eq!(Participant::player(DEFAULT_CHIPS).chips(), 100);
        assert_eq!(Participant::dealer().chips(), 0);
    }

    #[test]
    fn player_shows_every_card() {
        let mut player = Participant::player(DEFAULT_CHIPS);
        player.take_card(heart(Rank::Ten));
        assert_eq!(player.display_info(false), "- [10/♥]\n\n");
    }

    #[test]
    fn dealer_hides_everything_but_the_first_card() {
        let mut dealer = Participant::dealer();
        dealer.take_card(heart(Rank::Ten));
        dealer.take_card(heart(Rank::Ace));

        assert_eq!(dealer.display_info(false), "- [10/♥]\n- [?/?]\n\n");
        assert_eq!(dealer.display_info(true), "- [10/♥]\n- [A/♥]\n\n");
    }

    #[test]
    fn payouts_adjust_the_balance() {
        let mut player = Participant::player(DEFAULT_CHIPS);
        player.apply_payout(20);
        assert_eq!(player.chips(), 120);
        player.apply_payout(-120);
        assert_eq!(player.chips(), 0);
    }

    #[test]
    fn round_reset_clears_hand_and_bet() {
        let mut player = Participant::player(DEFAULT_CHIPS);
        player.take_card(heart(Rank::Ten));
        player.set_bet(10);
        player.reset_for_round();
        assert!(player.hand().is_empty());
        assert_eq!(player.bet(), 0);
        assert_eq!(player.chips(), 100);
    }
}
