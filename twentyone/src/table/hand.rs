use super::Card;

/// The ordered cards held by one participant during a round. Append-only
/// while the round runs; every read is recomputed from the card sequence.
#[derive(Debug)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Hand {
        Hand {
            cards: Vec::with_capacity(3),
        }
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn sum(&self) -> u32 {
        self.cards.iter().map(|card| card.score_value()).sum()
    }

    pub fn is_busted(&self) -> bool {
        self.sum() > 21
    }

    /// A hand is soft when it holds an ace that can count as 11 without
    /// busting.
    pub fn has_soft_hand(&self) -> bool {
        self.cards.iter().any(|card| card.is_ace()) && self.sum() + 10 <= 21
    }

    /// The best total reachable by promoting aces from 1 to 11. All aces
    /// move in lockstep: the candidates are `sum + 10k` for each ace count
    /// `k`, and the highest one not exceeding 21 wins.
    pub fn best_soft_result(&self) -> u32 {
        let sum = self.sum();
        let aces = self.cards.iter().filter(|card| card.is_ace()).count() as u32;
        (0..=aces)
            .map(|k| sum + 10 * k)
            .filter(|total| *total <= 21)
            .max()
            .unwrap_or(sum)
    }

    /// Clears the hand at the start of a round.
    pub fn reset(&mut self) {
        self.cards.clear();
    }
}

#[cfg(test)]
mod tests {
    use crate::table::{Rank, Suit};

    use super::*;

    fn hand_of(ranks: &[Rank]) -> Hand {
        let mut hand = Hand::new();
        for rank in ranks {
            hand.add_card(Card::new(Suit::Heart, *rank));
        }
        hand
    }

    #[test]
    fn sums_and_detects_busts() {
        let hand = hand_of(&[Rank::Ten, Rank::Nine, Rank::Five]);
        assert_eq!(hand.sum(), 24);
        assert!(hand.is_busted());
    }

    #[test]
    fn ace_and_ten_make_a_soft_twenty_one() {
        let hand = hand_of(&[Rank::Ace, Rank::Ten]);
        assert_eq!(hand.sum(), 11);
        assert!(!hand.is_busted());
        assert!(hand.has_soft_hand());
        assert_eq!(hand.best_soft_result(), 21);
    }

    #[test]
    fn no_ace_means_no_soft_hand() {
        let hand = hand_of(&[Rank::Ten, Rank::Nine]);
        assert!(!hand.has_soft_hand());
    }

    #[test]
    fn an_ace_that_would_bust_is_not_soft() {
        let hand = hand_of(&[Rank::Ace, Rank::Five, Rank::Nine]);
        assert_eq!(hand.sum(), 15);
        assert!(!hand.has_soft_hand());
    }

    #[test]
    fn aces_are_promoted_in_lockstep() {
        // 1+1+9 = 11; promoting one ace reaches 21, promoting both busts.
        let hand = hand_of(&[Rank::Ace, Rank::Ace, Rank::Nine]);
        assert_eq!(hand.best_soft_result(), 21);
    }

    #[test]
    fn reset_clears_the_cards() {
        let mut hand = hand_of(&[Rank::Ten, Rank::Nine]);
        hand.reset();
        assert!(hand.is_empty());
        assert_eq!(hand.sum(), 0);
    }
}
