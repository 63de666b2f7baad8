use rand::seq::SliceRandom;
use rand::thread_rng;
use strum::IntoEnumIterator;

use crate::GameError;

use super::{Card, Rank, Suit};

/// Represents a shoe in the real world: the pool of shuffled cards one
/// round draws from. Built fresh for every round.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
}

impl Shoe {
    /// Creates a shoe holding `decks_amount` full 52-card decks, shuffled
    /// together so that every permutation is equally likely.
    pub fn new(decks_amount: u8) -> Shoe {
        let mut cards = Vec::with_capacity(decks_amount as usize * 52);
        for _ in 0..decks_amount {
            for suit in Suit::iter() {
                for rank in Rank::iter() {
                    cards.push(Card::new(suit, rank));
                }
            }
        }
        cards.shuffle(&mut thread_rng());
        Shoe { cards }
    }

    /// A shoe with a known card order. Cards are drawn from the back of
    /// the vector.
    #[cfg(test)]
    pub(crate) fn stacked(cards: Vec<Card>) -> Shoe {
        Shoe { cards }
    }

    pub fn size(&self) -> usize {
        self.cards.len()
    }

    /// Removes and returns the card at the drawing end.
    pub fn draw(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::EmptyShoe)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn one_deck_holds_fifty_two_cards() {
        assert_eq!(Shoe::new(1).size(), 52);
    }

    #[test]
    fn deck_amount_scales_the_shoe() {
        assert_eq!(Shoe::new(2).size(), 104);
    }

    #[test]
    fn drawing_removes_exactly_one_card() {
        let mut shoe = Shoe::new(1);
        shoe.draw().unwrap();
        assert_eq!(shoe.size(), 51);
    }

    #[test]
    fn a_single_deck_has_no_duplicates() {
        let mut shoe = Shoe::new(1);
        let mut seen = HashSet::new();
        while shoe.size() > 0 {
            seen.insert(shoe.draw().unwrap().to_string());
        }
        assert_eq!(seen.len(), 52);
    }

    #[test]
    fn drawing_from_an_empty_shoe_fails() {
        let mut shoe = Shoe::new(1);
        for _ in 0..52 {
            shoe.draw().unwrap();
        }
        assert_eq!(shoe.draw(), Err(GameError::EmptyShoe));
    }
}
