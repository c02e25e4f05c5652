//! Hands and blackjack scoring.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

const fn card_value(rank: u8) -> u8 {
    match rank {
        1 => 11,
        2..=10 => rank,
        11..=13 => 10,
        _ => 0,
    }
}

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards.iter().filter(|card| !card.face_down) {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card_value(card.rank));
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= 21;
    (value, is_soft)
}

/// Scores a run of cards the blackjack way.
///
/// Face-down cards are skipped. Aces count 11 and are demoted to 1, one at a
/// time, only while the total is over 21.
#[must_use]
pub fn score(cards: &[Card]) -> u8 {
    evaluate_cards(cards).0
}

/// The cards held by one participant, in the order they were dealt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the cards in the hand for in-place updates.
    pub fn cards_mut(&mut self) -> &mut [Card] {
        &mut self.cards
    }

    /// Scores the visible cards. See [`score`].
    #[must_use]
    pub fn score(&self) -> u8 {
        score(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the visible cards total more than 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > 21
    }

    /// Returns whether this is a two-card 21.
    #[must_use]
    pub fn is_natural(&self) -> bool {
        self.cards.len() == 2 && self.score() == 21
    }

    /// Turns every face-down card face up.
    pub fn reveal(&mut self) {
        for card in &mut self.cards {
            card.face_down = false;
        }
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    fn hand(ranks: &[u8]) -> Hand {
        let mut hand = Hand::new();
        for &rank in ranks {
            hand.add_card(Card::new(Suit::Spades, rank));
        }
        hand
    }

    #[test]
    fn two_aces_demote_only_once() {
        assert_eq!(hand(&[1, 1]).score(), 12);
        assert!(hand(&[1, 1]).is_soft());
    }

    #[test]
    fn three_aces_and_king() {
        assert_eq!(hand(&[1, 1, 1, 13]).score(), 13);
    }

    #[test]
    fn face_down_cards_are_skipped() {
        let mut h = hand(&[10]);
        let mut hole = Card::new(Suit::Hearts, 9);
        hole.face_down = true;
        h.add_card(hole);
        assert_eq!(h.score(), 10);
        h.reveal();
        assert_eq!(h.score(), 19);
    }
}
