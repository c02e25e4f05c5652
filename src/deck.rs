//! The shuffled 52-card source the table deals from.

extern crate alloc;

use alloc::vec::Vec;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::geometry::Point;
use crate::hand::Hand;

/// A single shuffled deck.
///
/// Running out is not an error: the deal that finds the deck empty rebuilds
/// and reshuffles it instead of producing a card.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards left to deal. The last card is dealt next.
    pub cards: Vec<Card>,
    /// Where dealt cards start their slide from.
    origin: Point,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a freshly shuffled deck whose cards fly in from `origin`.
    #[must_use]
    pub fn new(seed: u64, origin: Point) -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(DECK_SIZE),
            origin,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        deck.initialize();
        deck
    }

    /// Replaces the remaining cards with a full, shuffled deck.
    pub fn initialize(&mut self) {
        self.cards.clear();
        for suit in Suit::ALL {
            for rank in 1..=13 {
                self.cards.push(Card::new(suit, rank));
            }
        }

        self.cards.shuffle(&mut self.rng);
        log::trace!("deck reshuffled");
    }

    /// Deals the top card into `hand`, animated from the deal origin to `target`.
    ///
    /// Returns a copy of the dealt card. If the deck is empty it is rebuilt
    /// and `None` is returned; nothing is added to the hand in that case.
    pub fn deal_card(&mut self, hand: &mut Hand, target: Point, face_down: bool) -> Option<Card> {
        let Some(mut card) = self.cards.pop() else {
            self.initialize();
            return None;
        };

        card.face_down = face_down;
        card.position = self.origin;
        card.target = target;
        card.moving = true;
        hand.add_card(card);
        Some(card)
    }

    /// The deal origin.
    #[must_use]
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
