//! Card types.

extern crate alloc;

use alloc::format;
use alloc::string::String;

use crate::geometry::Point;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// The suit's symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
            Self::Spades => '♠',
        }
    }

    /// Returns whether the suit is printed in red.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Self::Hearts | Self::Diamonds)
    }
}

/// Width of a card on the table.
pub const CARD_WIDTH: f32 = 80.0;
/// Height of a card on the table.
pub const CARD_HEIGHT: f32 = 120.0;

/// A playing card on the table.
///
/// Besides suit and rank a card carries its own animation state: where it is
/// drawn now, where it is heading, and whether it is still travelling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
    /// Current top-left corner.
    pub position: Point,
    /// Where the card comes to rest.
    pub target: Point,
    /// Whether the card is still sliding towards its target.
    pub moving: bool,
    /// Whether the card is dealt face down.
    pub face_down: bool,
}

impl Card {
    /// Creates a resting, face-up card at the origin.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but score as zero.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self {
            suit,
            rank,
            position: Point::new(0.0, 0.0),
            target: Point::new(0.0, 0.0),
            moving: false,
            face_down: false,
        }
    }

    /// Returns whether this card is an ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == 1
    }

    /// The rank as printed on the card face.
    #[must_use]
    pub const fn rank_label(&self) -> &'static str {
        match self.rank {
            1 => "A",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "J",
            12 => "Q",
            13 => "K",
            _ => "?",
        }
    }

    /// Rank followed by suit symbol, e.g. `"10♠"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}{}", self.rank_label(), self.suit.symbol())
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
