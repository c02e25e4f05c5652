//! The blackjack table: betting, dealing, the dealer's play and payouts.
//!
//! A [`Table`] is driven by two calls from its host: [`Table::tick`] once per
//! animation frame and [`Table::pointer_pressed`] once per click. Dealt cards
//! slide into place over several ticks, and the table does not score hands or
//! move to the next phase until every card dealt by the last action has
//! arrived.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{CARD_HEIGHT, Card};
use crate::deck::Deck;
use crate::geometry::Point;
use crate::hand::{self, Hand};
use crate::options::TableOptions;
use crate::result::RoundResult;

mod actions;
pub mod animation;
mod bet;
mod dealer;
pub mod layout;
pub mod message;
mod render;
pub mod state;

pub use animation::Animations;
pub use layout::Button;
pub use message::Banner;
pub use state::{CardHandle, Phase, Seat};

/// A single-player blackjack table.
///
/// The table owns the deck, both sides' hands, the chip balance and the
/// current bet. Chips are only settled when a round resolves; dealing does
/// not debit the bet.
pub struct Table {
    /// Game options.
    pub options: TableOptions,
    /// The deck cards are dealt from.
    pub deck: Deck,
    /// The player's hands. Only the first is ever dealt to.
    pub player_hands: Vec<Hand>,
    /// Hand currently being played.
    current_hand: usize,
    /// The dealer's hand.
    pub dealer_hand: Hand,
    /// Current phase.
    phase: Phase,
    /// Chip balance.
    chips: usize,
    /// Bet for the next or current round.
    bet: usize,
    /// Transient message.
    banner: Banner,
    /// Clicks are dropped while set.
    input_suspended: bool,
    /// Cards still sliding in.
    animations: Animations,
    /// How the last round ended.
    last_result: Option<RoundResult>,
}

impl Table {
    /// Creates a table in the betting phase with a deck shuffled from `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjarcade::{Phase, Table, TableOptions};
    ///
    /// let table = Table::new(TableOptions::default(), 42);
    /// assert_eq!(table.phase(), Phase::Betting);
    /// assert_eq!(table.chips(), 1000);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        let origin = Point::new(options.width / 2.0, -CARD_HEIGHT);

        Self {
            deck: Deck::new(seed, origin),
            player_hands: alloc::vec![Hand::new()],
            current_hand: 0,
            dealer_hand: Hand::new(),
            phase: Phase::Betting,
            chips: options.starting_chips,
            bet: options.initial_bet,
            banner: Banner::default(),
            input_suspended: false,
            animations: Animations::new(),
            last_result: None,
            options,
        }
    }

    /// Advances one animation frame.
    ///
    /// Counts the banner down, moves in-flight cards, and once they have all
    /// arrived lets the current phase make progress: bust and natural checks
    /// on the player's turn, one draw-or-resolve step on the dealer's turn.
    pub fn tick(&mut self) {
        self.banner.tick();
        if self.banner.remaining() == 0 {
            self.input_suspended = false;
        }

        self.animations
            .step(&mut self.player_hands, &mut self.dealer_hand);

        if !self.animations.is_settled() {
            return;
        }

        if self.phase == Phase::PlayerTurn {
            self.check_player_bust();
            self.check_natural();
        }

        if self.phase == Phase::DealerTurn {
            self.dealer_step();
        }
    }

    /// Handles a click at `pointer`.
    ///
    /// Ignored entirely while a banner is up. Clicks that miss every button
    /// offered in the current phase do nothing.
    pub fn pointer_pressed(&mut self, pointer: Point) {
        if self.input_suspended {
            return;
        }

        let Some(button) = layout::button_at(self.phase, self.options.width, pointer) else {
            return;
        };

        match button {
            Button::Deal => {
                if let Err(err) = self.deal() {
                    log::debug!("deal rejected: {err}");
                }
            }
            Button::Decrease => {
                if let Err(err) = self.decrease_bet() {
                    log::debug!("bet change rejected: {err}");
                }
            }
            Button::Increase => {
                if let Err(err) = self.increase_bet() {
                    log::debug!("bet change rejected: {err}");
                }
            }
            Button::Preset(index) => {
                if let Err(err) = self.select_preset(index) {
                    log::debug!("bet change rejected: {err}");
                }
            }
            Button::Hit => {
                if let Err(err) = self.hit() {
                    log::debug!("hit rejected: {err}");
                }
            }
            Button::Stand => {
                if let Err(err) = self.stand() {
                    log::debug!("stand rejected: {err}");
                }
            }
            Button::NewHand => {
                if let Err(err) = self.new_hand() {
                    log::debug!("new hand rejected: {err}");
                }
            }
        }
    }

    /// Shows a banner and suspends input until it expires.
    fn set_message(&mut self, text: &'static str, ticks: u32) {
        self.banner.show(text, ticks);
        self.input_suspended = ticks > 0;
    }

    /// Deals one card to `seat`, animated into the next free slot.
    ///
    /// Returns `None` when the deck was empty and got reshuffled instead.
    fn deal_to(&mut self, seat: Seat, face_down: bool) -> Option<Card> {
        let hand = match seat {
            Seat::Player(index) => self.player_hands.get_mut(index)?,
            Seat::Dealer => &mut self.dealer_hand,
        };

        let index = hand.len();
        let target = layout::card_slot(seat, index);
        let Some(card) = self.deck.deal_card(hand, target, face_down) else {
            log::debug!("deck ran out while dealing to {seat:?}; reshuffled");
            return None;
        };

        self.animations.track(CardHandle { seat, index });
        Some(card)
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the chip balance.
    #[must_use]
    pub const fn chips(&self) -> usize {
        self.chips
    }

    /// Returns the current bet.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns the banner text while it is showing.
    #[must_use]
    pub const fn message(&self) -> Option<&'static str> {
        self.banner.text()
    }

    /// Returns the banner, including its remaining ticks.
    #[must_use]
    pub const fn banner(&self) -> &Banner {
        &self.banner
    }

    /// Returns whether clicks are currently ignored.
    #[must_use]
    pub const fn is_input_suspended(&self) -> bool {
        self.input_suspended
    }

    /// Returns whether every card from the last action has arrived.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.animations.is_settled()
    }

    /// Returns the in-flight card set.
    #[must_use]
    pub const fn animations(&self) -> &Animations {
        &self.animations
    }

    /// Index of the hand being played.
    #[must_use]
    pub const fn current_hand_index(&self) -> usize {
        self.current_hand
    }

    /// Score of the hand being played.
    #[must_use]
    pub fn player_score(&self) -> u8 {
        self.player_hands
            .get(self.current_hand)
            .map_or(0, Hand::score)
    }

    /// Score of the dealer's face-up cards.
    #[must_use]
    pub fn dealer_score(&self) -> u8 {
        self.dealer_hand.score()
    }

    /// The dealer score as shown on the table: just the up card while the
    /// player is still deciding.
    #[must_use]
    pub fn visible_dealer_score(&self) -> u8 {
        let cards = self.dealer_hand.cards();
        if self.phase == Phase::PlayerTurn && !cards.is_empty() {
            hand::score(&cards[..1])
        } else {
            hand::score(cards)
        }
    }

    /// How the most recent round ended, until the next new hand.
    #[must_use]
    pub const fn last_result(&self) -> Option<RoundResult> {
        self.last_result
    }
}
