//! The set of cards still sliding into place for the current action.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::Hand;
use crate::motion;

use super::state::{CardHandle, Seat};

fn card_ref<'a>(players: &'a [Hand], dealer: &'a Hand, handle: CardHandle) -> Option<&'a Card> {
    let hand = match handle.seat {
        Seat::Player(index) => players.get(index)?,
        Seat::Dealer => dealer,
    };
    hand.cards().get(handle.index)
}

fn card_mut<'a>(
    players: &'a mut [Hand],
    dealer: &'a mut Hand,
    handle: CardHandle,
) -> Option<&'a mut Card> {
    let hand = match handle.seat {
        Seat::Player(index) => players.get_mut(index)?,
        Seat::Dealer => dealer,
    };
    hand.cards_mut().get_mut(handle.index)
}

/// In-flight cards dealt by the current action.
///
/// The table only scores hands and advances its phase once this set is
/// empty.
#[derive(Debug, Clone, Default)]
pub struct Animations {
    in_flight: Vec<CardHandle>,
}

impl Animations {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            in_flight: Vec::new(),
        }
    }

    /// Starts tracking a freshly dealt card.
    pub fn track(&mut self, handle: CardHandle) {
        self.in_flight.push(handle);
    }

    /// Forgets every tracked card.
    pub fn clear(&mut self) {
        self.in_flight.clear();
    }

    /// Returns whether every tracked card has arrived.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.in_flight.is_empty()
    }

    /// Tracked handles, in deal order.
    #[must_use]
    pub fn handles(&self) -> &[CardHandle] {
        &self.in_flight
    }

    /// Runs one tick.
    ///
    /// Cards that arrived on an earlier tick are dropped first and the rest
    /// advance, so a card that snaps onto its target this tick is released on
    /// the next one.
    pub fn step(&mut self, players: &mut [Hand], dealer: &mut Hand) {
        {
            let (players, dealer) = (&*players, &*dealer);
            self.in_flight
                .retain(|&handle| card_ref(players, dealer, handle).is_some_and(|c| c.moving));
        }

        for &handle in &self.in_flight {
            if let Some(card) = card_mut(players, dealer, handle) {
                motion::advance(card);
            }
        }
    }
}
