use crate::card::Card;
use crate::error::ActionError;
use crate::hand::Hand;

use super::{Phase, Seat, Table};

impl Table {
    fn ensure_phase(&self, phase: Phase) -> Result<(), ActionError> {
        if self.phase != phase {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Player action: Hit (draw a card into the current hand).
    ///
    /// Hits are accepted while earlier cards are still sliding in. The bust
    /// check runs once everything has arrived.
    ///
    /// Returns the dealt card, or `None` if the deck ran out and was
    /// reshuffled instead.
    ///
    /// # Errors
    ///
    /// Returns an error outside the player's turn.
    pub fn hit(&mut self) -> Result<Option<Card>, ActionError> {
        self.ensure_phase(Phase::PlayerTurn)?;
        Ok(self.deal_to(Seat::Player(self.current_hand), false))
    }

    /// Player action: Stand (hand over to the dealer).
    ///
    /// # Errors
    ///
    /// Returns an error outside the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_phase(Phase::PlayerTurn)?;
        self.phase = Phase::DealerTurn;
        log::debug!("player stands on {}", self.player_score());
        Ok(())
    }

    /// Clears the table for the next round and returns to betting.
    ///
    /// The deck is rebuilt and reshuffled; the chip balance and the selected
    /// bet carry over.
    ///
    /// # Errors
    ///
    /// Returns an error unless the round is over.
    pub fn new_hand(&mut self) -> Result<(), ActionError> {
        self.ensure_phase(Phase::GameOver)?;

        self.deck.initialize();
        self.player_hands = alloc::vec![Hand::new()];
        self.current_hand = 0;
        self.dealer_hand = Hand::new();
        self.banner.clear();
        self.input_suspended = false;
        self.animations.clear();
        self.last_result = None;
        self.phase = Phase::Betting;
        log::debug!("new hand with {} chips", self.chips);

        Ok(())
    }
}
