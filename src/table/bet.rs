use crate::error::{BetError, DealError};

use super::{Phase, Seat, Table};

impl Table {
    fn ensure_betting(&self) -> Result<(), BetError> {
        if self.phase != Phase::Betting {
            return Err(BetError::InvalidState);
        }
        Ok(())
    }

    /// Lowers the bet by one step, never below the minimum bet.
    ///
    /// Returns the new bet.
    ///
    /// # Errors
    ///
    /// Returns an error outside the betting phase.
    pub fn decrease_bet(&mut self) -> Result<usize, BetError> {
        self.ensure_betting()?;
        self.bet = self
            .bet
            .saturating_sub(self.options.bet_step)
            .max(self.options.min_bet);
        Ok(self.bet)
    }

    /// Raises the bet by one step, never above the chip balance.
    ///
    /// Returns the new bet.
    ///
    /// # Errors
    ///
    /// Returns an error outside the betting phase.
    pub fn increase_bet(&mut self) -> Result<usize, BetError> {
        self.ensure_betting()?;
        self.bet = (self.bet + self.options.bet_step).min(self.chips);
        Ok(self.bet)
    }

    /// Snaps the bet to one of the preset amounts.
    ///
    /// Presets are not checked against the chip balance; an unaffordable
    /// preset is only rejected when dealing.
    ///
    /// # Errors
    ///
    /// Returns an error outside the betting phase or for an unknown preset.
    pub fn select_preset(&mut self, index: usize) -> Result<usize, BetError> {
        self.ensure_betting()?;
        let amount = *self
            .options
            .presets
            .get(index)
            .ok_or(BetError::NoSuchPreset(index))?;
        self.bet = amount;
        Ok(self.bet)
    }

    /// Deals two cards each to the player and the dealer, alternating and
    /// starting with the player. The dealer's second card is face down.
    ///
    /// A bet larger than the chip balance is refused with a "Not enough
    /// chips!" banner and no other change.
    ///
    /// # Errors
    ///
    /// Returns an error outside the betting phase or when the bet exceeds the
    /// chip balance.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.phase != Phase::Betting {
            return Err(DealError::InvalidState);
        }

        if self.bet > self.chips {
            self.set_message("Not enough chips!", self.options.message_ticks);
            return Err(DealError::InsufficientChips {
                bet: self.bet,
                chips: self.chips,
            });
        }

        self.animations.clear();
        self.deal_to(Seat::Player(0), false);
        self.deal_to(Seat::Dealer, false);
        self.deal_to(Seat::Player(0), false);
        self.deal_to(Seat::Dealer, true);

        self.phase = Phase::PlayerTurn;
        log::debug!("dealt round for a bet of {}", self.bet);

        Ok(())
    }
}
