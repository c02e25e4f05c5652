//! Round result types.

/// How a round ended for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Two-card 21 against a dealer without 21.
    Blackjack,
    /// Two-card 21 against a dealer who also shows 21.
    ///
    /// The bet is credited back even though it was never debited, so the
    /// round's `net` is `+bet` rather than zero.
    BlackjackPush,
    /// Player went over 21.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    /// Player beat the dealer's total.
    Win,
    /// Equal totals.
    Push,
    /// Dealer beat the player's total.
    Lose,
}

impl Outcome {
    /// The banner shown when the round resolves this way.
    ///
    /// A bust resolves silently: the "Bust!" banner raised when the bust was
    /// detected stays up.
    #[must_use]
    pub const fn message(self) -> Option<&'static str> {
        match self {
            Self::Blackjack => Some("Blackjack! You win 3:2"),
            Self::BlackjackPush => Some("Push! Both have Blackjack"),
            Self::PlayerBust => None,
            Self::DealerBust => Some("Dealer busts! You win!"),
            Self::Win => Some("You win!"),
            Self::Push => Some("Push!"),
            Self::Lose => Some("You lose!"),
        }
    }
}

/// Summary of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome.
    pub outcome: Outcome,
    /// The bet the round was played for.
    pub bet: usize,
    /// Change applied to the chip balance.
    pub net: isize,
    /// The player's final score.
    pub player_score: u8,
    /// The dealer's final score (visible cards only).
    pub dealer_score: u8,
}
