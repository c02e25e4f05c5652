//! Round phase and seat types.

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Adjusting the bet before a deal.
    Betting,
    /// Waiting for hit or stand.
    PlayerTurn,
    /// Dealer reveals and draws to the stand threshold.
    DealerTurn,
    /// Round resolved; waiting for a new hand.
    GameOver,
}

/// Who a card was dealt to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// One of the player's hands.
    Player(usize),
    /// The dealer.
    Dealer,
}

/// Identifies a dealt card by seat and position within that seat's hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardHandle {
    /// The hand the card sits in.
    pub seat: Seat,
    /// Index into that hand.
    pub index: usize,
}
