use crate::options::RoundingMode;
use crate::result::{Outcome, RoundResult};

use super::{Phase, Seat, Table};

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => amount.ceil() as usize,
        RoundingMode::Down => amount.floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as usize,
        RoundingMode::Down => libm::floor(amount) as usize,
        RoundingMode::Nearest => libm::round(amount) as usize,
    }
}

impl Table {
    /// Moves to the dealer's turn if any player hand is over 21.
    pub(super) fn check_player_bust(&mut self) {
        let busted = self.player_hands.iter().any(|hand| hand.is_bust());
        if busted {
            self.set_message("Bust!", self.options.bust_message_ticks);
            self.phase = Phase::DealerTurn;
            log::debug!("player busts with {}", self.player_score());
        }
    }

    /// Settles a two-card 21 immediately, without any dealer play.
    ///
    /// The dealer's hole card is turned over. A dealer 21 is a push and the
    /// bet is credited back; otherwise the natural is credited at the
    /// configured multiple of the bet.
    pub(super) fn check_natural(&mut self) {
        if self.phase != Phase::PlayerTurn {
            return;
        }
        let Some(first) = self.player_hands.first() else {
            return;
        };
        if !first.is_natural() {
            return;
        }

        self.dealer_hand.reveal();
        let dealer_score = self.dealer_hand.score();

        let (outcome, credit) = if dealer_score == 21 {
            (Outcome::BlackjackPush, self.bet)
        } else {
            #[expect(
                clippy::cast_precision_loss,
                reason = "f64 has sufficient precision for chip amounts"
            )]
            let winnings = (self.bet as f64) * self.options.blackjack_credit;
            (
                Outcome::Blackjack,
                round_amount(winnings, self.options.rounding_blackjack),
            )
        };

        self.chips += credit;
        #[expect(clippy::cast_possible_wrap, reason = "chip amounts fit in isize")]
        let net = credit as isize;
        self.finish_round(outcome, net, 21, dealer_score);
    }

    /// One step of the dealer's turn.
    ///
    /// Reveals the hole card, then either draws one card (and waits for it
    /// to arrive) or, at the stand threshold, resolves the round. The dealer
    /// plays out even after a player bust.
    pub(super) fn dealer_step(&mut self) {
        self.dealer_hand.reveal();

        if self.dealer_hand.score() < self.options.dealer_stands_at {
            self.deal_to(Seat::Dealer, false);
            return;
        }

        self.resolve();
    }

    /// Compares the final scores and settles the bet.
    fn resolve(&mut self) {
        let player_score = self
            .player_hands
            .first()
            .map_or(0, crate::hand::Hand::score);
        let dealer_score = self.dealer_hand.score();

        let outcome = if player_score > 21 {
            Outcome::PlayerBust
        } else if dealer_score > 21 {
            Outcome::DealerBust
        } else if player_score > dealer_score {
            Outcome::Win
        } else if player_score == dealer_score {
            Outcome::Push
        } else {
            Outcome::Lose
        };

        #[expect(clippy::cast_possible_wrap, reason = "chip amounts fit in isize")]
        let bet = self.bet as isize;
        let net = match outcome {
            Outcome::DealerBust | Outcome::Win => {
                self.chips += self.bet;
                bet
            }
            Outcome::PlayerBust | Outcome::Lose => {
                self.chips = self.chips.saturating_sub(self.bet);
                -bet
            }
            Outcome::Push | Outcome::Blackjack | Outcome::BlackjackPush => 0,
        };

        self.finish_round(outcome, net, player_score, dealer_score);
    }

    fn finish_round(&mut self, outcome: Outcome, net: isize, player_score: u8, dealer_score: u8) {
        if let Some(text) = outcome.message() {
            self.set_message(text, self.options.message_ticks);
        }

        self.last_result = Some(RoundResult {
            outcome,
            bet: self.bet,
            net,
            player_score,
            dealer_score,
        });
        self.phase = Phase::GameOver;

        log::debug!(
            "round over: {outcome:?} ({player_score} vs {dealer_score}), net {net}, {} chips",
            self.chips
        );
    }
}
