//! Card sliding.

use crate::card::Card;
use crate::geometry::{Point, distance, lerp};

/// Fraction of the remaining distance covered each tick.
pub const DAMPING: f32 = 0.1;

/// Below this distance a card snaps onto its target.
pub const SNAP_DISTANCE: f32 = 1.0;

/// Moves a travelling card one tick closer to its target.
///
/// Resting cards are left alone.
pub fn advance(card: &mut Card) {
    if !card.moving {
        return;
    }

    card.position = Point::new(
        lerp(card.position.x, card.target.x, DAMPING),
        lerp(card.position.y, card.target.y, DAMPING),
    );

    if distance(card.position, card.target) < SNAP_DISTANCE {
        card.position = card.target;
        card.moving = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    #[test]
    fn card_settles_exactly_on_target() {
        let mut card = Card::new(Suit::Clubs, 5);
        card.position = Point::new(500.0, -120.0);
        card.target = Point::new(150.0, 450.0);
        card.moving = true;

        let mut ticks = 0;
        while card.moving {
            advance(&mut card);
            ticks += 1;
            assert!(ticks < 1000);
        }

        assert_eq!(card.position, card.target);
    }

    #[test]
    fn first_step_covers_a_tenth() {
        let mut card = Card::new(Suit::Clubs, 5);
        card.target = Point::new(100.0, 0.0);
        card.moving = true;
        advance(&mut card);
        assert!((card.position.x - 10.0).abs() < 1e-4);
        assert!(card.moving);
    }
}
