//! Where things sit on the table, and which button a click lands on.

extern crate alloc;

use alloc::vec::Vec;

use crate::geometry::{Point, Rect};
use crate::surface::Image;

use super::state::{Phase, Seat};

/// Left edge of the first card in a row.
pub const FIRST_CARD_X: f32 = 150.0;
/// Horizontal offset between consecutive cards in a row.
pub const CARD_FAN: f32 = 30.0;
/// Top edge of the dealer's cards.
pub const DEALER_ROW_Y: f32 = 150.0;
/// Top edge of the first player hand's cards.
pub const PLAYER_ROW_Y: f32 = 450.0;
/// Vertical offset between player hands.
pub const HAND_SPACING: f32 = 50.0;

/// Top edge of every button.
pub const BUTTON_TOP: f32 = 650.0;
/// Height of every button.
pub const BUTTON_HEIGHT: f32 = 40.0;

const BETTING_WIDTHS: [f32; 7] = [80.0, 40.0, 60.0, 60.0, 60.0, 60.0, 40.0];
const BETTING_SPACING: f32 = 10.0;
const ACTION_LEFT: f32 = 380.0;
const ACTION_WIDTH: f32 = 80.0;
const ACTION_GAP: f32 = 100.0;

/// A clickable button on the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Deal a new round.
    Deal,
    /// Lower the bet by one step.
    Decrease,
    /// Snap the bet to the preset at this index.
    Preset(usize),
    /// Raise the bet by one step.
    Increase,
    /// Take another card.
    Hit,
    /// Hand over to the dealer.
    Stand,
    /// Start the next round.
    NewHand,
}

#[expect(
    clippy::cast_precision_loss,
    reason = "card and hand counts are tiny"
)]
fn steps(count: usize) -> f32 {
    count as f32
}

/// Where the card at `index` in `seat`'s hand comes to rest.
#[must_use]
pub fn card_slot(seat: Seat, index: usize) -> Point {
    let x = FIRST_CARD_X + steps(index) * CARD_FAN;
    let y = match seat {
        Seat::Player(hand) => PLAYER_ROW_Y + steps(hand) * HAND_SPACING,
        Seat::Dealer => DEALER_ROW_Y,
    };
    Point::new(x, y)
}

/// The betting row, centred on a canvas of the given width.
#[must_use]
pub fn betting_buttons(width: f32) -> [(Button, Rect); 7] {
    let total: f32 = BETTING_WIDTHS.iter().sum::<f32>() + BETTING_SPACING * 6.0;
    let mut x = (width - total) / 2.0;
    let kinds = [
        Button::Deal,
        Button::Decrease,
        Button::Preset(0),
        Button::Preset(1),
        Button::Preset(2),
        Button::Preset(3),
        Button::Increase,
    ];

    let mut index = 0;
    kinds.map(|kind| {
        let w = BETTING_WIDTHS[index];
        let rect = Rect::new(x, BUTTON_TOP, w, BUTTON_HEIGHT);
        x += w + BETTING_SPACING;
        index += 1;
        (kind, rect)
    })
}

/// Hit and stand.
#[must_use]
pub const fn action_buttons() -> [(Button, Rect); 2] {
    [
        (
            Button::Hit,
            Rect::new(ACTION_LEFT, BUTTON_TOP, ACTION_WIDTH, BUTTON_HEIGHT),
        ),
        (
            Button::Stand,
            Rect::new(
                ACTION_LEFT + ACTION_GAP,
                BUTTON_TOP,
                ACTION_WIDTH,
                BUTTON_HEIGHT,
            ),
        ),
    ]
}

/// The new-hand button.
#[must_use]
pub const fn new_hand_button() -> (Button, Rect) {
    (
        Button::NewHand,
        Rect::new(450.0, BUTTON_TOP, 100.0, BUTTON_HEIGHT),
    )
}

/// Buttons offered in `phase`. The dealer's turn offers none.
#[must_use]
pub fn buttons(phase: Phase, width: f32) -> Vec<(Button, Rect)> {
    match phase {
        Phase::Betting => betting_buttons(width).to_vec(),
        Phase::PlayerTurn => action_buttons().to_vec(),
        Phase::DealerTurn => Vec::new(),
        Phase::GameOver => alloc::vec![new_hand_button()],
    }
}

/// The button under `point`, if any.
#[must_use]
pub fn button_at(phase: Phase, width: f32, point: Point) -> Option<Button> {
    buttons(phase, width)
        .into_iter()
        .find(|(_, rect)| rect.contains(point))
        .map(|(button, _)| button)
}

/// Chip pile artwork for a balance.
#[must_use]
pub const fn chip_pile(chips: usize) -> Image {
    if chips < 500 {
        Image::SmallChipPile
    } else if chips <= 1500 {
        Image::MediumChipPile
    } else {
        Image::BigChipPile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn betting_row_is_centred() {
        let row = betting_buttons(1000.0);
        assert!((row[0].1.x - 270.0).abs() < 1e-3);
        assert!((row[1].1.x - 360.0).abs() < 1e-3);
        assert!((row[6].1.x + row[6].1.width - 730.0).abs() < 1e-3);
    }

    #[test]
    fn initial_slots_match_fan() {
        assert_eq!(card_slot(Seat::Player(0), 0), Point::new(150.0, 450.0));
        assert_eq!(card_slot(Seat::Player(0), 1), Point::new(180.0, 450.0));
        assert_eq!(card_slot(Seat::Dealer, 1), Point::new(180.0, 150.0));
        assert_eq!(card_slot(Seat::Player(1), 2), Point::new(210.0, 500.0));
    }

    #[test]
    fn dealer_turn_has_no_buttons() {
        assert_eq!(button_at(Phase::DealerTurn, 1000.0, Point::new(420.0, 670.0)), None);
        assert_eq!(
            button_at(Phase::PlayerTurn, 1000.0, Point::new(420.0, 670.0)),
            Some(Button::Hit)
        );
    }
}
