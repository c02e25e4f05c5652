use alloc::format;
use alloc::string::String;

use crate::card::{CARD_HEIGHT, CARD_WIDTH, Card};
use crate::geometry::{Point, Rect};
use crate::surface::{Color, Surface, TextStyle};

use super::layout::{self, Button};
use super::{Phase, Table};

const FELT: Color = Color::rgb(0, 100, 0);
const AREA: Color = Color::rgb(0, 80, 0);
const CARD_BACK: Color = Color::rgb(150, 0, 0);
const RED_INK: Color = Color::rgb(255, 0, 0);
const BUTTON_LABEL_Y: f32 = 670.0;

fn draw_card(surface: &mut dyn Surface, card: &Card) {
    let rect = Rect::new(card.position.x, card.position.y, CARD_WIDTH, CARD_HEIGHT);
    if card.face_down {
        surface.fill_rect(rect, CARD_BACK, 5.0);
        return;
    }

    surface.fill_rect(rect, Color::WHITE, 5.0);
    let ink = if card.suit.is_red() {
        RED_INK
    } else {
        Color::BLACK
    };
    let label = card.label();

    surface.text(&label, rect.center(), TextStyle::centered(20.0, ink));
    let corner = TextStyle::centered(14.0, ink);
    surface.text(&label, Point::new(rect.x + 15.0, rect.y + 20.0), corner);
    surface.text(
        &label,
        Point::new(rect.x + rect.width - 15.0, rect.y + rect.height - 20.0),
        corner,
    );
}

impl Table {
    /// Draws the whole table: felt, deck, hands, info, buttons and banner.
    pub fn draw(&self, surface: &mut dyn Surface) {
        let width = self.options.width;
        let height = self.options.height;
        let label = TextStyle::centered(24.0, Color::WHITE);

        surface.background(FELT);
        surface.fill_rect(Rect::new(50.0, 80.0, 900.0, 180.0), AREA, 10.0);
        surface.text("Dealer", Point::new(100.0, 120.0), label);
        surface.fill_rect(Rect::new(50.0, 320.0, 900.0, 300.0), AREA, 10.0);
        surface.text("Player", Point::new(100.0, 360.0), label);

        for i in 0..self.deck.len().min(10) {
            #[expect(clippy::cast_precision_loss, reason = "at most ten cards")]
            let offset = i as f32 * 0.5;
            surface.fill_rect(
                Rect::new(
                    width - 150.0 + offset,
                    height / 2.0 - 60.0 + offset,
                    CARD_WIDTH,
                    CARD_HEIGHT,
                ),
                CARD_BACK,
                5.0,
            );
        }

        for card in self.dealer_hand.cards() {
            draw_card(surface, card);
        }
        for hand in &self.player_hands {
            for card in hand.cards() {
                draw_card(surface, card);
            }
        }

        self.draw_info(surface);

        let pile = layout::chip_pile(self.chips);
        if surface.has_image(pile) {
            surface.image(pile, Rect::new(width - 220.0, height - 140.0, 200.0, 120.0));
        }

        self.draw_buttons(surface);

        if let Some(text) = self.message() {
            surface.fill_rect(
                Rect::new(width / 2.0 - 200.0, height / 2.0 - 30.0, 400.0, 60.0),
                Color::rgba(0, 0, 0, 200),
                10.0,
            );
            surface.text(
                text,
                Point::new(width / 2.0, height / 2.0),
                TextStyle::centered(24.0, Color::WHITE),
            );
        }
    }

    fn draw_info(&self, surface: &mut dyn Surface) {
        let info = TextStyle::centered(20.0, Color::WHITE);
        surface.text(&format!("Chips: ${}", self.chips), Point::new(150.0, 30.0), info);
        surface.text(&format!("Bet: ${}", self.bet), Point::new(300.0, 30.0), info);

        if self.phase == Phase::Betting {
            return;
        }

        surface.text(
            &format!("Dealer: {}", self.visible_dealer_score()),
            Point::new(850.0, 120.0),
            info,
        );

        if self.player_hands.len() > 1 {
            surface.text(
                &format!(
                    "Playing hand {} of {}",
                    self.current_hand + 1,
                    self.player_hands.len()
                ),
                Point::new(self.options.width / 2.0, 300.0),
                TextStyle::centered(16.0, Color::WHITE),
            );
        }

        surface.text(
            &format!("Player: {}", self.player_score()),
            Point::new(850.0, 360.0),
            info,
        );
    }

    fn draw_buttons(&self, surface: &mut dyn Surface) {
        for (button, rect) in layout::buttons(self.phase, self.options.width) {
            let (fill, ink, text): (Color, Color, String) = match button {
                Button::Deal => (Color::rgb(200, 200, 0), Color::BLACK, "Deal".into()),
                Button::Decrease => (Color::gray(100), Color::WHITE, "-".into()),
                Button::Increase => (Color::gray(100), Color::WHITE, "+".into()),
                Button::Preset(index) => {
                    let amount = self.options.presets.get(index).copied().unwrap_or(0);
                    let fill = if self.bet == amount { 200 } else { 100 };
                    (Color::gray(fill), Color::WHITE, format!("${amount}"))
                }
                Button::Hit => (Color::rgb(0, 0, 200), Color::WHITE, "Hit".into()),
                Button::Stand => (Color::rgb(200, 0, 0), Color::WHITE, "Stand".into()),
                Button::NewHand => (Color::rgb(0, 200, 0), Color::WHITE, "New Hand".into()),
            };

            surface.fill_rect(rect, fill, 5.0);
            surface.text(
                &text,
                Point::new(rect.x + rect.width / 2.0, BUTTON_LABEL_Y),
                TextStyle::centered(20.0, ink),
            );
        }
    }
}
