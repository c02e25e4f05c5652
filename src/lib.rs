//! Tick-driven cores for two small canvas games, with optional `no_std`
//! support.
//!
//! - [`Table`] is a single-player blackjack table: betting, an animated
//!   deal, hit/stand, dealer play and payouts. [`Screen`] puts a title menu
//!   in front of it.
//! - [`CatchGame`] is an arcade game about catching falling balls.
//!
//! Neither game draws pixels or reads devices itself. The host calls in once
//! per animation frame and once per input event (see [`App`]), passing a
//! [`FrameContext`] and a [`Surface`] to draw on.
//!
//! # Example
//!
//! ```
//! use bjarcade::{App, DrawList, FrameContext, Point, Screen, TableOptions};
//!
//! let mut screen = Screen::new(TableOptions::default(), 42);
//! let mut surface = DrawList::new();
//! let ctx = FrameContext::new(1000.0, 700.0);
//!
//! screen.init(&ctx);
//! screen.frame(&ctx, &mut surface);
//! assert!(surface.has_text("Play"));
//!
//! let play = screen.play_button().center();
//! screen.pointer_pressed(&ctx.with_pointer(play));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod app;
pub mod card;
pub mod catch;
pub mod deck;
pub mod error;
pub mod geometry;
pub mod hand;
pub mod motion;
pub mod options;
pub mod result;
pub mod screen;
pub mod surface;
mod sync;
pub mod table;

// Re-export main types
pub use app::{App, Host};
pub use card::{CARD_HEIGHT, CARD_WIDTH, Card, DECK_SIZE, Suit};
pub use catch::{CatchGame, Falling};
pub use deck::Deck;
pub use error::{ActionError, BetError, DealError};
pub use geometry::{Point, Rect};
pub use hand::Hand;
pub use options::{CatchOptions, RoundingMode, TableOptions};
pub use result::{Outcome, RoundResult};
pub use screen::{Grid, Mode, Screen};
pub use surface::{
    Align, Color, DrawCommand, DrawList, FrameContext, Image, KeyState, Surface, TextStyle,
};
pub use table::{Button, CardHandle, Phase, Seat, Table};
