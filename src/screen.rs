//! The top-level menu/game switch that owns the blackjack table.

use crate::app::App;
use crate::geometry::{Point, Rect};
use crate::options::TableOptions;
use crate::surface::{Color, FrameContext, Image, Surface, TextStyle};
use crate::table::Table;

/// Divides the canvas into equal cells for laying out menus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    cell_width: f32,
    cell_height: f32,
}

impl Grid {
    /// Splits a `width` × `height` canvas into `cols` × `rows` cells.
    #[must_use]
    pub fn new(cols: u16, rows: u16, width: f32, height: f32) -> Self {
        Self {
            cell_width: width / f32::from(cols),
            cell_height: height / f32::from(rows),
        }
    }

    /// The area covered by `span_x` × `span_y` cells starting at (`col`, `row`).
    #[must_use]
    pub fn position(&self, col: u16, row: u16, span_x: u16, span_y: u16) -> Rect {
        Rect::new(
            f32::from(col) * self.cell_width,
            f32::from(row) * self.cell_height,
            f32::from(span_x) * self.cell_width,
            f32::from(span_y) * self.cell_height,
        )
    }
}

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Title screen with a play button.
    Menu,
    /// The blackjack table.
    Game,
}

/// Menu plus table, switched by the play button.
pub struct Screen {
    mode: Mode,
    grid: Grid,
    /// The table played once the menu is dismissed.
    pub table: Table,
}

impl Screen {
    /// Creates the screen on the menu.
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        Self {
            mode: Mode::Menu,
            grid: Grid::new(12, 12, options.width, options.height),
            table: Table::new(options, seed),
        }
    }

    /// Returns the current screen.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Area of the menu's play button.
    #[must_use]
    pub fn play_button(&self) -> Rect {
        self.grid.position(5, 10, 2, 1)
    }

    /// Draws whichever screen is showing.
    pub fn draw(&self, surface: &mut dyn Surface) {
        match self.mode {
            Mode::Menu => self.draw_menu(surface),
            Mode::Game => self.table.draw(surface),
        }
    }

    fn draw_menu(&self, surface: &mut dyn Surface) {
        let options = &self.table.options;
        if surface.has_image(Image::MenuBackground) {
            surface.image(
                Image::MenuBackground,
                Rect::new(0.0, 0.0, options.width, options.height),
            );
        } else {
            surface.background(Color::BLACK);
        }

        let play = self.play_button();
        surface.fill_rect(play, Color::rgb(0, 100, 0), 10.0);
        surface.text(
            "Play",
            play.center(),
            TextStyle::centered(24.0, Color::WHITE),
        );
    }

    /// Routes a click to the menu or the table.
    pub fn click(&mut self, pointer: Point) {
        match self.mode {
            Mode::Menu => {
                if self.play_button().contains(pointer) {
                    self.mode = Mode::Game;
                    log::info!("leaving menu for the table");
                }
            }
            Mode::Game => self.table.pointer_pressed(pointer),
        }
    }

    /// Advances the table while it is showing.
    pub fn update(&mut self) {
        if self.mode == Mode::Game {
            self.table.tick();
        }
    }
}

impl App for Screen {
    fn frame(&mut self, _ctx: &FrameContext, surface: &mut dyn Surface) {
        self.draw(surface);
        self.update();
    }

    fn pointer_pressed(&mut self, ctx: &FrameContext) {
        self.click(ctx.pointer);
    }
}
