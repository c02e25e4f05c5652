//! A falling-ball catching game.
//!
//! Balls drop from random columns and must be caught with a paddle steered by
//! the arrow keys. Every missed ball costs a life. Occasional bonus items
//! speed the paddle up for a while, and every tenth catch makes the balls
//! fall faster.

extern crate alloc;

use alloc::format;
use alloc::vec::Vec;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::app::App;
use crate::geometry::{Point, Rect, distance};
use crate::options::CatchOptions;
use crate::surface::{Color, FrameContext, Surface, TextStyle};

const BALL_SIZE: f32 = 20.0;
const BONUS_SIZE: f32 = 15.0;
const PADDLE_WIDTH: f32 = 50.0;
const PADDLE_HEIGHT: f32 = 20.0;

/// A ball or bonus item on its way down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Falling {
    /// Centre of the item.
    pub center: Point,
    /// Diameter.
    pub size: f32,
}

impl Falling {
    /// Whether the item touches the paddle.
    fn caught_by(&self, paddle: &Rect) -> bool {
        distance(self.center, paddle.center()) < self.size / 2.0 + paddle.width / 2.0
    }
}

/// The ball-catching game.
pub struct CatchGame {
    /// Game options.
    pub options: CatchOptions,
    /// The player's paddle.
    pub paddle: Rect,
    /// Balls in play.
    pub balls: Vec<Falling>,
    /// Bonus items in play.
    pub bonuses: Vec<Falling>,
    ball_speed: f32,
    /// Frame a bonus was caught on, while its effect lasts.
    boost_started: Option<u64>,
    score: u32,
    lives: u32,
    game_over: bool,
    rng: ChaCha8Rng,
}

impl CatchGame {
    /// Creates a game with the paddle centred near the bottom edge.
    #[must_use]
    pub fn new(options: CatchOptions, seed: u64) -> Self {
        Self {
            paddle: Rect::new(
                options.width / 2.0,
                options.height - 50.0,
                PADDLE_WIDTH,
                PADDLE_HEIGHT,
            ),
            balls: Vec::new(),
            bonuses: Vec::new(),
            ball_speed: options.ball_speed,
            boost_started: None,
            score: 0,
            lives: options.lives,
            game_over: false,
            rng: ChaCha8Rng::seed_from_u64(seed),
            options,
        }
    }

    /// Balls caught so far.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Lives left.
    #[must_use]
    pub const fn lives(&self) -> u32 {
        self.lives
    }

    /// Current falling speed of balls, in pixels per frame.
    #[must_use]
    pub const fn ball_speed(&self) -> f32 {
        self.ball_speed
    }

    /// Whether the last life has been lost.
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Whether a bonus is speeding up the paddle.
    #[must_use]
    pub const fn is_boosted(&self) -> bool {
        self.boost_started.is_some()
    }

    /// How far the paddle moves per frame while a key is held.
    #[must_use]
    pub const fn paddle_speed(&self) -> f32 {
        if self.is_boosted() {
            self.options.boosted_speed
        } else {
            self.options.paddle_speed
        }
    }

    /// Starts over. The paddle keeps its position.
    pub fn restart(&mut self) {
        self.balls.clear();
        self.bonuses.clear();
        self.score = 0;
        self.lives = self.options.lives;
        self.ball_speed = self.options.ball_speed;
        self.boost_started = None;
        self.game_over = false;
        log::info!("catch game restarted");
    }

    /// Runs one frame of simulation. Nothing moves once the game is over.
    pub fn step(&mut self, ctx: &FrameContext) {
        if self.game_over {
            return;
        }

        if ctx.keys.left {
            self.paddle.x -= self.paddle_speed();
        } else if ctx.keys.right {
            self.paddle.x += self.paddle_speed();
        }
        self.paddle.x = self
            .paddle
            .x
            .clamp(0.0, (self.options.width - self.paddle.width).max(0.0));

        if ctx.frame % self.options.ball_interval.max(1) == 0 {
            self.spawn(BALL_SIZE, false);
        }
        if ctx.frame % self.options.bonus_interval.max(1) == 0 {
            self.spawn(BONUS_SIZE, true);
        }

        self.update_balls();
        self.update_bonuses(ctx.frame);

        if let Some(started) = self.boost_started {
            if ctx.frame.saturating_sub(started) > self.options.bonus_frames {
                self.boost_started = None;
                log::debug!("bonus expired at frame {}", ctx.frame);
            }
        }
    }

    fn spawn(&mut self, size: f32, bonus: bool) {
        let x = self.rng.random_range(0.0..self.options.width.max(1.0));
        let item = Falling {
            center: Point::new(x, 0.0),
            size,
        };
        if bonus {
            self.bonuses.push(item);
        } else {
            self.balls.push(item);
        }
    }

    fn update_balls(&mut self) {
        for i in (0..self.balls.len()).rev() {
            self.balls[i].center.y += self.ball_speed;

            if self.balls[i].caught_by(&self.paddle) {
                self.balls.remove(i);
                self.score += 1;
                if self.options.level_size > 0 && self.score % self.options.level_size == 0 {
                    self.ball_speed += self.options.speed_increment;
                    log::debug!("level up: ball speed {}", self.ball_speed);
                }
            } else if self.balls[i].center.y > self.options.height {
                self.balls.remove(i);
                self.lose_life();
            }
        }
    }

    fn update_bonuses(&mut self, frame: u64) {
        for i in (0..self.bonuses.len()).rev() {
            self.bonuses[i].center.y += self.ball_speed - 1.0;

            if self.bonuses[i].caught_by(&self.paddle) {
                self.bonuses.remove(i);
                self.boost_started = Some(frame);
                log::debug!("bonus caught at frame {frame}");
            } else if self.bonuses[i].center.y > self.options.height {
                self.bonuses.remove(i);
            }
        }
    }

    fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.game_over = true;
            log::info!("catch game over with {} points", self.score);
        }
    }

    /// Draws the playfield, or the game-over screen.
    pub fn draw(&self, surface: &mut dyn Surface) {
        let width = self.options.width;
        let height = self.options.height;

        if self.game_over {
            surface.background(Color::rgb(200, 50, 50));
            surface.text(
                "Game Over",
                Point::new(width / 2.0, height / 2.0 - 20.0),
                TextStyle::centered(32.0, Color::WHITE),
            );
            let detail = TextStyle::centered(24.0, Color::WHITE);
            surface.text(
                &format!("Final Score: {}", self.score),
                Point::new(width / 2.0, height / 2.0 + 20.0),
                detail,
            );
            surface.text(
                "Press 'R' to Restart",
                Point::new(width / 2.0, height / 2.0 + 60.0),
                detail,
            );
            return;
        }

        surface.background(Color::rgb(100, 100, 250));
        let hud = TextStyle::left(20.0, Color::WHITE);
        surface.text(&format!("Score: {}", self.score), Point::new(10.0, 25.0), hud);
        surface.text(&format!("Lives: {}", self.lives), Point::new(10.0, 50.0), hud);

        surface.fill_rect(self.paddle, Color::rgb(0, 200, 100), 0.0);
        for ball in &self.balls {
            surface.fill_ellipse(ball.center, ball.size, Color::rgb(255, 50, 50));
        }
        for bonus in &self.bonuses {
            surface.fill_ellipse(bonus.center, bonus.size, Color::rgb(50, 200, 255));
        }
    }
}

impl App for CatchGame {
    fn init(&mut self, _ctx: &FrameContext) {
        log::info!("This is the ball collecting game");
        log::info!("Use left and right arrow keys to move.");
        log::info!("Catch the ball and you earn a point.");
        log::info!("When a ball touches the ground you lose a life; at 0 lives the game ends.");
        log::info!("Bonuses temporarily increase your speed.");
        log::info!("The balls fall faster every 10 catches.");
    }

    fn frame(&mut self, ctx: &FrameContext, surface: &mut dyn Surface) {
        self.step(ctx);
        self.draw(surface);
    }

    fn pointer_pressed(&mut self, _ctx: &FrameContext) {}

    fn key_pressed(&mut self, key: char) {
        if key.eq_ignore_ascii_case(&'r') {
            self.restart();
        }
    }
}
