//! Game configuration options.

/// Rounding mode for fractional payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

/// Configuration options for the blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjarcade::TableOptions;
///
/// let options = TableOptions::default()
///     .with_starting_chips(500)
///     .with_initial_bet(25)
///     .with_dealer_stands_at(17);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TableOptions {
    /// Canvas width.
    pub width: f32,
    /// Canvas height.
    pub height: f32,
    /// Chip balance at program start.
    pub starting_chips: usize,
    /// Bet selected at program start.
    pub initial_bet: usize,
    /// Floor for the decrement button.
    pub min_bet: usize,
    /// Amount the increment and decrement buttons move the bet by.
    pub bet_step: usize,
    /// Amounts offered as one-click bet buttons.
    pub presets: [usize; 4],
    /// The dealer draws while below this score.
    pub dealer_stands_at: u8,
    /// Multiple of the bet credited for a natural.
    pub blackjack_credit: f64,
    /// Rounding mode for the natural credit.
    pub rounding_blackjack: RoundingMode,
    /// Ticks a banner stays up (and input stays locked).
    pub message_ticks: u32,
    /// Ticks the "Bust!" banner stays up.
    pub bust_message_ticks: u32,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 700.0,
            starting_chips: 1000,
            initial_bet: 50,
            min_bet: 10,
            bet_step: 5,
            presets: [10, 25, 50, 100],
            dealer_stands_at: 17,
            blackjack_credit: 2.5,
            rounding_blackjack: RoundingMode::Down,
            message_ticks: 120,
            bust_message_ticks: 60,
        }
    }
}

impl TableOptions {
    /// Sets the canvas size.
    ///
    /// # Example
    ///
    /// ```
    /// use bjarcade::TableOptions;
    ///
    /// let options = TableOptions::default().with_canvas(800.0, 600.0);
    /// assert_eq!(options.width, 800.0);
    /// ```
    #[must_use]
    pub const fn with_canvas(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the starting chip balance.
    ///
    /// # Example
    ///
    /// ```
    /// use bjarcade::TableOptions;
    ///
    /// let options = TableOptions::default().with_starting_chips(30);
    /// assert_eq!(options.starting_chips, 30);
    /// ```
    #[must_use]
    pub const fn with_starting_chips(mut self, chips: usize) -> Self {
        self.starting_chips = chips;
        self
    }

    /// Sets the bet selected at start.
    ///
    /// # Example
    ///
    /// ```
    /// use bjarcade::TableOptions;
    ///
    /// let options = TableOptions::default().with_initial_bet(10);
    /// assert_eq!(options.initial_bet, 10);
    /// ```
    #[must_use]
    pub const fn with_initial_bet(mut self, bet: usize) -> Self {
        self.initial_bet = bet;
        self
    }

    /// Sets the preset bet buttons.
    ///
    /// # Example
    ///
    /// ```
    /// use bjarcade::TableOptions;
    ///
    /// let options = TableOptions::default().with_presets([5, 10, 20, 40]);
    /// assert_eq!(options.presets[3], 40);
    /// ```
    #[must_use]
    pub const fn with_presets(mut self, presets: [usize; 4]) -> Self {
        self.presets = presets;
        self
    }

    /// Sets the score at which the dealer stops drawing.
    ///
    /// # Example
    ///
    /// ```
    /// use bjarcade::TableOptions;
    ///
    /// let options = TableOptions::default().with_dealer_stands_at(18);
    /// assert_eq!(options.dealer_stands_at, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_at(mut self, score: u8) -> Self {
        self.dealer_stands_at = score;
        self
    }

    /// Sets the multiple of the bet credited for a natural.
    ///
    /// # Example
    ///
    /// ```
    /// use bjarcade::TableOptions;
    ///
    /// let options = TableOptions::default().with_blackjack_credit(2.2);
    /// assert_eq!(options.blackjack_credit, 2.2);
    /// ```
    #[must_use]
    pub const fn with_blackjack_credit(mut self, ratio: f64) -> Self {
        self.blackjack_credit = ratio;
        self
    }

    /// Sets the rounding mode for the natural credit.
    ///
    /// # Example
    ///
    /// ```
    /// use bjarcade::{RoundingMode, TableOptions};
    ///
    /// let options = TableOptions::default().with_rounding_blackjack(RoundingMode::Up);
    /// assert_eq!(options.rounding_blackjack, RoundingMode::Up);
    /// ```
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }

    /// Sets how long banners stay up.
    ///
    /// # Example
    ///
    /// ```
    /// use bjarcade::TableOptions;
    ///
    /// let options = TableOptions::default().with_message_ticks(90, 30);
    /// assert_eq!(options.bust_message_ticks, 30);
    /// ```
    #[must_use]
    pub const fn with_message_ticks(mut self, message: u32, bust: u32) -> Self {
        self.message_ticks = message;
        self.bust_message_ticks = bust;
        self
    }
}

/// Configuration options for the ball-catching game.
///
/// ```
/// use bjarcade::CatchOptions;
///
/// let options = CatchOptions::default().with_lives(5).with_ball_speed(4.0);
/// assert_eq!(options.lives, 5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CatchOptions {
    /// Canvas width.
    pub width: f32,
    /// Canvas height.
    pub height: f32,
    /// Lives at the start of a game.
    pub lives: u32,
    /// Falling speed of balls at the start of a game.
    pub ball_speed: f32,
    /// Speed added each level.
    pub speed_increment: f32,
    /// Catches per level.
    pub level_size: u32,
    /// Frames between ball spawns.
    pub ball_interval: u64,
    /// Frames between bonus spawns.
    pub bonus_interval: u64,
    /// Paddle speed.
    pub paddle_speed: f32,
    /// Paddle speed while a bonus is active.
    pub boosted_speed: f32,
    /// Frames a bonus stays active.
    pub bonus_frames: u64,
}

impl Default for CatchOptions {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 600.0,
            lives: 3,
            ball_speed: 3.0,
            speed_increment: 0.2,
            level_size: 10,
            ball_interval: 30,
            bonus_interval: 300,
            paddle_speed: 7.0,
            boosted_speed: 12.0,
            bonus_frames: 600,
        }
    }
}

impl CatchOptions {
    /// Sets the canvas size.
    ///
    /// # Example
    ///
    /// ```
    /// use bjarcade::CatchOptions;
    ///
    /// let options = CatchOptions::default().with_canvas(300.0, 500.0);
    /// assert_eq!(options.height, 500.0);
    /// ```
    #[must_use]
    pub const fn with_canvas(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the number of lives.
    ///
    /// # Example
    ///
    /// ```
    /// use bjarcade::CatchOptions;
    ///
    /// let options = CatchOptions::default().with_lives(1);
    /// assert_eq!(options.lives, 1);
    /// ```
    #[must_use]
    pub const fn with_lives(mut self, lives: u32) -> Self {
        self.lives = lives;
        self
    }

    /// Sets the starting ball speed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjarcade::CatchOptions;
    ///
    /// let options = CatchOptions::default().with_ball_speed(5.0);
    /// assert_eq!(options.ball_speed, 5.0);
    /// ```
    #[must_use]
    pub const fn with_ball_speed(mut self, speed: f32) -> Self {
        self.ball_speed = speed;
        self
    }

    /// Sets the spawn intervals for balls and bonuses, in frames.
    ///
    /// # Example
    ///
    /// ```
    /// use bjarcade::CatchOptions;
    ///
    /// let options = CatchOptions::default().with_spawn_intervals(20, 200);
    /// assert_eq!(options.ball_interval, 20);
    /// ```
    #[must_use]
    pub const fn with_spawn_intervals(mut self, ball: u64, bonus: u64) -> Self {
        self.ball_interval = ball;
        self.bonus_interval = bonus;
        self
    }

    /// Sets the normal and boosted paddle speeds.
    ///
    /// # Example
    ///
    /// ```
    /// use bjarcade::CatchOptions;
    ///
    /// let options = CatchOptions::default().with_paddle_speeds(6.0, 10.0);
    /// assert_eq!(options.boosted_speed, 10.0);
    /// ```
    #[must_use]
    pub const fn with_paddle_speeds(mut self, normal: f32, boosted: f32) -> Self {
        self.paddle_speed = normal;
        self.boosted_speed = boosted;
        self
    }

    /// Sets how many frames a bonus lasts.
    ///
    /// # Example
    ///
    /// ```
    /// use bjarcade::CatchOptions;
    ///
    /// let options = CatchOptions::default().with_bonus_frames(300);
    /// assert_eq!(options.bonus_frames, 300);
    /// ```
    #[must_use]
    pub const fn with_bonus_frames(mut self, frames: u64) -> Self {
        self.bonus_frames = frames;
        self
    }
}
