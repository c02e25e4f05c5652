use bjarcade::{
    Align, App, Card, CatchGame, CatchOptions, Color, DrawCommand, DrawList, FrameContext, Hand,
    Image, KeyState, Mode, Outcome, Phase, Point, RoundResult, Screen, Suit, TableOptions,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// The blackjack table behind its menu, drawn into a command list the page
/// replays onto a canvas.
#[wasm_bindgen]
pub struct WasmTable {
    screen: Screen,
    surface: DrawList,
    frame: u64,
}

#[wasm_bindgen]
impl WasmTable {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            screen: Screen::new(TableOptions::default(), seed as u64),
            surface: DrawList::new(),
            frame: 0,
        }
    }

    pub fn reset(&mut self, seed: u32) {
        *self = Self::new(seed);
    }

    /// Called when the page could not load an image.
    pub fn image_missing(&mut self, name: &str) {
        if let Some(image) = image_from_str(name) {
            self.surface.mark_missing(image);
        }
    }

    /// Runs one animation frame and returns its draw commands.
    pub fn frame(&mut self, pointer_x: f32, pointer_y: f32) -> Result<JsValue, JsValue> {
        self.frame += 1;
        let ctx = self.context(pointer_x, pointer_y);
        self.screen.frame(&ctx, &mut self.surface);
        commands_to_js(&mut self.surface)
    }

    pub fn pointer_pressed(&mut self, x: f32, y: f32) {
        let ctx = self.context(x, y);
        self.screen.pointer_pressed(&ctx);
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let table = &self.screen.table;
        let snapshot = TableSnapshot {
            mode: match self.screen.mode() {
                Mode::Menu => "Menu",
                Mode::Game => "Game",
            },
            phase: phase_to_str(table.phase()),
            chips: table.chips() as u32,
            bet: table.bet() as u32,
            message: table.message(),
            input_suspended: table.is_input_suspended(),
            settled: table.is_settled(),
            player: table
                .player_hands
                .first()
                .map(JsHand::from_hand)
                .unwrap_or_default(),
            dealer: JsHand::from_hand(&table.dealer_hand),
            visible_dealer_value: table.visible_dealer_score(),
            last_result: table.last_result().map(JsRoundResult::from),
            cards_remaining: table.deck.len() as u32,
        };
        to_js_value(&snapshot)
    }
}

impl WasmTable {
    fn context(&self, x: f32, y: f32) -> FrameContext {
        let options = &self.screen.table.options;
        FrameContext::new(options.width, options.height)
            .with_frame(self.frame)
            .with_pointer(Point::new(x, y))
    }
}

/// The ball-catching game.
#[wasm_bindgen]
pub struct WasmCatch {
    game: CatchGame,
    surface: DrawList,
    frame: u64,
}

#[wasm_bindgen]
impl WasmCatch {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        let mut game = CatchGame::new(CatchOptions::default(), seed as u64);
        let options = &game.options;
        let ctx = FrameContext::new(options.width, options.height);
        game.init(&ctx);
        Self {
            game,
            surface: DrawList::new(),
            frame: 0,
        }
    }

    /// Runs one animation frame with the arrow keys as currently held.
    pub fn frame(&mut self, left: bool, right: bool) -> Result<JsValue, JsValue> {
        self.frame += 1;
        let options = &self.game.options;
        let ctx = FrameContext::new(options.width, options.height)
            .with_frame(self.frame)
            .with_keys(KeyState { left, right });
        self.game.frame(&ctx, &mut self.surface);
        commands_to_js(&mut self.surface)
    }

    pub fn key_pressed(&mut self, key: &str) {
        if let Some(key) = key.chars().next() {
            self.game.key_pressed(key);
        }
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = CatchSnapshot {
            score: self.game.score(),
            lives: self.game.lives(),
            ball_speed: self.game.ball_speed(),
            boosted: self.game.is_boosted(),
            game_over: self.game.is_game_over(),
            balls: self.game.balls.len() as u32,
            bonuses: self.game.bonuses.len() as u32,
        };
        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct TableSnapshot {
    mode: &'static str,
    phase: &'static str,
    chips: u32,
    bet: u32,
    message: Option<&'static str>,
    input_suspended: bool,
    settled: bool,
    player: JsHand,
    dealer: JsHand,
    visible_dealer_value: u8,
    last_result: Option<JsRoundResult>,
    cards_remaining: u32,
}

#[derive(Serialize)]
struct CatchSnapshot {
    score: u32,
    lives: u32,
    ball_speed: f32,
    boosted: bool,
    game_over: bool,
    balls: u32,
    bonuses: u32,
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: u8,
}

#[derive(Serialize, Default)]
struct JsHand {
    cards: Vec<Option<JsCard>>,
    value: u8,
    is_soft: bool,
    is_bust: bool,
}

impl JsHand {
    fn from_hand(hand: &Hand) -> Self {
        Self {
            cards: hand
                .cards()
                .iter()
                .map(|card| (!card.face_down).then(|| card_to_js(*card)))
                .collect(),
            value: hand.score(),
            is_soft: hand.is_soft(),
            is_bust: hand.is_bust(),
        }
    }
}

#[derive(Serialize)]
struct JsRoundResult {
    outcome: &'static str,
    bet: u32,
    net: i32,
    player_value: u8,
    dealer_value: u8,
}

impl From<RoundResult> for JsRoundResult {
    fn from(result: RoundResult) -> Self {
        Self {
            outcome: outcome_to_str(result.outcome),
            bet: result.bet as u32,
            net: result.net as i32,
            player_value: result.player_score,
            dealer_value: result.dealer_score,
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
enum JsCommand {
    Background {
        color: [u8; 4],
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: [u8; 4],
        radius: f32,
    },
    Ellipse {
        x: f32,
        y: f32,
        diameter: f32,
        color: [u8; 4],
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        color: [u8; 4],
        align: &'static str,
    },
    Image {
        image: &'static str,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
}

impl From<DrawCommand> for JsCommand {
    fn from(command: DrawCommand) -> Self {
        match command {
            DrawCommand::Background(color) => Self::Background {
                color: color_to_js(color),
            },
            DrawCommand::Rect {
                rect,
                color,
                radius,
            } => Self::Rect {
                x: rect.x,
                y: rect.y,
                width: rect.width,
                height: rect.height,
                color: color_to_js(color),
                radius,
            },
            DrawCommand::Ellipse {
                center,
                diameter,
                color,
            } => Self::Ellipse {
                x: center.x,
                y: center.y,
                diameter,
                color: color_to_js(color),
            },
            DrawCommand::Text { text, at, style } => Self::Text {
                text,
                x: at.x,
                y: at.y,
                size: style.size,
                color: color_to_js(style.color),
                align: match style.align {
                    Align::Left => "left",
                    Align::Center => "center",
                },
            },
            DrawCommand::Image { image, rect } => Self::Image {
                image: image_to_str(image),
                x: rect.x,
                y: rect.y,
                width: rect.width,
                height: rect.height,
            },
        }
    }
}

fn commands_to_js(surface: &mut DrawList) -> Result<JsValue, JsValue> {
    let commands: Vec<JsCommand> = surface.take().into_iter().map(JsCommand::from).collect();
    to_js_value(&commands)
}

fn color_to_js(color: Color) -> [u8; 4] {
    [color.r, color.g, color.b, color.a]
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: suit_to_str(card.suit),
        rank: card.rank,
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Hearts => "Hearts",
        Suit::Diamonds => "Diamonds",
        Suit::Clubs => "Clubs",
        Suit::Spades => "Spades",
    }
}

fn phase_to_str(phase: Phase) -> &'static str {
    match phase {
        Phase::Betting => "Betting",
        Phase::PlayerTurn => "PlayerTurn",
        Phase::DealerTurn => "DealerTurn",
        Phase::GameOver => "GameOver",
    }
}

fn outcome_to_str(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Blackjack => "Blackjack",
        Outcome::BlackjackPush => "BlackjackPush",
        Outcome::PlayerBust => "PlayerBust",
        Outcome::DealerBust => "DealerBust",
        Outcome::Win => "Win",
        Outcome::Push => "Push",
        Outcome::Lose => "Lose",
    }
}

fn image_to_str(image: Image) -> &'static str {
    match image {
        Image::MenuBackground => "menuBackground",
        Image::SmallChipPile => "smallChipPile",
        Image::MediumChipPile => "mediumChipPile",
        Image::BigChipPile => "bigChipPile",
    }
}

fn image_from_str(name: &str) -> Option<Image> {
    match name {
        "menuBackground" => Some(Image::MenuBackground),
        "smallChipPile" => Some(Image::SmallChipPile),
        "mediumChipPile" => Some(Image::MediumChipPile),
        "bigChipPile" => Some(Image::BigChipPile),
        _ => None,
    }
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
