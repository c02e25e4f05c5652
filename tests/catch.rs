//! Ball-catching game integration tests.

use bjarcade::{
    App, CatchGame, CatchOptions, DrawCommand, DrawList, Falling, FrameContext, Host, KeyState,
    Point,
};

const EPSILON: f32 = 1e-4;

fn ctx(frame: u64) -> FrameContext {
    FrameContext::new(400.0, 600.0).with_frame(frame)
}

fn held(left: bool, right: bool) -> KeyState {
    KeyState { left, right }
}

/// A ball that lands on the paddle centre after one frame at `speed`.
fn ball_over_paddle(game: &CatchGame, speed: f32) -> Falling {
    let center = game.paddle.center();
    Falling {
        center: Point::new(center.x, center.y - speed),
        size: 20.0,
    }
}

#[test]
fn paddle_starts_centred_near_bottom() {
    let game = CatchGame::new(CatchOptions::default(), 1);

    assert!((game.paddle.x - 200.0).abs() < EPSILON);
    assert!((game.paddle.y - 550.0).abs() < EPSILON);
    assert_eq!(game.lives(), 3);
    assert_eq!(game.score(), 0);
    assert!(!game.is_game_over());
}

#[test]
fn arrow_keys_move_and_clamp_paddle() {
    let mut game = CatchGame::new(CatchOptions::default(), 2);

    game.step(&ctx(1).with_keys(held(true, false)));
    assert!((game.paddle.x - 193.0).abs() < EPSILON);

    // Left wins when both are held.
    game.step(&ctx(2).with_keys(held(true, true)));
    assert!((game.paddle.x - 186.0).abs() < EPSILON);

    for frame in 3..60 {
        game.step(&ctx(frame).with_keys(held(true, false)));
    }
    assert!(game.paddle.x.abs() < EPSILON);

    for frame in 60..200 {
        game.step(&ctx(frame).with_keys(held(false, true)));
    }
    assert!((game.paddle.x - 350.0).abs() < EPSILON);
}

#[test]
fn balls_and_bonuses_spawn_on_their_intervals() {
    let mut game = CatchGame::new(CatchOptions::default(), 3);

    game.step(&ctx(29));
    assert!(game.balls.is_empty());

    game.step(&ctx(30));
    assert_eq!(game.balls.len(), 1);
    let ball = game.balls[0];
    assert!((ball.size - 20.0).abs() < EPSILON);
    assert!((ball.center.y - 3.0).abs() < EPSILON);
    assert!((0.0..400.0).contains(&ball.center.x));

    game.balls.clear();
    game.step(&ctx(300));
    assert_eq!(game.balls.len(), 1);
    assert_eq!(game.bonuses.len(), 1);
    // Bonuses fall one pixel per frame slower than balls.
    assert!((game.bonuses[0].center.y - 2.0).abs() < EPSILON);
    assert!((game.bonuses[0].size - 15.0).abs() < EPSILON);
}

#[test]
fn caught_ball_scores() {
    let mut game = CatchGame::new(CatchOptions::default(), 4);
    let ball = ball_over_paddle(&game, 3.0);
    game.balls.push(ball);

    game.step(&ctx(1));

    assert!(game.balls.is_empty());
    assert_eq!(game.score(), 1);
    assert_eq!(game.lives(), 3);
}

#[test]
fn every_tenth_catch_speeds_balls_up() {
    let mut game = CatchGame::new(CatchOptions::default(), 5);
    for _ in 0..10 {
        let ball = ball_over_paddle(&game, 3.0);
        game.balls.push(ball);
    }

    game.step(&ctx(1));

    assert_eq!(game.score(), 10);
    assert!((game.ball_speed() - 3.2).abs() < EPSILON);
}

#[test]
fn missed_balls_cost_lives_until_game_over() {
    let mut game = CatchGame::new(CatchOptions::default(), 6);

    for frame in 1..=3 {
        game.balls.push(Falling {
            center: Point::new(10.0, 599.0),
            size: 20.0,
        });
        game.step(&ctx(frame));
    }

    assert_eq!(game.lives(), 0);
    assert!(game.is_game_over());

    // Frozen from here on.
    game.balls.push(Falling {
        center: Point::new(10.0, 100.0),
        size: 20.0,
    });
    game.step(&ctx(30).with_keys(held(true, false)));
    assert!((game.balls[0].center.y - 100.0).abs() < EPSILON);
    assert!((game.paddle.x - 200.0).abs() < EPSILON);

    let mut surface = DrawList::new();
    game.draw(&mut surface);
    assert!(surface.has_text("Game Over"));
    assert!(surface.has_text("Final Score: 0"));
    assert!(surface.has_text("Press 'R' to Restart"));
}

#[test]
fn restart_keeps_paddle_position() {
    let mut game = CatchGame::new(CatchOptions::default().with_lives(1), 7);
    game.step(&ctx(1).with_keys(held(false, true)));
    game.balls.push(Falling {
        center: Point::new(10.0, 599.0),
        size: 20.0,
    });
    game.step(&ctx(2));
    assert!(game.is_game_over());

    game.key_pressed('x');
    assert!(game.is_game_over());

    game.key_pressed('R');
    assert!(!game.is_game_over());
    assert_eq!(game.lives(), 1);
    assert_eq!(game.score(), 0);
    assert!((game.ball_speed() - 3.0).abs() < EPSILON);
    assert!(game.balls.is_empty());
    assert!((game.paddle.x - 207.0).abs() < EPSILON);
}

#[test]
fn bonus_boosts_paddle_for_six_hundred_frames() {
    let mut game = CatchGame::new(CatchOptions::default(), 8);
    let center = game.paddle.center();
    game.bonuses.push(Falling {
        center: Point::new(center.x, center.y - 2.0),
        size: 15.0,
    });

    game.step(&ctx(5));
    assert!(game.bonuses.is_empty());
    assert!(game.is_boosted());
    assert!((game.paddle_speed() - 12.0).abs() < EPSILON);

    let before = game.paddle.x;
    game.step(&ctx(7).with_keys(held(true, false)));
    assert!((before - game.paddle.x - 12.0).abs() < EPSILON);

    game.step(&ctx(605));
    assert!(game.is_boosted());

    game.step(&ctx(606));
    assert!(!game.is_boosted());
    assert!((game.paddle_speed() - 7.0).abs() < EPSILON);
}

#[test]
fn missed_bonus_costs_nothing() {
    let mut game = CatchGame::new(CatchOptions::default(), 9);
    game.bonuses.push(Falling {
        center: Point::new(10.0, 599.0),
        size: 15.0,
    });

    game.step(&ctx(1));

    assert!(game.bonuses.is_empty());
    assert_eq!(game.lives(), 3);
    assert!(!game.is_boosted());
}

#[test]
fn frame_draws_hud_and_pieces() {
    let mut game = CatchGame::new(CatchOptions::default(), 10);
    game.balls.push(Falling {
        center: Point::new(50.0, 50.0),
        size: 20.0,
    });
    let mut surface = DrawList::new();

    game.frame(&ctx(1), &mut surface);

    assert!(surface.has_text("Score: 0"));
    assert!(surface.has_text("Lives: 3"));
    let ellipses = surface
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCommand::Ellipse { .. }))
        .count();
    assert_eq!(ellipses, 1);
}

#[test]
fn host_forwards_keys_and_ticks() {
    let host = Host::new(CatchGame::new(CatchOptions::default().with_lives(1), 11));
    let mut surface = DrawList::new();
    host.on_init(&ctx(1));

    host.with(|game| {
        game.balls.push(Falling {
            center: Point::new(10.0, 599.0),
            size: 20.0,
        });
    });
    host.on_tick(&ctx(1), &mut surface);
    assert!(host.with(|game| game.is_game_over()));

    host.on_key_press('r');
    let game = host.into_inner();
    assert!(!game.is_game_over());
}
