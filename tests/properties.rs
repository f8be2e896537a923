use gem_breakout::sim::{FrameTime, GamePhase, GameState, TickInput, Vector2D, tick};
use gem_breakout::{GameConfig, InputEdge, Key, KeyAction};
use glam::Vec2;
use proptest::prelude::*;

fn playing(seed: u64) -> GameState {
    let mut state = GameState::new(GameConfig {
        seed,
        ..GameConfig::default()
    });
    state.start();
    state
}

fn edge_strategy() -> impl Strategy<Value = InputEdge> {
    (
        prop_oneof![Just(Key::Left), Just(Key::Right)],
        prop_oneof![Just(KeyAction::Pressed), Just(KeyAction::Released)],
    )
        .prop_map(|(key, action)| InputEdge { key, action })
}

fn frame_strategy() -> impl Strategy<Value = (Vec<InputEdge>, f32)> {
    (prop::collection::vec(edge_strategy(), 0..3), 0.0f32..100.0)
}

fn sign() -> impl Strategy<Value = f32> {
    prop_oneof![Just(1.0f32), Just(-1.0f32)]
}

proptest! {
    #[test]
    fn paddle_stays_in_field(
        seed in any::<u64>(),
        start_x in -50.0f32..700.0,
        frames in prop::collection::vec(frame_strategy(), 1..120),
    ) {
        let mut state = playing(seed);
        state.paddle.pos.x = start_x;
        let max_x = state.config.paddle_max_x();
        let mut game_time = 0.0;

        for (edges, delta_ms) in frames {
            game_time += delta_ms as f64;
            let input = TickInput { edges, idle_mode: false };
            tick(&mut state, &input, &FrameTime::new(delta_ms, game_time));
            if state.phase != GamePhase::Playing {
                break;
            }
            prop_assert!(state.paddle.pos.x >= 0.0);
            prop_assert!(state.paddle.pos.x <= max_x);
        }
    }

    #[test]
    fn blocks_vanish_one_at_a_time_and_never_return(
        x in 0.0f32..620.0,
        y in 0.0f32..180.0,
        dx in sign(),
        dy in sign(),
        deltas in prop::collection::vec(1.0f32..40.0, 1..200),
    ) {
        let mut state = playing(1);
        state.ball.pos = Vec2::new(x, y);
        state.ball_direction = Vector2D::new(dx, dy).normalised();

        let mut previous: Vec<bool> = state.blocks.iter().map(|b| b.visible).collect();
        for delta_ms in deltas {
            tick(&mut state, &TickInput::default(), &FrameTime::new(delta_ms, 0.0));
            let current: Vec<bool> = state.blocks.iter().map(|b| b.visible).collect();

            let newly_hidden = previous
                .iter()
                .zip(&current)
                .filter(|(was, now)| **was && !**now)
                .count();
            prop_assert!(newly_hidden <= 1);
            for (was, now) in previous.iter().zip(&current) {
                prop_assert!(*was || !*now, "a hidden block reappeared");
            }
            prop_assert_eq!(state.blocks_hit, current.iter().filter(|v| !**v).count());
            previous = current;
        }
    }

    #[test]
    fn direction_stays_unit(
        x in 0.0f32..620.0,
        y in 0.0f32..900.0,
        dx in sign(),
        dy in sign(),
        deltas in prop::collection::vec(1.0f32..40.0, 1..200),
    ) {
        let mut state = playing(2);
        state.ball.pos = Vec2::new(x, y);
        state.ball_direction = Vector2D::new(dx, dy).normalised();

        for delta_ms in deltas {
            tick(&mut state, &TickInput { edges: vec![], idle_mode: true }, &FrameTime::new(delta_ms, 0.0));
            let dir = state.ball_direction;
            prop_assert!((dir.length() - 1.0).abs() < 1e-4);
            prop_assert!((dir.x().abs() - dir.y().abs()).abs() < 1e-4);
        }
    }

    #[test]
    fn floor_exit_costs_exactly_one_life(
        x in 0.0f32..618.0,
        below in 0.5f32..200.0,
        lives in 2i32..6,
    ) {
        let mut state = playing(3);
        state.player_life = lives;
        state.ball.pos = Vec2::new(x, 920.0 + 50.0 + below);

        tick(&mut state, &TickInput::default(), &FrameTime::new(0.0, 0.0));
        prop_assert_eq!(state.player_life, lives - 1);
        prop_assert_eq!(state.ball.pos, Vec2::new(320.0, 460.0));
        prop_assert_eq!(state.phase, GamePhase::Playing);
    }
}
