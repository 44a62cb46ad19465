use glam::Vec2;
use paddle_pong::GameConfig;
use paddle_pong::consts::AI_SPEED;
use paddle_pong::sim::{GameContext, GameEvent, GamePhase, ScriptedRng, Side, TickInput, update};

fn start_game(config: GameConfig, rng: &mut ScriptedRng) -> GameContext {
    let mut ctx = GameContext::new(config, rng);
    let label = ctx.menu_label;
    assert!(ctx.activate((label.min + label.max) / 2.0));
    assert_eq!(ctx.phase(), GamePhase::Playing);
    ctx
}

#[test]
fn test_ball_exiting_left_scores_for_ai() {
    let mut rng = ScriptedRng::new(vec![0.5], vec![true, false]);
    let mut ctx = start_game(GameConfig::with_arena(800.0, 500.0), &mut rng);
    // Keep the player paddle clear of the ball's row
    ctx.player.set_y(0.0);
    ctx.ball.pos = Vec2::new(0.0, 250.0);
    ctx.ball.vel = Vec2::new(-6.0, 0.0);

    let events = update(&mut ctx, &TickInput::default(), &mut rng);

    assert_eq!(events, vec![GameEvent::Score(Side::Ai)]);
    assert_eq!(ctx.score.ai, 1);
    assert_eq!(ctx.score.player, 0);
    assert_eq!(ctx.ball.pos, Vec2::new(400.0, 250.0));
    assert!(ctx.ball.vel.x == -6.0 || ctx.ball.vel.x == 6.0);
    assert!(ctx.ball.vel.y.abs() <= 4.0);
}

#[test]
fn test_player_paddle_center_hit_returns_ball_flat() {
    let mut rng = ScriptedRng::constant(0.5, true);
    let mut ctx = start_game(GameConfig::default(), &mut rng);
    ctx.player.set_y(200.0);
    ctx.ball.pos = Vec2::new(35.0, 250.0);
    ctx.ball.vel = Vec2::new(-6.0, 0.0);

    let events = update(&mut ctx, &TickInput::default(), &mut rng);

    assert_eq!(events, vec![GameEvent::PaddleBounce(Side::Player)]);
    assert_eq!(ctx.ball.vel, Vec2::new(6.0, 0.0));
    assert_eq!(ctx.ball.pos.x, 42.0);
    assert_eq!(ctx.score.ai, 0);
}

#[test]
fn test_ai_paddle_follows_ball_down_then_clamps() {
    let mut rng = ScriptedRng::constant(0.5, true);
    let mut ctx = start_game(GameConfig::default(), &mut rng);
    ctx.ball.pos = Vec2::new(400.0, 480.0);
    ctx.ball.vel = Vec2::new(1.0, 0.0);

    let before = ctx.ai.y();
    update(&mut ctx, &TickInput::default(), &mut rng);
    assert_eq!(ctx.ai.y(), before + AI_SPEED);

    ctx.ai.set_y(398.0);
    update(&mut ctx, &TickInput::default(), &mut rng);
    assert_eq!(ctx.ai.y(), 400.0);
}

#[test]
fn test_wall_bounce_preserves_speed() {
    let mut rng = ScriptedRng::constant(0.5, true);
    let mut ctx = start_game(GameConfig::default(), &mut rng);
    ctx.ball.pos = Vec2::new(300.0, 487.0);
    ctx.ball.vel = Vec2::new(6.0, 3.5);

    let events = update(&mut ctx, &TickInput::default(), &mut rng);

    assert_eq!(events, vec![GameEvent::WallBounce]);
    assert_eq!(ctx.ball.pos.y, 490.0);
    assert_eq!(ctx.ball.vel.y, -3.5);
}

#[test]
fn test_long_rally_keeps_invariants() {
    let mut rng = ScriptedRng::new(vec![0.1, 0.8, 0.45, 0.99, 0.0], vec![true, false, false, true]);
    let mut ctx = start_game(GameConfig::default(), &mut rng);
    let mut scored = 0;

    for frame in 0..5_000 {
        // Player tracks the ball loosely
        let input = TickInput {
            pointer_y: Some(ctx.ball.pos.y + (frame % 7) as f32 * 3.0),
            paddle_steps: 0,
        };
        let before = ctx.score;
        let events = update(&mut ctx, &input, &mut rng);

        for paddle in [&ctx.player, &ctx.ai] {
            assert!(paddle.y() >= 0.0 && paddle.y() <= 400.0);
        }
        assert!(ctx.score.player >= before.player && ctx.score.ai >= before.ai);

        let points = events
            .iter()
            .filter(|e| matches!(e, GameEvent::Score(_)))
            .count() as u32;
        let gained = (ctx.score.player - before.player) + (ctx.score.ai - before.ai);
        assert_eq!(points, gained);
        assert!(points <= 1);
        scored += points;
    }

    assert_eq!(scored, ctx.score.player + ctx.score.ai);
}
