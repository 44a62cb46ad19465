use glam::Vec2;
use proptest::prelude::*;

use paddle_pong::GameConfig;
use paddle_pong::sim::{
    Ball, GameContext, GameEvent, ScriptedRng, Side, TickInput, bounce_bottom_wall,
    bounce_top_wall, update,
};

fn playing_context(rng: &mut ScriptedRng) -> GameContext {
    let mut ctx = GameContext::new(GameConfig::default(), rng);
    let label = ctx.menu_label;
    ctx.activate((label.min + label.max) / 2.0);
    ctx
}

proptest! {
    #[test]
    fn paddles_stay_in_arena(
        pointer in proptest::option::of(-2000.0f32..2000.0),
        steps in -50i32..50,
        ball_y in 0.0f32..500.0,
        ai_start in -500.0f32..1000.0,
    ) {
        let mut rng = ScriptedRng::constant(0.5, true);
        let mut ctx = playing_context(&mut rng);
        ctx.ai.set_y(ai_start);
        ctx.ball.pos = Vec2::new(400.0, ball_y);

        let input = TickInput { pointer_y: pointer, paddle_steps: steps };
        update(&mut ctx, &input, &mut rng);

        for paddle in [&ctx.player, &ctx.ai] {
            prop_assert!(paddle.y() >= 0.0);
            prop_assert!(paddle.y() <= 500.0 - paddle.height());
        }
    }

    #[test]
    fn wall_reflection_keeps_speed(
        x in 50.0f32..750.0,
        y in -20.0f32..520.0,
        vy in -8.0f32..8.0,
    ) {
        let mut ball = Ball::new(Vec2::new(x, y), Vec2::new(6.0, vy), 10.0);
        let vy_before = ball.vel.y;

        if bounce_top_wall(&mut ball) {
            prop_assert_eq!(ball.pos.y, 10.0);
            prop_assert_eq!(ball.vel.y, -vy_before);
        }
        let vy_mid = ball.vel.y;
        if bounce_bottom_wall(&mut ball, 500.0) {
            prop_assert_eq!(ball.pos.y, 490.0);
            prop_assert_eq!(ball.vel.y, -vy_mid);
        }
        prop_assert_eq!(ball.vel.y.abs(), vy_before.abs());
    }

    #[test]
    fn serve_after_score_is_bounded(
        spread in 0.0f32..1.0,
        coin in any::<bool>(),
        exit_left in any::<bool>(),
    ) {
        let mut rng = ScriptedRng::new(vec![spread], vec![coin]);
        let mut ctx = playing_context(&mut rng);
        // Clear both paddles out of the ball's row
        ctx.player.set_y(0.0);
        ctx.ai.set_y(0.0);
        let (x, vx) = if exit_left { (2.0, -6.0) } else { (798.0, 6.0) };
        ctx.ball.pos = Vec2::new(x, 450.0);
        ctx.ball.vel = Vec2::new(vx, 0.0);

        let events = update(&mut ctx, &TickInput::default(), &mut rng);

        let scorer = if exit_left { Side::Ai } else { Side::Player };
        prop_assert_eq!(events, vec![GameEvent::Score(scorer)]);
        prop_assert_eq!(ctx.score.get(scorer), 1);
        prop_assert_eq!(ctx.ball.pos, Vec2::new(400.0, 250.0));
        prop_assert_eq!(ctx.ball.vel.x.abs(), 6.0);
        prop_assert!(ctx.ball.vel.y.abs() <= 4.0);
    }

    #[test]
    fn non_playing_update_changes_nothing(
        pointer in -100.0f32..600.0,
        steps in -5i32..5,
        pause in any::<bool>(),
    ) {
        let mut rng = ScriptedRng::constant(0.3, false);
        let mut ctx = GameContext::new(GameConfig::default(), &mut rng);
        if pause {
            let label = ctx.menu_label;
            ctx.activate(label.min);
            ctx.toggle_pause();
        }
        let ball = ctx.ball;
        let (player_y, ai_y, score) = (ctx.player.y(), ctx.ai.y(), ctx.score);

        let input = TickInput { pointer_y: Some(pointer), paddle_steps: steps };
        let events = update(&mut ctx, &input, &mut rng);

        prop_assert!(events.is_empty());
        prop_assert_eq!(ctx.ball, ball);
        prop_assert_eq!(ctx.player.y(), player_y);
        prop_assert_eq!(ctx.ai.y(), ai_y);
        prop_assert_eq!(ctx.score, score);
    }
}
