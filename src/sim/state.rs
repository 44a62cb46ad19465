//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in [`GameContext`], which the
//! frame driver owns and lends out to the phase machine and the physics step.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::phase::{GamePhase, LabelBox, StateMachine};
use super::rng::ServeRng;
use crate::config::GameConfig;

/// Which side of the table a paddle (or a point) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Human paddle on the left
    Player,
    /// AI paddle on the right
    Ai,
}

/// Vertical paddle step direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Sign along the y axis (screen space, y grows downward)
    pub fn sign(self) -> f32 {
        match self {
            Direction::Up => -1.0,
            Direction::Down => 1.0,
        }
    }
}

/// Something noteworthy that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off the top or bottom wall
    WallBounce,
    /// Ball bounced off a paddle
    PaddleBounce(Side),
    /// Ball left the arena; the side that earned the point
    Score(Side),
}

/// Fixed playing field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A paddle. `y` is the top edge and always stays inside the arena.
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    speed: f32,
    /// Lowest legal top edge (`arena height - paddle height`)
    max_y: f32,
}

impl Paddle {
    /// Create a paddle at `x`, vertically centered in an arena of `arena_height`
    pub fn new(x: f32, width: f32, height: f32, speed: f32, arena_height: f32) -> Self {
        let max_y = (arena_height - height).max(0.0);
        Self {
            x,
            y: max_y / 2.0,
            width,
            height,
            speed,
            max_y,
        }
    }

    /// Left paddle, `inset` from the left wall
    pub fn player(config: &GameConfig) -> Self {
        Self::new(
            config.paddle_inset,
            config.paddle_width,
            config.paddle_height,
            config.paddle_speed,
            config.arena_height,
        )
    }

    /// Right paddle, `inset` from the right wall
    pub fn ai(config: &GameConfig) -> Self {
        Self::new(
            config.arena_width - config.paddle_width - config.paddle_inset,
            config.paddle_width,
            config.paddle_height,
            config.ai_speed,
            config.arena_height,
        )
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Right edge (the face the ball hits on the player paddle)
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Move the top edge to `y`, clamped into the arena
    pub fn set_y(&mut self, y: f32) {
        self.y = y.clamp(0.0, self.max_y);
    }

    /// Center the paddle on `y` (pointer tracking)
    pub fn center_on(&mut self, y: f32) {
        self.set_y(y - self.height / 2.0);
    }

    /// Move by `dy`, clamped
    pub fn shift(&mut self, dy: f32) {
        self.set_y(self.y + dy);
    }

    /// Move one step of `speed` in `dir`
    pub fn step(&mut self, dir: Direction) {
        self.shift(dir.sign() * self.speed);
    }

    /// True if `y` lies strictly between the paddle's top and bottom edges
    pub fn spans(&self, y: f32) -> bool {
        y > self.y && y < self.y + self.height
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    /// Center position
    pub pos: Vec2,
    /// Velocity in pixels per tick
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Integrate one tick
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Put the ball back at `center` with a randomized serve
    pub fn serve(&mut self, center: Vec2, speed_x: f32, speed_y: f32, rng: &mut impl ServeRng) {
        let dir = if rng.next_bool() { 1.0 } else { -1.0 };
        let spread = rng.next_f32() * 2.0 - 1.0;
        self.pos = center;
        self.vel = Vec2::new(speed_x * dir, speed_y * spread);
        log::debug!("Serve from {} with velocity {}", self.pos, self.vel);
    }
}

/// Points for each side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player: u32,
    pub ai: u32,
}

impl Score {
    /// Give one point to `side`
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Ai => self.ai += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Ai => self.ai,
        }
    }
}

/// Complete game state for one process lifetime
#[derive(Debug, Clone)]
pub struct GameContext {
    pub config: GameConfig,
    pub arena: Arena,
    /// Clickable "Start" label on the menu
    pub menu_label: LabelBox,
    pub player: Paddle,
    pub ai: Paddle,
    pub ball: Ball,
    pub score: Score,
    machine: StateMachine,
}

impl GameContext {
    /// Fresh game in the menu, ball served from the center
    pub fn new(config: GameConfig, rng: &mut impl ServeRng) -> Self {
        let arena = Arena::new(config.arena_width, config.arena_height);
        let mut ball = Ball::new(arena.center(), Vec2::ZERO, config.ball_radius);
        ball.serve(
            arena.center(),
            config.serve_speed_x,
            config.serve_speed_y,
            rng,
        );

        Self {
            menu_label: LabelBox::for_arena(&arena, config.label_width, config.label_height),
            player: Paddle::player(&config),
            ai: Paddle::ai(&config),
            ball,
            score: Score::default(),
            machine: StateMachine::new(),
            arena,
            config,
        }
    }

    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.machine.phase()
    }

    /// Pointer activation; starts the game when it lands on the menu label
    pub fn activate(&mut self, point: Vec2) -> bool {
        self.machine.activate(point, &self.menu_label)
    }

    /// Pause signal; toggles between playing and paused
    pub fn toggle_pause(&mut self) -> bool {
        self.machine.toggle_pause()
    }

    /// Re-serve the ball from the arena center
    pub fn reset_ball(&mut self, rng: &mut impl ServeRng) {
        self.ball.serve(
            self.arena.center(),
            self.config.serve_speed_x,
            self.config.serve_speed_y,
            rng,
        );
    }
}
