//! Paddle Pong headless demo
//!
//! Starts a game by clicking the menu label, then steers the player paddle
//! with synthetic pointer events that lag behind the ball. Frames and sound
//! cues go to the log (`RUST_LOG=info` or `debug`).

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;

use paddle_pong::audio::LogAudio;
use paddle_pong::input::InputEvent;
use paddle_pong::renderer::LogRenderer;
use paddle_pong::{FrameDriver, GameConfig};

/// Classic Pong against a reactive AI, simulated headless
#[derive(Parser, Debug)]
#[command(name = "pong")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Number of frames to simulate
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Frames per second to pace at (0 runs as fast as possible)
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// JSON config file (arena and paddle geometry)
    #[arg(long)]
    config: Option<PathBuf>,

    /// How far the demo pointer closes on the ball each frame (0..=1)
    #[arg(long, default_value_t = 0.15)]
    pointer_lag: f32,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    log::info!("Paddle Pong (headless) starting...");

    let config = match &cli.config {
        Some(path) => GameConfig::load_or_default(path),
        None => GameConfig::default(),
    };

    let mut driver = FrameDriver::new(config);
    let mut renderer = LogRenderer::new(cli.fps.max(1) as u64);
    let mut audio = LogAudio::new();

    // Menu frame, then click the label
    driver.frame(&mut renderer, &mut audio);
    let label = driver.context().menu_label;
    let click = (label.min + label.max) / 2.0;
    driver.push_input(InputEvent::PointerActivate {
        x: click.x,
        y: click.y,
    });

    let frame_time = (cli.fps > 0).then(|| Duration::from_secs_f64(1.0 / cli.fps as f64));
    let lag = cli.pointer_lag.clamp(0.0, 1.0);
    let mut pointer_y = driver.context().player.center_y();

    for _ in 1..cli.frames {
        let started = Instant::now();

        let ball_y = driver.context().ball.pos.y;
        pointer_y += (ball_y - pointer_y) * lag;
        driver.push_input(InputEvent::PointerMove { y: pointer_y });

        driver.frame(&mut renderer, &mut audio);

        if let Some(frame_time) = frame_time {
            if let Some(rest) = frame_time.checked_sub(started.elapsed()) {
                std::thread::sleep(rest);
            }
        }
    }

    let score = driver.context().score;
    log::info!(
        "Finished {} frames: player {} - ai {} ({} sound cues)",
        driver.frames(),
        score.player,
        score.ai,
        audio.played()
    );
    println!("{}", paddle_pong::sim::Snapshot::capture(driver.context()).to_json());
}
