//! Brickfall entry point
//!
//! Headless demo driver: a console host, a logging renderer, and an autopilot
//! that keeps the paddle under the ball. Pass a JSON config path as the first
//! argument to change ruleset, scheduling, or seed.

use std::time::{SystemTime, UNIX_EPOCH};

use brickfall::config::GameConfig;
use brickfall::controller::{ControlFlow, GameController, Host, Renderer};
use brickfall::sim::GameState;

/// Demo sessions end after this many frames even if the autopilot never loses
const DEMO_FRAME_CAP: u64 = 10_000;

/// Host that prints terminal messages and remembers restart requests
#[derive(Default)]
struct ConsoleHost {
    restart_requested: bool,
}

impl Host for ConsoleHost {
    fn show_message(&mut self, text: &str) {
        println!("{text}");
    }

    fn restart(&mut self) {
        self.restart_requested = true;
    }
}

/// Renderer that logs a state line every few hundred frames
struct LogRenderer {
    every: u64,
    frames: u64,
}

impl LogRenderer {
    fn new(every: u64) -> Self {
        Self { every, frames: 0 }
    }
}

impl Renderer for LogRenderer {
    fn draw(&mut self, state: &GameState) {
        self.frames += 1;
        if self.frames % self.every == 0 {
            log::debug!(
                "frame {}: score {} level {} ball ({:.1}, {:.1}) paddle {:.1} bricks {}",
                self.frames,
                state.score,
                state.level,
                state.ball.pos.x,
                state.ball.pos.y,
                state.paddle.x,
                state.grid.visible_count()
            );
        }
    }
}

fn load_config() -> GameConfig {
    let Some(path) = std::env::args().nth(1) else {
        return GameConfig::default();
    };
    match std::fs::read_to_string(&path) {
        Ok(json) => match GameConfig::from_json(&json) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("invalid config {path}: {err}; using defaults");
                GameConfig::default()
            }
        },
        Err(err) => {
            log::warn!("cannot read config {path}: {err}; using defaults");
            GameConfig::default()
        }
    }
}

fn derive_seed(config: &GameConfig) -> u64 {
    if config.seed != 0 {
        return config.seed;
    }
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(1)
}

fn main() {
    env_logger::init();

    let config = load_config();
    let seed = derive_seed(&config);
    log::info!("starting demo: {:?}, seed {seed}", config.ruleset);

    let mut controller = GameController::new(GameState::new(config.ruleset, seed));
    controller.start();

    let mut renderer = LogRenderer::new(500);
    let mut host = ConsoleHost::default();
    let mut scheduler = config.scheduler();

    let mut frames: u64 = 0;
    scheduler.run(&mut || {
        frames += 1;
        if frames > DEMO_FRAME_CAP {
            log::info!("demo frame cap reached");
            return ControlFlow::Stop;
        }
        // Autopilot: keep the paddle centered under the ball
        let ball_x = controller.state.ball.pos.x;
        controller.input.pointer_position(ball_x);
        controller.frame(&mut renderer, &mut host)
    });

    log::info!(
        "demo over after {} frames: score {}, level {}",
        frames.min(DEMO_FRAME_CAP),
        controller.state.score,
        controller.state.level
    );
    if host.restart_requested {
        log::info!("host restart requested; a real host would recreate the session here");
    }
}
