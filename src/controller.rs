//! Frame orchestration
//!
//! The controller drives one frame at a time: sample input, step the physics,
//! hand the state to the renderer, route events to the host. Scheduling is a
//! pluggable strategy so both cadence policies (fixed-period ticking and
//! self-rescheduled frames) share the same engine.

use std::thread;
use std::time::Duration;

use crate::input::InputAggregator;
use crate::sim::{FrameEvent, GameState, RunState, tick};

/// Display collaborator; reads state, draws, returns nothing.
pub trait Renderer {
    fn draw(&mut self, state: &GameState);
}

/// Outside world: terminal messages and full-state restarts.
///
/// `show_message` may block or not; the core never depends on it. `restart`
/// asks the host to recreate the whole game - there is no in-place revival of
/// an Ended session.
pub trait Host {
    fn show_message(&mut self, text: &str);
    fn restart(&mut self);
}

/// Whether the frame loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    Continue,
    Stop,
}

/// Owns the session state and the input aggregator, runs one frame at a time.
#[derive(Debug)]
pub struct GameController {
    pub state: GameState,
    pub input: InputAggregator,
}

impl GameController {
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            input: InputAggregator::new(),
        }
    }

    /// Explicit start action: Stopped -> Running, exactly once.
    ///
    /// Repeated starts before a restart are no-ops, as is starting an Ended
    /// session.
    pub fn start(&mut self) {
        if self.state.run_state == RunState::Stopped {
            self.state.run_state = RunState::Running;
            log::info!("session started (seed {})", self.state.seed);
        }
    }

    /// Run one frame: input -> physics -> render -> event routing.
    ///
    /// Returns Stop on terminal events and refuses to step a session that is
    /// not Running.
    pub fn frame(&mut self, renderer: &mut dyn Renderer, host: &mut dyn Host) -> ControlFlow {
        if self.state.run_state != RunState::Running {
            return ControlFlow::Stop;
        }

        let input = self.input.sample();
        let event = tick(&mut self.state, &input);
        renderer.draw(&self.state);

        match event {
            Some(FrameEvent::LevelCleared { completed }) => {
                host.show_message(&format!("Level {completed} Complete!"));
                ControlFlow::Continue
            }
            Some(FrameEvent::Loss { level }) => {
                host.show_message(&format!("GAME OVER! You reached Level {level}"));
                host.restart();
                ControlFlow::Stop
            }
            Some(FrameEvent::Win { score }) => {
                host.show_message(&format!("YOU WIN! Final score: {score}"));
                host.restart();
                ControlFlow::Stop
            }
            None => ControlFlow::Continue,
        }
    }
}

/// Frame cadence strategy
///
/// Drives `step` repeatedly until it reports Stop. Frames never overlap;
/// everything inside one step is synchronous.
pub trait FrameScheduler {
    fn run(&mut self, step: &mut dyn FnMut() -> ControlFlow);
}

/// Fixed-period policy: keeps ticking until cancelled, and cancellation
/// happens exactly once per run on the terminal frame.
#[derive(Debug)]
pub struct RepeatingTicker {
    period: Duration,
    cancelled: bool,
}

impl RepeatingTicker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            cancelled: false,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    fn cancel(&mut self) {
        assert!(!self.cancelled, "repeating ticker cancelled twice");
        self.cancelled = true;
    }
}

impl FrameScheduler for RepeatingTicker {
    fn run(&mut self, step: &mut dyn FnMut() -> ControlFlow) {
        self.cancelled = false;
        loop {
            if step() == ControlFlow::Stop {
                self.cancel();
                return;
            }
            thread::sleep(self.period);
        }
    }
}

/// Self-rescheduling policy: the next frame is requested only while the
/// previous one asked to continue, so stopping is simply not re-requesting.
#[derive(Debug, Default)]
pub struct OnDemand;

impl FrameScheduler for OnDemand {
    fn run(&mut self, step: &mut dyn FnMut() -> ControlFlow) {
        while step() == ControlFlow::Continue {}
    }
}
