use crate::arrow::Arrow;
use crate::challenge::SequenceGenerator;
use crate::clock::{Clock, SystemClock};
use crate::error::{Action, GameError};
use crate::leaderboard::{Leaderboard, LeaderboardEntry};
use crate::session::{ActionLabel, Phase, SessionState, WRONG_ARROW_MESSAGE};
use crossterm::event::KeyCode;
use log::{debug, info};
use std::time::Instant;

/// Result of feeding one key to the game
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyOutcome {
    /// Not an arrow key, or no session running
    Ignored,
    Correct,
    Wrong,
    /// The last arrow was hit; carries the entry just added to the leaderboard
    Completed(LeaderboardEntry),
}

/// Session timer. Exists only while a session is running.
#[derive(Debug, Clone, Copy)]
struct Stopwatch {
    started_at: Instant,
}

impl Stopwatch {
    fn start(now: Instant) -> Self {
        Self { started_at: now }
    }

    fn elapsed_secs(&self, now: Instant) -> f64 {
        now.saturating_duration_since(self.started_at).as_secs_f64()
    }
}

/// Game session controller: owns the current session and the leaderboard
#[derive(Debug)]
pub struct Game<C: Clock = SystemClock> {
    clock: C,
    generator: SequenceGenerator,
    phase: Phase,
    session: SessionState,
    stopwatch: Option<Stopwatch>,
    leaderboard: Leaderboard,
}

impl Game<SystemClock> {
    pub fn new(generator: SequenceGenerator) -> Self {
        Self::with_clock(generator, SystemClock)
    }
}

impl<C: Clock> Game<C> {
    pub fn with_clock(generator: SequenceGenerator, clock: C) -> Self {
        Self {
            clock,
            generator,
            phase: Phase::Idle,
            session: SessionState::default(),
            stopwatch: None,
            leaderboard: Leaderboard::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn action_label(&self) -> ActionLabel {
        ActionLabel::from(self.phase)
    }

    /// True while the session timer is held and ticks should be delivered
    pub fn is_ticking(&self) -> bool {
        self.stopwatch.is_some()
    }

    pub fn start(&mut self) -> Result<(), GameError> {
        self.ensure_phase(Action::Start, Phase::Idle)?;
        self.begin();
        Ok(())
    }

    pub fn cancel(&mut self) -> Result<(), GameError> {
        self.ensure_phase(Action::Cancel, Phase::Running)?;
        self.abort();
        Ok(())
    }

    pub fn restart(&mut self) -> Result<(), GameError> {
        self.ensure_phase(Action::Restart, Phase::Completed)?;
        self.begin();
        Ok(())
    }

    /// The single action button: Start Game, Cancel or Restart depending on phase
    pub fn press_action(&mut self) -> Phase {
        match self.phase {
            Phase::Idle | Phase::Completed => self.begin(),
            Phase::Running => self.abort(),
        }
        self.phase
    }

    pub fn handle_key(&mut self, code: KeyCode) -> KeyOutcome {
        if self.phase != Phase::Running {
            return KeyOutcome::Ignored;
        }
        let Some(pressed) = Arrow::from_key_code(code) else {
            return KeyOutcome::Ignored;
        };

        self.session.total_presses += 1;
        let expected = self.session.sequence.get(self.session.position);

        let outcome = if expected == Some(pressed) {
            self.session.position += 1;
            self.session.correct_presses += 1;
            self.session.error = None;
            self.session.refresh_accuracy();

            if self.session.is_complete() {
                KeyOutcome::Completed(self.complete())
            } else {
                KeyOutcome::Correct
            }
        } else {
            self.session.error = Some(WRONG_ARROW_MESSAGE);
            self.session.refresh_accuracy();
            KeyOutcome::Wrong
        };

        debug!(
            "pressed {} at {}: {:?} ({}/{} correct)",
            pressed,
            self.session.position,
            outcome,
            self.session.correct_presses,
            self.session.total_presses
        );
        outcome
    }

    /// Refreshes the elapsed-time readout. No effect outside a running session.
    pub fn on_tick(&mut self) {
        if let Some(stopwatch) = self.stopwatch {
            self.session.elapsed_secs = stopwatch.elapsed_secs(self.clock.now());
        }
    }

    fn ensure_phase(&self, action: Action, expected: Phase) -> Result<(), GameError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::InvalidTransition {
                action,
                phase: self.phase,
            })
        }
    }

    fn begin(&mut self) {
        self.session = SessionState::with_sequence(self.generator.generate());
        self.stopwatch = Some(Stopwatch::start(self.clock.now()));
        self.phase = Phase::Running;
        info!("session started: {}", self.session.sequence);
    }

    fn abort(&mut self) {
        self.session = SessionState::default();
        self.stopwatch = None;
        self.phase = Phase::Idle;
        info!("session cancelled");
    }

    fn complete(&mut self) -> LeaderboardEntry {
        if let Some(stopwatch) = self.stopwatch.take() {
            self.session.elapsed_secs = stopwatch.elapsed_secs(self.clock.now());
        }
        self.phase = Phase::Completed;

        let entry = LeaderboardEntry::new(self.session.elapsed_secs, self.session.accuracy);
        self.leaderboard.push(entry);
        info!(
            "session completed in {:.2}s at {:.2}% ({} runs)",
            entry.time_secs,
            entry.accuracy,
            self.leaderboard.len()
        );
        entry
    }
}
