use crate::challenge::SequenceGenerator;
use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::game::{Game, KeyOutcome};
use crate::runtime::GameEvent;
use crate::session::Phase;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::debug;

/// What the event loop should do after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug)]
pub struct App<C: Clock = SystemClock> {
    pub game: Game<C>,
    pub config: Config,
}

impl App<SystemClock> {
    pub fn new(config: Config, seed: Option<u64>) -> Self {
        let generator = match seed {
            Some(seed) => SequenceGenerator::with_seed(config.sequence_length, seed),
            None => SequenceGenerator::new(config.sequence_length),
        };
        Self::with_game(Game::new(generator), config)
    }
}

impl<C: Clock> App<C> {
    pub fn with_game(game: Game<C>, config: Config) -> Self {
        Self { game, config }
    }

    pub fn on_event(&mut self, event: GameEvent) -> Flow {
        match event {
            GameEvent::Tick => {
                self.game.on_tick();
                Flow::Continue
            }
            GameEvent::Resize => Flow::Continue,
            GameEvent::Key(key) => self.on_key(key),
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) -> Flow {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Flow::Quit;
        }

        match key.code {
            KeyCode::Esc => Flow::Quit,
            KeyCode::Char('q') if self.game.phase() != Phase::Running => Flow::Quit,
            KeyCode::Enter | KeyCode::Char(' ') => {
                let phase = self.game.press_action();
                debug!("action pressed, now {phase}");
                Flow::Continue
            }
            code => {
                if let KeyOutcome::Ignored = self.game.handle_key(code) {
                    debug!("ignored key {code:?}");
                }
                Flow::Continue
            }
        }
    }
}
