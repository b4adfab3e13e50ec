use std::cell::Cell;
use std::sync::mpsc::{self, Receiver, RecvError, RecvTimeoutError};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CtEvent, KeyEvent, KeyEventKind};

/// Unified event type consumed by the app runner
#[derive(Clone, Debug)]
pub enum GameEvent {
    Key(KeyEvent),
    Resize,
    Tick,
}

/// Source of terminal events (keyboard, resize, etc.)
pub trait EventSource: Send + 'static {
    /// Block until the next event arrives or the source disconnects.
    fn recv(&self) -> Result<GameEvent, RecvError>;
    /// Block for up to `timeout` waiting for an event.
    fn recv_timeout(&self, timeout: Duration) -> Result<GameEvent, RecvTimeoutError>;
}

/// Production event source using crossterm.
///
/// The reader thread is the global keyboard listener; it exits on the first
/// send after this source (and its receiver) is dropped.
pub struct CrosstermEventSource {
    rx: Receiver<GameEvent>,
}

impl CrosstermEventSource {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || loop {
            let evt = match event::read() {
                // release/repeat reports would double count presses
                Ok(CtEvent::Key(key)) if key.kind == KeyEventKind::Press => GameEvent::Key(key),
                Ok(CtEvent::Resize(_, _)) => GameEvent::Resize,
                Ok(_) => continue,
                Err(e) => {
                    log::error!("terminal event read failed: {e}");
                    break;
                }
            };
            if tx.send(evt).is_err() {
                break;
            }
        });

        Self { rx }
    }
}

impl Default for CrosstermEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSource for CrosstermEventSource {
    fn recv(&self) -> Result<GameEvent, RecvError> {
        self.rx.recv()
    }

    fn recv_timeout(&self, timeout: Duration) -> Result<GameEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Configurable ticker interface
pub trait Ticker: Send + Sync + 'static {
    fn interval(&self) -> Duration;
}

/// Fixed interval ticker
#[derive(Clone, Copy, Debug)]
pub struct FixedTicker {
    interval: Duration,
}

impl FixedTicker {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

impl Ticker for FixedTicker {
    fn interval(&self) -> Duration {
        self.interval
    }
}

/// Test event source for unit tests
pub struct TestEventSource {
    rx: Receiver<GameEvent>,
}

impl TestEventSource {
    pub fn new(rx: Receiver<GameEvent>) -> Self {
        Self { rx }
    }
}

impl EventSource for TestEventSource {
    fn recv(&self) -> Result<GameEvent, RecvError> {
        self.rx.recv()
    }

    fn recv_timeout(&self, timeout: Duration) -> Result<GameEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Runner that advances the application one event/tick at a time
pub struct Runner<E: EventSource, T: Ticker> {
    event_source: E,
    ticker: T,
    // next tick is due at this instant; unset while not ticking
    next_tick: Cell<Option<Instant>>,
}

impl<E: EventSource, T: Ticker> Runner<E, T> {
    pub fn new(event_source: E, ticker: T) -> Self {
        Self {
            event_source,
            ticker,
            next_tick: Cell::new(None),
        }
    }

    /// Returns the next event.
    ///
    /// While `ticking`, yields `Tick` once per interval even when input keeps
    /// arriving, and waits for input only until the next tick is due.
    /// Otherwise blocks for input. `None` once the source is gone.
    pub fn step(&self, ticking: bool) -> Option<GameEvent> {
        if !ticking {
            self.next_tick.set(None);
            return self.event_source.recv().ok();
        }

        let now = Instant::now();
        let due = self
            .next_tick
            .get()
            .unwrap_or_else(|| now + self.ticker.interval());
        if now >= due {
            self.next_tick.set(Some(now + self.ticker.interval()));
            return Some(GameEvent::Tick);
        }
        self.next_tick.set(Some(due));

        match self
            .event_source
            .recv_timeout(due.saturating_duration_since(now))
        {
            Ok(ev) => Some(ev),
            Err(RecvTimeoutError::Timeout) => {
                self.next_tick
                    .set(Some(Instant::now() + self.ticker.interval()));
                Some(GameEvent::Tick)
            }
            Err(RecvTimeoutError::Disconnected) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::sync::mpsc;

    #[test]
    fn step_returns_tick_on_timeout() {
        let (_tx, rx) = mpsc::channel();
        let es = TestEventSource::new(rx);
        let ticker = FixedTicker::new(Duration::from_millis(1));
        let runner = Runner::new(es, ticker);

        match runner.step(true) {
            Some(GameEvent::Tick) => {}
            other => panic!("expected Tick on timeout, got {other:?}"),
        }
    }

    #[test]
    fn step_passes_through_events() {
        let (tx, rx) = mpsc::channel();
        tx.send(GameEvent::Resize).unwrap();
        let es = TestEventSource::new(rx);
        let ticker = FixedTicker::new(Duration::from_millis(10));
        let runner = Runner::new(es, ticker);

        match runner.step(true) {
            Some(GameEvent::Resize) => {}
            other => panic!("expected Resize event, got {other:?}"),
        }
    }

    #[test]
    fn step_without_ticking_waits_for_input() {
        let (tx, rx) = mpsc::channel();
        let es = TestEventSource::new(rx);
        let runner = Runner::new(es, FixedTicker::new(Duration::from_millis(1)));

        std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(20));
            tx.send(GameEvent::Key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)))
                .unwrap();
        });

        match runner.step(false) {
            Some(GameEvent::Key(key)) => assert_eq!(key.code, KeyCode::Up),
            other => panic!("expected a key event, got {other:?}"),
        }
    }

    #[test]
    fn step_ticks_when_due_despite_queued_input() {
        let (tx, rx) = mpsc::channel();
        for _ in 0..50 {
            tx.send(GameEvent::Key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)))
                .unwrap();
        }
        let runner = Runner::new(
            TestEventSource::new(rx),
            FixedTicker::new(Duration::from_millis(20)),
        );

        // deadline not reached yet: queued input comes first
        assert!(matches!(runner.step(true), Some(GameEvent::Key(_))));
        std::thread::sleep(Duration::from_millis(30));
        // deadline passed: the tick wins over the backlog
        assert!(matches!(runner.step(true), Some(GameEvent::Tick)));
        assert!(matches!(runner.step(true), Some(GameEvent::Key(_))));
    }

    #[test]
    fn step_keeps_ticking_under_fast_input() {
        let (tx, rx) = mpsc::channel();
        let runner = Runner::new(
            TestEventSource::new(rx),
            FixedTicker::new(Duration::from_millis(30)),
        );

        // a key every 5 ms, well under the tick interval
        let sender = std::thread::spawn(move || {
            for _ in 0..60 {
                if tx
                    .send(GameEvent::Key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)))
                    .is_err()
                {
                    break;
                }
                std::thread::sleep(Duration::from_millis(5));
            }
        });

        let started = Instant::now();
        let mut ticks = 0;
        while started.elapsed() < Duration::from_millis(250) {
            if let Some(GameEvent::Tick) = runner.step(true) {
                ticks += 1;
            }
        }
        sender.join().unwrap();

        assert!(ticks >= 4, "expected steady ticks under input, got {ticks}");
    }

    #[test]
    fn step_reports_disconnect() {
        let (tx, rx) = mpsc::channel::<GameEvent>();
        drop(tx);
        let runner = Runner::new(
            TestEventSource::new(rx),
            FixedTicker::new(Duration::from_millis(1)),
        );
        assert!(runner.step(false).is_none());
        assert!(runner.step(true).is_none());
    }
}
