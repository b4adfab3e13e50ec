use crate::challenge::ChallengeSequence;
use crate::util::accuracy_percent;
use std::fmt;

pub const WRONG_ARROW_MESSAGE: &str = "Wrong arrow!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Completed,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Idle => "idle",
            Phase::Running => "running",
            Phase::Completed => "completed",
        };
        f.write_str(name)
    }
}

/// How a slot of the challenge row should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    Pending,
    Current,
    Correct,
    Wrong,
}

/// Label of the single action button
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum ActionLabel {
    #[strum(serialize = "Start Game")]
    StartGame,
    Cancel,
    Restart,
}

impl From<Phase> for ActionLabel {
    fn from(phase: Phase) -> Self {
        match phase {
            Phase::Idle => ActionLabel::StartGame,
            Phase::Running => ActionLabel::Cancel,
            Phase::Completed => ActionLabel::Restart,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SessionState {
    pub sequence: ChallengeSequence,
    pub position: usize,
    pub total_presses: u32,
    pub correct_presses: u32,
    pub elapsed_secs: f64,
    pub accuracy: f64,
    pub error: Option<&'static str>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            sequence: ChallengeSequence::default(),
            position: 0,
            total_presses: 0,
            correct_presses: 0,
            elapsed_secs: 0.0,
            accuracy: 100.0,
            error: None,
        }
    }
}

impl SessionState {
    pub fn with_sequence(sequence: ChallengeSequence) -> Self {
        Self {
            sequence,
            ..Self::default()
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.sequence.is_empty() && self.position == self.sequence.len()
    }

    pub fn refresh_accuracy(&mut self) {
        self.accuracy = accuracy_percent(self.correct_presses, self.total_presses);
    }

    pub fn slot_state(&self, idx: usize) -> SlotState {
        slot_state(idx, self.position, self.error.is_some())
    }

    pub fn slot_states(&self) -> Vec<SlotState> {
        (0..self.sequence.len()).map(|i| self.slot_state(i)).collect()
    }
}

/// Slot visuals depend only on where the slot sits relative to the cursor
pub fn slot_state(idx: usize, position: usize, has_error: bool) -> SlotState {
    match idx.cmp(&position) {
        std::cmp::Ordering::Less => SlotState::Correct,
        std::cmp::Ordering::Equal if has_error => SlotState::Wrong,
        std::cmp::Ordering::Equal => SlotState::Current,
        std::cmp::Ordering::Greater => SlotState::Pending,
    }
}
