use crossterm::event::KeyCode;

/// One of the four directional symbols a challenge is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum Arrow {
    #[strum(serialize = "↑")]
    Up,
    #[strum(serialize = "↓")]
    Down,
    #[strum(serialize = "←")]
    Left,
    #[strum(serialize = "→")]
    Right,
}

impl Arrow {
    pub const ALL: [Arrow; 4] = [Arrow::Up, Arrow::Down, Arrow::Left, Arrow::Right];

    /// Maps a terminal key to an arrow. Anything but the four arrow keys is `None`.
    pub fn from_key_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Up => Some(Arrow::Up),
            KeyCode::Down => Some(Arrow::Down),
            KeyCode::Left => Some(Arrow::Left),
            KeyCode::Right => Some(Arrow::Right),
            _ => None,
        }
    }
}
