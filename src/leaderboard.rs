/// Summary of one completed session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeaderboardEntry {
    pub time_secs: f64,
    pub accuracy: f64,
}

impl LeaderboardEntry {
    pub fn new(time_secs: f64, accuracy: f64) -> Self {
        Self {
            time_secs,
            accuracy,
        }
    }
}

/// Append-only list of completed runs, oldest first. Lives for the process only.
#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: LeaderboardEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &LeaderboardEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the quickest run; the earlier run wins a tie
    pub fn fastest(&self) -> Option<usize> {
        self.entries
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, f64)>, (idx, entry)| match best {
                Some((_, t)) if t <= entry.time_secs => best,
                _ => Some((idx, entry.time_secs)),
            })
            .map(|(idx, _)| idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_insertion_order() {
        let mut board = Leaderboard::new();
        board.push(LeaderboardEntry::new(3.0, 90.0));
        board.push(LeaderboardEntry::new(1.5, 100.0));
        board.push(LeaderboardEntry::new(2.0, 80.0));

        let times: Vec<f64> = board.iter().map(|e| e.time_secs).collect();
        assert_eq!(times, vec![3.0, 1.5, 2.0]);
        assert_eq!(board.len(), 3);
    }

    #[test]
    fn test_fastest_empty() {
        assert_eq!(Leaderboard::new().fastest(), None);
    }

    #[test]
    fn test_fastest_picks_lowest_time() {
        let mut board = Leaderboard::new();
        board.push(LeaderboardEntry::new(3.0, 90.0));
        board.push(LeaderboardEntry::new(1.5, 100.0));
        board.push(LeaderboardEntry::new(2.0, 80.0));
        assert_eq!(board.fastest(), Some(1));
    }

    #[test]
    fn test_fastest_tie_prefers_earlier() {
        let mut board = Leaderboard::new();
        board.push(LeaderboardEntry::new(2.0, 90.0));
        board.push(LeaderboardEntry::new(2.0, 100.0));
        assert_eq!(board.fastest(), Some(0));
    }
}
