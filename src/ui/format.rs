/// Seconds with two decimals, as shown by the timer and leaderboard
pub fn format_secs(secs: f64) -> String {
    format!("{secs:.2}s")
}

/// Percentage with two decimals
pub fn format_percent(val: f64) -> String {
    format!("{val:.2}%")
}

pub fn leaderboard_line(rank: usize, time_secs: f64, accuracy: f64) -> String {
    format!(
        "#{rank:<3} Time: {}  Accuracy: {}",
        format_secs(time_secs),
        format_percent(accuracy)
    )
}
