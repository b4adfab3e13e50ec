/// Live accuracy in percent.
///
/// Both counts carry a phantom extra press, so a fresh session reads 100%
/// and a first miss reads 50% rather than 0%. Kept as-is for parity with
/// existing leaderboards.
pub fn accuracy_percent(correct: u32, total: u32) -> f64 {
    (f64::from(correct) + 1.0) / (f64::from(total) + 1.0) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_accuracy_before_any_press() {
        assert_eq!(accuracy_percent(0, 0), 100.0);
    }

    #[test]
    fn test_accuracy_one_of_two() {
        assert!(approx(accuracy_percent(1, 2), 200.0 / 3.0));
        assert_eq!(format!("{:.2}", accuracy_percent(1, 2)), "66.67");
    }

    #[test]
    fn test_accuracy_first_miss() {
        assert_eq!(accuracy_percent(0, 1), 50.0);
    }

    #[test]
    fn test_accuracy_flawless() {
        assert_eq!(accuracy_percent(10, 10), 100.0);
    }

    #[test]
    fn test_accuracy_matches_formula() {
        for total in 0..20u32 {
            for correct in 0..=total {
                let expected = (correct as f64 + 1.0) / (total as f64 + 1.0) * 100.0;
                assert!(approx(accuracy_percent(correct, total), expected));
                assert!(accuracy_percent(correct, total) <= 100.0);
                assert!(accuracy_percent(correct, total) > 0.0);
            }
        }
    }
}
