use std::time::Duration;

/// Format an elapsed round time as `MM:SS`, or `HH:MM:SS` past the hour.
///
/// ```
/// use std::time::Duration;
/// use tui_minesweeper_term::format_elapsed;
///
/// assert_eq!(format_elapsed(Duration::from_secs(75)), "01:15");
/// assert_eq!(format_elapsed(Duration::from_secs(3_725)), "01:02:05");
/// ```
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    let (hours, minutes, seconds) = (total / 3600, (total / 60) % 60, total % 60);
    if hours > 0 {
        format!("{hours:02}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes:02}:{seconds:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_second_rounds_down() {
        assert_eq!(format_elapsed(Duration::from_millis(999)), "00:00");
    }

    #[test]
    fn minutes_wrap_past_the_hour() {
        assert_eq!(format_elapsed(Duration::from_secs(2 * 3600 + 59 * 60 + 1)), "02:59:01");
    }
}
