use std::time::Duration;

/// Formats seconds as `m:ss`. Minutes are not padded; seconds always are.
/// Negative and non-finite input is shown as `0:00`.
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}

pub fn format_duration(duration: Duration) -> String {
    format_time(duration.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_padded_seconds() {
        assert_eq!(format_time(75.0), "1:15");
        assert_eq!(format_time(5.0), "0:05");
        assert_eq!(format_time(600.0), "10:00");
        assert_eq!(format_time(59.99), "0:59");
    }

    #[test]
    fn garbage_input_is_zero() {
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(-3.0), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
    }

    #[test]
    fn durations_truncate_fractions() {
        assert_eq!(format_duration(Duration::from_millis(61_900)), "1:01");
    }
}
