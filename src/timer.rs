use chrono::TimeDelta;

pub fn format_elapsed(elapsed: TimeDelta) -> String {
    let total_secs = elapsed.num_seconds();
    if total_secs <= 0 {
        return "0s".to_string();
    }
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    if hours > 0 {
        format!("{}h {:02}m {:02}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {:02}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(TimeDelta::zero()), "0s");
        assert_eq!(format_elapsed(TimeDelta::seconds(-4)), "0s");
        assert_eq!(format_elapsed(TimeDelta::seconds(42)), "42s");
        assert_eq!(format_elapsed(TimeDelta::seconds(65)), "1m 05s");
        assert_eq!(format_elapsed(TimeDelta::seconds(3723)), "1h 02m 03s");
    }
}
