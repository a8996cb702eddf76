/// Format integer milliseconds as an abbreviated human-readable duration
/// ("834ms", "1.2s", "2m 5s", "1h 4m").
pub fn format_duration_ms(ms: i64) -> String {
    if ms < 1_000 {
        return format!("{}ms", ms);
    }

    if ms < 60_000 {
        // Round to tenths first so 59.999s promotes to the minute unit
        // instead of printing "60s".
        let tenths = (ms as f64 / 100.0).round() as i64;
        if tenths >= 600 {
            return "1m".to_string();
        }
        if tenths % 10 == 0 {
            return format!("{}s", tenths / 10);
        }
        return format!("{}.{}s", tenths / 10, tenths % 10);
    }

    let total_seconds = ms / 1_000;
    let minutes = total_seconds / 60;
    let remaining_secs = total_seconds % 60;
    if minutes < 60 {
        if remaining_secs == 0 {
            return format!("{}m", minutes);
        }
        return format!("{}m {}s", minutes, remaining_secs);
    }

    let hours = minutes / 60;
    let remaining_mins = minutes % 60;
    if remaining_mins == 0 {
        format!("{}h", hours)
    } else {
        format!("{}h {}m", hours, remaining_mins)
    }
}
