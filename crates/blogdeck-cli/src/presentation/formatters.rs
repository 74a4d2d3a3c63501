//! Small text helpers shared by console views and TUI widgets.

/// Truncate to `max` characters, marking the cut with "...".
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let keep = max.saturating_sub(3);
    let head: String = s.chars().take(keep).collect();
    format!("{}...", head)
}

/// `YYYY-MM-DD` part of an ISO timestamp
pub fn date_part(ts: Option<&str>) -> &str {
    match ts {
        Some(ts) => ts.get(..10).unwrap_or(ts),
        None => "-",
    }
}

/// ASCII progress bar, e.g. `[#####...............]`
pub fn bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(width - filled))
}

pub fn status_label(published: bool) -> &'static str {
    if published { "published" } else { "draft" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("héllo wörld", 8), "héllo...");
        assert_eq!(truncate("short", 8), "short");
    }

    #[test]
    fn test_bar() {
        assert_eq!(bar(50.0, 10), "[#####.....]");
        assert_eq!(bar(250.0, 4), "[####]");
        assert_eq!(bar(0.0, 4), "[....]");
    }

    #[test]
    fn test_date_part() {
        assert_eq!(date_part(Some("2024-05-01T10:00:00")), "2024-05-01");
        assert_eq!(date_part(None), "-");
    }
}
