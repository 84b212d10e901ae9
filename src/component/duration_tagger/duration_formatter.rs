//! 時長格式化模組
//!
//! 將秒數轉換成 `[XhYm]` / `[Ym]` 形式的標籤，分鐘數向上取整

/// 格式化時長標籤
///
/// # Arguments
/// * `seconds` - 時長（秒），須為非負有限值
///
/// # Returns
/// `[XhYm]` 或 `[Ym]` 形式的標籤字串
#[must_use]
pub fn format_duration(seconds: f64) -> String {
    let total_minutes = (seconds / 60.0).ceil() as u64;
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours > 0 {
        format!("[{hours}h{minutes}m]")
    } else {
        format!("[{minutes}m]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_rounds_up_to_minute() {
        assert_eq!(format_duration(59.0), "[1m]");
        assert_eq!(format_duration(60.0), "[1m]");
        assert_eq!(format_duration(61.0), "[2m]");
        assert_eq!(format_duration(125.4), "[3m]");
    }

    #[test]
    fn test_format_duration_hours() {
        assert_eq!(format_duration(3600.0), "[1h0m]");
        assert_eq!(format_duration(3661.0), "[1h2m]");
        assert_eq!(format_duration(7200.0), "[2h0m]");
    }

    #[test]
    fn test_format_duration_zero() {
        assert_eq!(format_duration(0.0), "[0m]");
    }

    #[test]
    fn test_format_duration_is_pure() {
        assert_eq!(format_duration(125.4), format_duration(125.4));
    }

    #[test]
    fn test_format_duration_minute_invariant() {
        // 60*h + m == ceil(d/60) 且 0 <= m < 60
        for d in [0.0, 1.0, 59.9, 60.0, 61.0, 599.5, 3599.0, 3600.0, 86400.0] {
            let tag = format_duration(d);
            let inner = tag.trim_start_matches('[').trim_end_matches(']');
            let (h, m) = match inner.split_once('h') {
                Some((h, rest)) => (
                    h.parse::<u64>().unwrap(),
                    rest.trim_end_matches('m').parse::<u64>().unwrap(),
                ),
                None => (0, inner.trim_end_matches('m').parse::<u64>().unwrap()),
            };
            assert!(m < 60, "分鐘數應小於 60: {tag}");
            assert_eq!(60 * h + m, (d / 60.0).ceil() as u64, "標籤不一致: {tag}");
        }
    }
}
