//! 影片時長探測模組
//!
//! 透過 ffprobe 取得影片容器的時長（秒）

use anyhow::{Context, Result, bail};
use std::path::Path;
use std::process::Command;

/// 時長探測介面，測試時可注入假實作
pub trait DurationProber {
    /// 取得影片時長（秒）
    fn probe_duration(&self, path: &Path) -> Result<f64>;
}

/// 使用 ffprobe 子行程的正式實作
pub struct FfprobeDurationProber;

impl DurationProber for FfprobeDurationProber {
    fn probe_duration(&self, path: &Path) -> Result<f64> {
        let output = Command::new("ffprobe")
            .args([
                "-v",
                "error",
                "-show_entries",
                "format=duration",
                "-of",
                "default=noprint_wrappers=1:nokey=1",
            ])
            .arg(path)
            .output()
            .with_context(|| format!("無法執行 ffprobe: {}", path.display()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("ffprobe 執行失敗: {}", stderr.trim());
        }

        parse_duration_output(&String::from_utf8_lossy(&output.stdout))
    }
}

/// 解析 ffprobe 輸出的時長（例如 "125.433000"）
fn parse_duration_output(stdout: &str) -> Result<f64> {
    let trimmed = stdout.trim();
    let duration: f64 = trimmed
        .parse()
        .with_context(|| format!("無法解析 ffprobe 輸出的時長: {trimmed:?}"))?;

    if !duration.is_finite() || duration < 0.0 {
        bail!("ffprobe 回報的時長無效: {duration}");
    }

    Ok(duration)
}
