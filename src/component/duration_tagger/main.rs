//! 影片時長標記主模組
//!
//! 協調掃描、時長探測、檔名清理與重新命名的整體流程

use super::duration_formatter::format_duration;
use super::filename_cleaner::FilenameCleaner;
use crate::config::Config;
use crate::tools::{DurationProber, FfprobeDurationProber, scan_video_files};
use anyhow::Result;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 單一檔案的可恢復錯誤，任一種都不會中斷整批處理
#[derive(Debug)]
pub enum EntryError {
    /// 無法取得影片時長
    Probe(String),
    /// 重新命名被檔案系統拒絕
    Rename(String),
}

impl fmt::Display for EntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Probe(detail) | Self::Rename(detail) => write!(f, "{detail}"),
        }
    }
}

/// 重新命名結果統計
#[derive(Debug, Default)]
pub struct RenameResult {
    pub success_count: usize,
    pub probe_error_count: usize,
    pub rename_error_count: usize,
}

/// 影片時長標記器
pub struct DurationTagger {
    config: Config,
    shutdown_signal: Arc<AtomicBool>,
    prober: Box<dyn DurationProber>,
    filename_cleaner: FilenameCleaner,
}

impl DurationTagger {
    #[must_use]
    pub fn new(config: Config, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self::with_prober(config, shutdown_signal, Box::new(FfprobeDurationProber))
    }

    /// 指定時長探測實作（測試用）
    #[must_use]
    pub fn with_prober(
        config: Config,
        shutdown_signal: Arc<AtomicBool>,
        prober: Box<dyn DurationProber>,
    ) -> Self {
        Self {
            config,
            shutdown_signal,
            prober,
            filename_cleaner: FilenameCleaner::new(),
        }
    }

    /// 執行整批處理，單一檔案失敗不會讓整體回傳錯誤
    pub fn run(&self) -> Result<RenameResult> {
        println!("{}", style("=== 影片時長標記重新命名 ===").cyan().bold());

        let directory = self.config.target_directory();

        println!("{}", style("掃描影片檔案中...").dim());
        let video_files = scan_video_files(&directory, &self.config.file_type_table)?;

        if video_files.is_empty() {
            println!("{}", style("找不到任何影片檔案").yellow());
            return Ok(RenameResult::default());
        }

        println!(
            "{}",
            style(format!("找到 {} 個影片檔案", video_files.len())).green()
        );

        let result = self.execute_rename(&video_files);
        self.display_summary(&result);

        Ok(result)
    }

    fn execute_rename(&self, video_files: &[std::path::PathBuf]) -> RenameResult {
        let mut result = RenameResult::default();

        let progress_bar = ProgressBar::new(video_files.len() as u64);
        progress_bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
                .expect("Invalid progress bar template")
                .progress_chars("#>-"),
        );
        progress_bar.set_message("處理中...");

        for path in video_files {
            if self.shutdown_signal.load(Ordering::SeqCst) {
                progress_bar.abandon_with_message("操作已中斷");
                break;
            }

            let old_name = path.file_name().unwrap_or_default().to_string_lossy();

            match self.process_entry(path) {
                Ok(new_name) => {
                    progress_bar.println(format!("Renamed: {old_name} -> {new_name}"));
                    info!("Renamed {} -> {new_name}", path.display());
                    result.success_count += 1;
                }
                Err(EntryError::Probe(detail)) => {
                    progress_bar
                        .println(format!("Error getting duration for {}: {detail}", path.display()));
                    warn!("Probe failed for {}: {detail}", path.display());
                    result.probe_error_count += 1;
                }
                Err(EntryError::Rename(detail)) => {
                    progress_bar.println(format!("Error renaming {}: {detail}", path.display()));
                    warn!("Rename failed for {}: {detail}", path.display());
                    result.rename_error_count += 1;
                }
            }

            progress_bar.inc(1);
        }

        if !progress_bar.is_finished() {
            progress_bar.finish_with_message("完成");
        }

        result
    }

    /// 處理單一檔案：探測時長 → 格式化標籤 → 清理檔名 → 重新命名
    fn process_entry(&self, path: &Path) -> Result<String, EntryError> {
        let duration = self
            .prober
            .probe_duration(path)
            .map_err(|e| EntryError::Probe(format!("{e:#}")))?;

        let tag = format_duration(duration);
        let stem = path.file_stem().unwrap_or_default().to_string_lossy();
        let extension = path.extension().unwrap_or_default().to_string_lossy();

        let cleaned_stem = self.filename_cleaner.clean(&stem);
        let new_name = self
            .filename_cleaner
            .format_new_filename(&cleaned_stem, &tag, &extension);

        let new_path = path.parent().unwrap_or(Path::new(".")).join(&new_name);

        // 改名為自身（重複執行時）允許；目標已被其他檔案佔用則視為改名失敗
        if new_path != *path && new_path.exists() {
            return Err(EntryError::Rename(format!(
                "target already exists: {}",
                new_path.display()
            )));
        }

        fs::rename(path, &new_path).map_err(|e| EntryError::Rename(e.to_string()))?;

        Ok(new_name)
    }

    fn display_summary(&self, result: &RenameResult) {
        println!();
        println!("{}", style("=== 重新命名結果 ===").cyan().bold());
        println!("  成功: {} 個", style(result.success_count).green());
        if result.probe_error_count > 0 {
            println!(
                "  無法取得時長: {} 個",
                style(result.probe_error_count).yellow()
            );
        }
        if result.rename_error_count > 0 {
            println!("  失敗: {} 個", style(result.rename_error_count).red());
        }
    }
}
