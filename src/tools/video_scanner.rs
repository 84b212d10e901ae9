//! 影片檔案掃描模組
//!
//! 列舉目標資料夾（不含子資料夾）中的影片檔案

use crate::config::FileTypeTable;
use anyhow::{Result, bail};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 掃描資料夾中的影片檔案，依檔名排序
pub fn scan_video_files(directory: &Path, file_type_table: &FileTypeTable) -> Result<Vec<PathBuf>> {
    if !directory.is_dir() {
        bail!("路徑不存在或不是資料夾: {}", directory.display());
    }

    let mut video_files: Vec<PathBuf> = WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| file_type_table.is_video_file(entry.path()))
        .map(walkdir::DirEntry::into_path)
        .collect();

    video_files.sort();
    Ok(video_files)
}
