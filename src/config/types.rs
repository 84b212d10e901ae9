use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// 支援的檔案類型表（編譯時嵌入）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileTypeTable {
    #[serde(rename = "VIDEO_FILE")]
    pub video_file: Vec<String>,
}

impl FileTypeTable {
    #[must_use]
    pub fn video_extensions_set(&self) -> HashSet<String> {
        self.video_file
            .iter()
            .map(|ext| ext.to_lowercase())
            .collect()
    }

    /// 副檔名比對不分大小寫
    #[must_use]
    pub fn is_video_file(&self, path: &Path) -> bool {
        let video_extensions = self.video_extensions_set();
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| video_extensions.contains(&format!(".{}", ext.to_lowercase())))
    }
}

/// 使用者設定（`settings.json`，可省略）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserSettings {
    /// 要處理的資料夾，未設定時使用目前工作目錄
    #[serde(default)]
    pub target_directory: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub file_type_table: FileTypeTable,
    pub settings: UserSettings,
}

impl Config {
    #[must_use]
    pub fn target_directory(&self) -> PathBuf {
        self.settings
            .target_directory
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
