//! 檔名清理模組
//!
//! 負責移除檔名中既有的方括號標籤，並組出附加時長標籤後的新檔名

use regex::Regex;
use std::sync::LazyLock;

static REGEX_BRACKET_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[.*?\]").expect("Invalid regex"));

/// 檔名清理器
pub struct FilenameCleaner {
    regex_bracket_tag: &'static Regex,
}

impl Default for FilenameCleaner {
    fn default() -> Self {
        Self::new()
    }
}

impl FilenameCleaner {
    #[must_use]
    pub fn new() -> Self {
        Self {
            regex_bracket_tag: &REGEX_BRACKET_TAG,
        }
    }

    /// 清理檔名主幹
    ///
    /// 移除所有 `[...]` 區段（非貪婪，可出現多次），再修剪前後的空白與底線
    ///
    /// # Arguments
    /// * `stem` - 原始檔名主幹（不含副檔名）
    #[must_use]
    pub fn clean(&self, stem: &str) -> String {
        let without_tags = self.regex_bracket_tag.replace_all(stem, "");
        without_tags
            .trim_matches(|c| c == ' ' || c == '_')
            .to_string()
    }

    /// 產生附加時長標籤後的新檔名
    ///
    /// # Arguments
    /// * `cleaned_stem` - 清理後的檔名主幹
    /// * `tag` - 時長標籤（例如 `[3m]`）
    /// * `extension` - 原始副檔名（不含前導點，保留原大小寫）
    #[must_use]
    pub fn format_new_filename(&self, cleaned_stem: &str, tag: &str, extension: &str) -> String {
        if extension.is_empty() {
            format!("{cleaned_stem}_{tag}")
        } else {
            format!("{cleaned_stem}_{tag}.{extension}")
        }
    }
}
