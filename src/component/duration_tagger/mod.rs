//! 影片時長標記重新命名元件
//!
//! 探測影片時長後，將格式化的時長標籤附加到清理過的檔名上

mod duration_formatter;
mod filename_cleaner;
mod main;

pub use duration_formatter::format_duration;
pub use filename_cleaner::FilenameCleaner;
pub use main::{DurationTagger, EntryError, RenameResult};
