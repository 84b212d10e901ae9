mod ffprobe_info;
mod video_scanner;

pub use ffprobe_info::{DurationProber, FfprobeDurationProber};
pub use video_scanner::scan_video_files;
