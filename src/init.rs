//! 程式初始化
//!
//! 負責日誌系統與中斷信號的設定

use env_logger::Env;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 初始化日誌系統（預設等級 warn，可用 `RUST_LOG` 覆寫）
pub fn init_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
}

/// 設定 Ctrl-C 中斷信號，回傳可跨執行緒查詢的旗標
#[must_use]
pub fn setup_shutdown_signal() -> Arc<AtomicBool> {
    let shutdown_signal = Arc::new(AtomicBool::new(false));
    let signal_clone = Arc::clone(&shutdown_signal);

    ctrlc::set_handler(move || {
        signal_clone.store(true, Ordering::SeqCst);
        eprintln!("\n收到中斷信號，將在目前檔案處理完後停止...");
    })
    .expect("無法設定 Ctrl-C 處理器");

    shutdown_signal
}
