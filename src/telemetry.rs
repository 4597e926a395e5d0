//! 日誌初始化

use tracing_subscriber::EnvFilter;

use crate::settings::{LogFormat, LoggingSettings};

/// 安裝全域 tracing subscriber
///
/// `RUST_LOG` 存在時優先於設定檔的層級。重複呼叫時保留既有的 subscriber，
/// 回傳 false。
pub fn init_tracing(settings: &LoggingSettings) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let result = match settings.format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().flatten_event(true).try_init(),
    };

    match result {
        Ok(()) => {
            tracing::debug!("日誌已初始化: 層級 {}，格式 {:?}", settings.level, settings.format);
            true
        }
        Err(err) => {
            tracing::debug!("日誌 subscriber 已存在，略過初始化: {}", err);
            false
        }
    }
}
