use std::io::{self, Write};
use chrono::{DateTime, Local};
use log::Level;
use crate::config::config::LogLevel;

/// 日誌等級在輸出行中的名稱
pub fn level_label(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARNING",
        Level::Info => "INFO",
        Level::Debug | Level::Trace => "DEBUG",
    }
}

/// 組出 `[HH:mm:ss][LEVEL] message` 格式的單行日誌
pub fn format_line(time: &DateTime<Local>, level: Level, message: &str) -> String {
    format!("[{}][{}] {}", time.format("%H:%M:%S"), level_label(level), message)
}

/// 依設定的等級建立 logger；INFO 不上色，其餘沿用 env_logger 的等級配色
pub fn logging_builder(log_level: LogLevel) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(log_level.to_level_filter())
        .target(env_logger::Target::Stdout)
        .format(|buf, record| {
            let line = format_line(&Local::now(), record.level(), &record.args().to_string());
            if record.level() == Level::Info {
                writeln!(buf, "{}", line)
            } else {
                let style = buf.default_level_style(record.level());
                writeln!(buf, "{}{}{}", style.render(), line, style.render_reset())
            }
        });
    builder
}

pub fn setup_logging(log_level: LogLevel) -> io::Result<()> {
    logging_builder(log_level)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("無法初始化日誌：{}", e)))
}
