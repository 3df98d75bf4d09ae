use std::io;
use std::path::PathBuf;
use crate::config::config::LogLevel;

// 應用配置結構體，封裝所有參數
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub log_level: LogLevel,
    pub override_existing: bool,
}

// 配置來源的 Port
pub trait ConfigPort {
    fn get_config(&self) -> io::Result<AppConfig>;
}
