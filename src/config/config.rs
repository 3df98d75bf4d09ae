use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Clone, Debug)]
#[command(
    name = "model_unlocker",
    about = "Unlock yft/ydr/ydd resource files so they can be edited",
    long_about = "Converts each yft/ydr/ydd resource file to its intermediate XML form and packs it back, which clears the lock flag.\nInput may be a single file or a folder; folders are searched recursively.\nWithout --output the files are converted in place.",
    arg_required_else_help = true
)]
pub struct Cli {
    /// The resource file or folder of resource files to unlock
    #[arg(short, long)]
    pub input: String,
    /// The output folder (or target file for a single input)
    #[arg(short, long)]
    pub output: Option<String>,
    /// Log level, 0: Debug, 1: Info, 2: Warning, 3: Error
    #[arg(short = 'l', long = "loglevel", default_value_t = 1, allow_negative_numbers = true)]
    pub log_level: i64,
    /// Override existing files, always enabled when no output is given
    #[arg(short = 'r', long = "override", default_value_t = false)]
    pub override_existing: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum LogLevel {
    Debug = 0,
    Info = 1,
    Warning = 2,
    Error = 3,
}

impl LogLevel {
    /// 超出 0-3 的數值回傳 None，由呼叫端保留預設值
    pub fn from_raw(value: i64) -> Option<Self> {
        match value {
            0 => Some(LogLevel::Debug),
            1 => Some(LogLevel::Info),
            2 => Some(LogLevel::Warning),
            3 => Some(LogLevel::Error),
            _ => None,
        }
    }

    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warning => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl Cli {
    pub fn effective_log_level(&self) -> LogLevel {
        LogLevel::from_raw(self.log_level).unwrap_or_default()
    }

    pub fn output_path(&self) -> Option<PathBuf> {
        self.output.as_deref().map(PathBuf::from)
    }
}
