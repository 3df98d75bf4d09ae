use std::path::PathBuf;

use crate::error::UnlockError;
use crate::models::resource::UnlockedResource;

/// 單一檔案的轉換結果：成功必有非空內容，失敗則無內容
pub type ConversionResult = Result<UnlockedResource, UnlockError>;

#[derive(Debug, Clone)]
pub struct UnlockInput {
    pub input_path: PathBuf,
    pub output_path: Option<PathBuf>,
    pub override_existing: bool,
}

/// 執行模式，由輸入路徑決定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    SingleFile,
    Directory,
}
