use std::path::{Path, PathBuf};
use thiserror::Error;
use crate::error::Result;
use crate::models::conversion::ConversionResult;
use crate::models::resource::{IntermediateForm, ResourceType, UnlockedResource, WorkItem};

/// 格式轉接器在邊界上回報的兩種失敗，底層函式庫的細節不外洩
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    #[error("unable to read the resource container")]
    Unreadable,
    #[error("unable to pack the intermediate form")]
    Unpackable,
}

// 格式轉接器接口，每種資源類型一個實作，彼此不共享狀態
pub trait FormatAdapter: Send + Sync {
    /// 此轉接器負責的資源類型
    fn resource_type(&self) -> ResourceType;

    /// 將二進位容器解碼為文字中間格式
    /// # 參數
    /// - data: 原始檔案內容
    /// # 回傳
    /// - 成功時返回中間格式，任何解析失敗皆為 `FormatError::Unreadable`
    fn decode(&self, data: &[u8]) -> std::result::Result<IntermediateForm, FormatError>;

    /// 將中間格式重新封裝為二進位容器
    /// # 參數
    /// - form: 未經修改的中間格式
    /// # 回傳
    /// - 成功時返回二進位內容，缺少頂層物件時為 `FormatError::Unpackable`
    fn encode(&self, form: &IntermediateForm) -> std::result::Result<Vec<u8>, FormatError>;
}

// File 服務接口，負責檔案搜尋與讀寫
pub trait FileServiceTrait: Send + Sync {
    /// 遞迴收集目錄下所有可辨識副檔名的檔案
    fn collect_files(&self, dir: &Path) -> Result<Vec<PathBuf>>;

    /// 讀取來源檔案的完整內容
    fn read_source(&self, path: &Path) -> std::io::Result<Vec<u8>>;

    /// 依覆寫規則寫入目的地，失敗時不留下殘缺檔案
    /// # 參數
    /// - destination: 目的地檔案
    /// - data: 要寫入的內容
    /// - override_existing: 目的地已存在時是否取代
    fn write_output(&self, destination: &Path, data: &UnlockedResource, override_existing: bool) -> Result<()>;
}

// 解鎖服務接口，負責單一檔案的解碼、封裝與寫入
pub trait UnlockServiceTrait: Send + Sync {
    /// 解碼並重新封裝，不寫入磁碟
    fn convert(&self, item: &WorkItem) -> ConversionResult;

    /// 完整處理一個工作項目，成功時返回寫入的路徑
    fn unlock(&self, item: &WorkItem) -> Result<PathBuf>;
}
