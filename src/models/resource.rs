use std::fmt;
use std::path::{Path, PathBuf};

/// 支援的資源容器類型，以副檔名一對一對應
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceType {
    Yft,
    Ydr,
    Ydd,
}

impl ResourceType {
    pub const ALL: [ResourceType; 3] = [ResourceType::Yft, ResourceType::Ydr, ResourceType::Ydd];

    /// 依副檔名（不含點，不分大小寫）取得類型
    pub fn from_extension(ext: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.extension().eq_ignore_ascii_case(ext))
    }

    /// 依檔案路徑的副檔名取得類型
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ResourceType::Yft => "yft",
            ResourceType::Ydr => "ydr",
            ResourceType::Ydd => "ydd",
        }
    }

    /// 中間格式中承載資料的頂層元素名稱
    pub fn root_element(&self) -> &'static str {
        match self {
            ResourceType::Yft => "Fragment",
            ResourceType::Ydr => "Drawable",
            ResourceType::Ydd => "DrawableDictionary",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// 單一檔案的轉換任務，建立後不再變動
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub source_path: PathBuf,
    pub resource_type: ResourceType,
    pub destination_path: PathBuf,
    pub override_existing: bool,
}

/// 解碼後的文字中間格式，原封不動交給編碼器
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntermediateForm(String);

impl IntermediateForm {
    pub fn new(text: String) -> Self {
        IntermediateForm(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

/// 重新封裝後的二進位內容，保證非空
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnlockedResource(Vec<u8>);

impl UnlockedResource {
    pub fn new(bytes: Vec<u8>) -> Option<Self> {
        if bytes.is_empty() {
            None
        } else {
            Some(UnlockedResource(bytes))
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}
