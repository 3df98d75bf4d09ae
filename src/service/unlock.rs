use std::path::PathBuf;
use log::debug;
use crate::error::{Result, UnlockError};
use crate::models::conversion::ConversionResult;
use crate::models::resource::{UnlockedResource, WorkItem};
use crate::service::format::AdapterRegistry;
use crate::service::traits::i_service::{FileServiceTrait, UnlockServiceTrait};

/// 解鎖服務：解碼 → 原樣交給編碼器 → 檢查結果 → 寫入
///
/// 解鎖完全來自編碼器重新封裝的行為，中間格式在兩步之間不做任何修改。
/// 任一步失敗即結束此檔案，不重試。
pub struct UnlockService {
    adapters: AdapterRegistry,
    file_service: Box<dyn FileServiceTrait>,
}

impl UnlockService {
    pub fn new(adapters: AdapterRegistry, file_service: Box<dyn FileServiceTrait>) -> Self {
        UnlockService { adapters, file_service }
    }
}

impl UnlockServiceTrait for UnlockService {
    fn convert(&self, item: &WorkItem) -> ConversionResult {
        let kind = item.resource_type;
        let source = &item.source_path;
        let unreadable = || UnlockError::Unreadable { path: source.clone(), kind };

        let adapter = self
            .adapters
            .get(kind)
            .ok_or_else(|| UnlockError::UnknownFileType(source.clone()))?;

        let data = self.file_service.read_source(source).map_err(|e| {
            debug!("Read failed for {}: {}", source.display(), e);
            unreadable()
        })?;

        let form = adapter.decode(&data).map_err(|_| unreadable())?;
        if form.is_empty() {
            return Err(unreadable());
        }
        debug!("Getting xml data from {} file", kind);

        let bytes = adapter
            .encode(&form)
            .map_err(|_| UnlockError::Unpackable(source.clone()))?;
        UnlockedResource::new(bytes).ok_or_else(|| UnlockError::Unpackable(source.clone()))
    }

    fn unlock(&self, item: &WorkItem) -> Result<PathBuf> {
        let resource = self.convert(item)?;
        self.file_service
            .write_output(&item.destination_path, &resource, item.override_existing)?;
        Ok(item.destination_path.clone())
    }
}
