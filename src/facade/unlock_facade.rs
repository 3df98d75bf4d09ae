use std::path::{Path, PathBuf};
use log::{debug, error, info, warn};
use crate::error::{Result, UnlockError};
use crate::facade::traits::i_unlock::UnlockFacadeTrait;
use crate::models::conversion::{RunMode, UnlockInput};
use crate::models::resource::{ResourceType, WorkItem};
use crate::models::summary::RunSummary;
use crate::service::path::{ensure_output_dir, normalize, resolve_output};
use crate::service::traits::i_service::{FileServiceTrait, UnlockServiceTrait};

/// 批次處理器：決定工作集合、計算輸出位置，逐一交給解鎖服務
pub struct UnlockFacade {
    file_service: Box<dyn FileServiceTrait>,
    unlock_service: Box<dyn UnlockServiceTrait>,
}

impl UnlockFacade {
    pub fn new(file_service: Box<dyn FileServiceTrait>, unlock_service: Box<dyn UnlockServiceTrait>) -> Self {
        UnlockFacade { file_service, unlock_service }
    }
}

impl UnlockFacadeTrait for UnlockFacade {
    fn execute_unlock(&self, input: UnlockInput) -> Result<RunSummary> {
        let input_path = normalize(&input.input_path)
            .map_err(|_| UnlockError::InputNotFound(input.input_path.clone()))?;
        debug!("Finding files from: {}", input_path.display());

        if input_path.is_file() {
            self.process_single(&input_path, &input)
        } else if input_path.is_dir() {
            self.process_directory(&input_path, &input)
        } else {
            Err(UnlockError::InputNotFound(input_path))
        }
    }
}

impl UnlockFacade {
    fn process_single(&self, path: &Path, input: &UnlockInput) -> Result<RunSummary> {
        info!("Unlocking file: {}", path.display());
        let written = self.process_file(path, input, RunMode::SingleFile)?;
        let mut summary = RunSummary::new(RunMode::SingleFile);
        summary.record_success(written);
        info!("Unlocking finished.");
        Ok(summary)
    }

    fn process_directory(&self, dir: &Path, input: &UnlockInput) -> Result<RunSummary> {
        // 輸出目錄不存在時整批中止
        if let Some(output) = &input.output_path {
            ensure_output_dir(output)?;
        }

        let files = self.file_service.collect_files(dir)?;
        let mut summary = RunSummary::new(RunMode::Directory);
        for file in files {
            info!("Unlocking file: {}", file.display());
            match self.process_file(&file, input, RunMode::Directory) {
                Ok(written) => summary.record_success(written),
                Err(e) => {
                    error!("{}", e);
                    summary.record_failure(file, e.kind());
                }
            }
        }

        info!("Unlocking finished, {} files processed.", summary.attempted);
        if summary.failed() > 0 {
            warn!("{} of {} files could not be unlocked.", summary.failed(), summary.attempted);
        }
        Ok(summary)
    }

    fn process_file(&self, path: &Path, input: &UnlockInput, mode: RunMode) -> Result<PathBuf> {
        let resource_type = ResourceType::from_path(path)
            .ok_or_else(|| UnlockError::UnknownFileType(path.to_path_buf()))?;
        let resolved = resolve_output(path, input.output_path.as_deref(), input.override_existing, mode)?;
        let item = WorkItem {
            source_path: path.to_path_buf(),
            resource_type,
            destination_path: resolved.destination,
            override_existing: resolved.override_existing,
        };
        self.unlock_service.unlock(&item)
    }
}
