use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use log::{debug, warn};
use tempfile::Builder;
use walkdir::WalkDir;
use crate::error::{Result, UnlockError};
use crate::models::resource::{ResourceType, UnlockedResource};
use crate::service::traits::i_service::FileServiceTrait;

/// File 服務，負責檔案搜尋與讀寫並實現 FileServiceTrait
pub struct FileService;

impl FileService {
    pub fn new() -> Self {
        FileService
    }
}

impl Default for FileService {
    fn default() -> Self {
        Self::new()
    }
}

impl FileServiceTrait for FileService {
    fn collect_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(dir).follow_links(true).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => return Err(UnlockError::InputNotFound(dir.to_path_buf())),
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };
            // 未知副檔名在目錄模式下直接略過
            if entry.file_type().is_file() && ResourceType::from_path(entry.path()).is_some() {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }

    fn read_source(&self, path: &Path) -> io::Result<Vec<u8>> {
        debug!("Reading data from {}", path.display());
        fs::read(path)
    }

    fn write_output(&self, destination: &Path, data: &UnlockedResource, override_existing: bool) -> Result<()> {
        if !override_existing && destination.exists() {
            return Err(UnlockError::AlreadyExists(destination.to_path_buf()));
        }
        let write_failed = |source: io::Error| UnlockError::WriteFailed {
            path: destination.to_path_buf(),
            source,
        };

        // 目的地為符號連結時寫入其指向的檔案，連結本身保留
        let target = if destination.is_symlink() {
            fs::canonicalize(destination).map_err(write_failed)?
        } else {
            destination.to_path_buf()
        };
        let existing = fs::metadata(&target).ok().filter(|m| m.is_file());

        // 先寫入同目錄的暫存檔，完成後再換上，失敗時暫存檔隨之刪除
        let dir = target
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let mut tmp = temp_file_builder().tempfile_in(dir).map_err(write_failed)?;
        if let Some(meta) = &existing {
            tmp.as_file().set_permissions(meta.permissions()).map_err(write_failed)?;
        }
        tmp.write_all(data.as_bytes()).map_err(write_failed)?;
        tmp.as_file().sync_all().map_err(write_failed)?;

        if override_existing {
            tmp.persist(&target).map_err(|e| write_failed(e.error))?;
        } else {
            tmp.persist_noclobber(&target).map_err(|e| {
                if e.error.kind() == io::ErrorKind::AlreadyExists {
                    UnlockError::AlreadyExists(destination.to_path_buf())
                } else {
                    write_failed(e.error)
                }
            })?;
        }
        debug!("Write to {} successful ({} bytes)", target.display(), data.as_bytes().len());
        Ok(())
    }
}

/// 新檔案以 0666 建立，實際權限由 umask 決定，與一般寫檔一致
#[cfg(unix)]
fn temp_file_builder() -> Builder<'static, 'static> {
    use std::os::unix::fs::PermissionsExt;
    let mut builder = Builder::new();
    builder.permissions(fs::Permissions::from_mode(0o666));
    builder
}

#[cfg(not(unix))]
fn temp_file_builder() -> Builder<'static, 'static> {
    Builder::new()
}
