//! 解鎖流程的錯誤分類。
//!
//! 每個錯誤都帶有出錯的路徑；批次模式下以 `ErrorKind` 彙整。

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::resource::ResourceType;

#[derive(Error, Debug)]
pub enum UnlockError {
    #[error("Input file not exists: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Output folder not exists: {}", .0.display())]
    OutputDirNotFound(PathBuf),

    #[error("Unknown file type: {}", .0.display())]
    UnknownFileType(PathBuf),

    #[error("Unable to convert file, is this a correct {kind} file? ({})", .path.display())]
    Unreadable { path: PathBuf, kind: ResourceType },

    #[error("Unable to pack the file: {}", .0.display())]
    Unpackable(PathBuf),

    #[error("Output file already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("Unable to write the file '{}': {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// 不帶資料的錯誤種類，便於統計與比對
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InputNotFound,
    OutputDirNotFound,
    UnknownFileType,
    Unreadable,
    Unpackable,
    AlreadyExists,
    WriteFailed,
}

impl UnlockError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            UnlockError::InputNotFound(_) => ErrorKind::InputNotFound,
            UnlockError::OutputDirNotFound(_) => ErrorKind::OutputDirNotFound,
            UnlockError::UnknownFileType(_) => ErrorKind::UnknownFileType,
            UnlockError::Unreadable { .. } => ErrorKind::Unreadable,
            UnlockError::Unpackable(_) => ErrorKind::Unpackable,
            UnlockError::AlreadyExists(_) => ErrorKind::AlreadyExists,
            UnlockError::WriteFailed { .. } => ErrorKind::WriteFailed,
        }
    }
}

pub type Result<T> = std::result::Result<T, UnlockError>;
