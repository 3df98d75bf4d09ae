//! 路徑整理與輸出目的地計算，不涉及任何格式知識。

use std::io;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use log::debug;

use crate::error::{Result, UnlockError};
use crate::models::conversion::RunMode;

/// shell 引號處理後常殘留在參數尾端的字元
const TRAILING_CHARS: [char; 4] = ['"', '\'', '\\', '/'];

/// 去除尾端殘留字元並統一為本機路徑分隔符
pub fn clean_arg(arg: &str) -> String {
    let trimmed = arg.trim_end_matches(&TRAILING_CHARS[..]);
    // 根目錄本身只剩分隔符，保留一個
    let trimmed = if trimmed.is_empty() && arg.starts_with(&['/', '\\'][..]) {
        &arg[..1]
    } else {
        trimmed
    };
    trimmed
        .chars()
        .map(|c| if c == '/' || c == '\\' { MAIN_SEPARATOR } else { c })
        .collect()
}

/// 整理後轉為絕對路徑；不解析符號連結，結果可重複套用而不變
pub fn normalize(path: impl AsRef<Path>) -> io::Result<PathBuf> {
    let cleaned = clean_arg(&path.as_ref().to_string_lossy());
    if cleaned.is_empty() {
        return std::path::absolute(".");
    }
    std::path::absolute(cleaned)
}

/// 單一檔案的輸出目的地與實際採用的覆寫設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOutput {
    pub destination: PathBuf,
    pub override_existing: bool,
}

/// 計算輸入檔案的輸出路徑
///
/// - 未指定輸出：原地轉換，永遠覆寫
/// - 輸出為既有目錄：目錄 + 原檔名
/// - 輸出不是目錄：單檔模式視為目標檔案路徑，目錄模式為設定錯誤
pub fn resolve_output(
    input: &Path,
    output: Option<&Path>,
    override_flag: bool,
    mode: RunMode,
) -> Result<ResolvedOutput> {
    let Some(output) = output else {
        let destination = normalize(input).map_err(|_| UnlockError::InputNotFound(input.to_path_buf()))?;
        return Ok(ResolvedOutput { destination, override_existing: true });
    };

    let output = normalize(output).map_err(|_| UnlockError::OutputDirNotFound(output.to_path_buf()))?;
    if output.is_dir() {
        let file_name = input
            .file_name()
            .ok_or_else(|| UnlockError::UnknownFileType(input.to_path_buf()))?;
        return Ok(ResolvedOutput {
            destination: output.join(file_name),
            override_existing: override_flag,
        });
    }

    match mode {
        RunMode::SingleFile => {
            // 不建立目錄，目標檔案所在目錄必須已存在
            let parent = output.parent().unwrap_or(Path::new(""));
            if !parent.is_dir() {
                return Err(UnlockError::OutputDirNotFound(parent.to_path_buf()));
            }
            debug!("Output is not a folder, using it as target file: {}", output.display());
            Ok(ResolvedOutput { destination: output, override_existing: override_flag })
        }
        RunMode::Directory => Err(UnlockError::OutputDirNotFound(output)),
    }
}

/// 目錄模式下輸出必須是既有目錄
pub fn ensure_output_dir(output: &Path) -> Result<PathBuf> {
    let normalized = normalize(output).map_err(|_| UnlockError::OutputDirNotFound(output.to_path_buf()))?;
    if normalized.is_dir() {
        Ok(normalized)
    } else {
        Err(UnlockError::OutputDirNotFound(normalized))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use tempfile::TempDir;

    #[test]
    fn clean_arg_strips_quote_leftovers() {
        let sep = MAIN_SEPARATOR.to_string();
        assert_eq!(clean_arg("models\\\""), "models");
        assert_eq!(clean_arg("models/'"), "models");
        assert_eq!(clean_arg("a/b\\c"), format!("a{sep}b{sep}c"));
        assert_eq!(clean_arg("/"), sep);
    }

    #[test]
    fn normalize_is_idempotent() {
        for raw in ["model.yft", "dir/sub/", "dir\\sub\\\"", "./a/./b", "/", "\"", "../x/y'"] {
            let once = normalize(raw).unwrap();
            let twice = normalize(&once).unwrap();
            assert_eq!(once, twice, "input {raw:?}");
            assert!(once.is_absolute());
        }
    }

    #[test]
    fn normalize_uses_native_separator() {
        let out = normalize("a\\b/c").unwrap();
        let other = if MAIN_SEPARATOR == '/' { '\\' } else { '/' };
        assert!(!out.to_string_lossy().contains(other));
    }

    #[test]
    fn no_output_means_in_place_with_override() {
        let resolved = resolve_output(Path::new("model.yft"), None, false, RunMode::SingleFile).unwrap();
        assert_eq!(resolved.destination, normalize("model.yft").unwrap());
        assert!(resolved.override_existing);
    }

    #[test]
    fn output_dir_keeps_file_name_and_flag() {
        let dir = TempDir::new().unwrap();
        let resolved = resolve_output(Path::new("/src/a/model.ydr"), Some(dir.path()), false, RunMode::Directory).unwrap();
        assert_eq!(resolved.destination, normalize(dir.path()).unwrap().join("model.ydr"));
        assert!(!resolved.override_existing);
    }

    #[test]
    fn missing_output_dir_is_rejected_in_directory_mode() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let err = resolve_output(Path::new("a.yft"), Some(&missing), true, RunMode::Directory).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutputDirNotFound);
        assert_eq!(ensure_output_dir(&missing).unwrap_err().kind(), ErrorKind::OutputDirNotFound);
    }

    #[test]
    fn single_file_accepts_literal_target() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("renamed.yft");
        let resolved = resolve_output(Path::new("a.yft"), Some(&target), true, RunMode::SingleFile).unwrap();
        assert_eq!(resolved.destination, normalize(&target).unwrap());
        assert!(resolved.override_existing);

        let orphan = dir.path().join("missing").join("x.yft");
        let err = resolve_output(Path::new("a.yft"), Some(&orphan), true, RunMode::SingleFile).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutputDirNotFound);
    }
}
