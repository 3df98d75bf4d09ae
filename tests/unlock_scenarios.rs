use std::fs;
use std::path::Path;

use model_unlocker::action::cli::build_facade;
use model_unlocker::error::ErrorKind;
use model_unlocker::models::conversion::{RunMode, UnlockInput};
use model_unlocker::service::format::AdapterRegistry;
use tempfile::TempDir;

fn container(version: u32, body: &[u8]) -> Vec<u8> {
    let mut data = b"RSC7".to_vec();
    data.extend_from_slice(&version.to_le_bytes());
    data.extend_from_slice(&0x0000_0090u32.to_le_bytes());
    data.extend_from_slice(&0x9000_0000u32.to_le_bytes());
    data.extend_from_slice(body);
    data
}

fn input(path: &Path, output: Option<&Path>, override_existing: bool) -> UnlockInput {
    UnlockInput {
        input_path: path.to_path_buf(),
        output_path: output.map(Path::to_path_buf),
        override_existing,
    }
}

/// 內建格式庫原樣搬運內容，因此就地轉換應逐位元組還原原檔
#[test]
fn test_single_file_in_place_round_trips_losslessly() {
    let dir = TempDir::new().unwrap();
    let model = dir.path().join("model.yft");
    let original = container(162, b"fragment body");
    fs::write(&model, &original).unwrap();

    let facade = build_facade(AdapterRegistry::builtin());
    let summary = facade
        .execute_unlock(input(&model, None, false))
        .expect("in-place conversion should succeed");

    assert_eq!(summary.mode, RunMode::SingleFile);
    assert_eq!(summary.attempted, 1);
    assert_eq!(summary.written.len(), 1);
    let written = fs::read(&model).unwrap();
    assert!(!written.is_empty());
    assert_eq!(written, original, "envelope and body survive decode/encode unchanged");
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1, "no temp files left behind");
}

#[test]
fn test_directory_to_output_folder() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    fs::create_dir(src.path().join("nested")).unwrap();
    fs::write(src.path().join("one.ydr"), container(165, b"first")).unwrap();
    fs::write(src.path().join("nested").join("two.ydr"), container(165, b"second")).unwrap();
    fs::write(src.path().join("readme.txt"), b"not a model").unwrap();

    let facade = build_facade(AdapterRegistry::builtin());
    let summary = facade
        .execute_unlock(input(src.path(), Some(out.path()), false))
        .unwrap();

    assert_eq!(summary.mode, RunMode::Directory);
    assert_eq!(summary.attempted, 2);
    assert!(summary.failures.is_empty());

    let mut names: Vec<_> = fs::read_dir(out.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    assert_eq!(names, vec!["one.ydr", "two.ydr"]);
    assert_eq!(fs::read(out.path().join("two.ydr")).unwrap(), container(165, b"second"));
}

#[test]
fn test_corrupted_single_file_is_unreadable() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let model = src.path().join("broken.ydd");
    fs::write(&model, b"this is not a resource container").unwrap();

    let facade = build_facade(AdapterRegistry::builtin());
    let err = facade
        .execute_unlock(input(&model, Some(out.path()), true))
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Unreadable);
    assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
}

#[test]
fn test_existing_destination_is_kept_without_override() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let model = src.path().join("car.yft");
    fs::write(&model, container(162, b"new content")).unwrap();
    fs::write(out.path().join("car.yft"), b"previous").unwrap();

    let facade = build_facade(AdapterRegistry::builtin());
    let err = facade
        .execute_unlock(input(&model, Some(out.path()), false))
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::AlreadyExists);
    assert_eq!(fs::read(out.path().join("car.yft")).unwrap(), b"previous");
}

#[test]
fn test_existing_destination_is_replaced_with_override() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let model = src.path().join("car.yft");
    let fresh = container(162, b"new content");
    fs::write(&model, &fresh).unwrap();
    fs::write(out.path().join("car.yft"), vec![0xAB; 4096]).unwrap();

    let facade = build_facade(AdapterRegistry::builtin());
    facade
        .execute_unlock(input(&model, Some(out.path()), true))
        .unwrap();

    assert_eq!(fs::read(out.path().join("car.yft")).unwrap(), fresh);
}

#[test]
fn test_directory_collisions_are_reported_per_file() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    fs::create_dir(src.path().join("a")).unwrap();
    fs::create_dir(src.path().join("b")).unwrap();
    fs::write(src.path().join("a").join("same.ydr"), container(165, b"from a")).unwrap();
    fs::write(src.path().join("b").join("same.ydr"), container(165, b"from b")).unwrap();
    fs::write(src.path().join("b").join("bad.ydr"), b"RSC7").unwrap();

    let facade = build_facade(AdapterRegistry::builtin());
    let summary = facade
        .execute_unlock(input(src.path(), Some(out.path()), false))
        .unwrap();

    assert_eq!(summary.attempted, 3);
    assert_eq!(summary.written.len(), 1);
    let mut kinds: Vec<_> = summary.failures.iter().map(|(_, k)| *k).collect();
    kinds.sort_by_key(|k| format!("{:?}", k));
    assert_eq!(kinds, vec![ErrorKind::AlreadyExists, ErrorKind::Unreadable]);
    assert_eq!(fs::read(out.path().join("same.ydr")).unwrap(), container(165, b"from a"));
}
