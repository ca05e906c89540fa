#![allow(non_snake_case)]

use super::*;
use std::fs;
use tempfile::TempDir;

fn touch(dir: &Path, relative: &str) -> PathBuf {
    let path = dir.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "").unwrap();
    path
}

fn as_input(path: &Path) -> String {
    path.to_str().unwrap().to_string()
}

#[test]
fn schema_files___directory___recurses_and_sorts() {
    let dir = TempDir::new().unwrap();
    let b = touch(dir.path(), "b.toml");
    let a = touch(dir.path(), "a.json");
    let nested = touch(dir.path(), "nested/c.toml");

    let files = schema_files(&[as_input(dir.path())]).unwrap();

    assert_eq!(files, vec![a, b, nested]);
}

#[test]
fn schema_files___directory___skips_other_extensions_and_config() {
    let dir = TempDir::new().unwrap();
    let schema = touch(dir.path(), "ping.toml");
    touch(dir.path(), "README.md");
    touch(dir.path(), "ping.rs");
    touch(dir.path(), "jcegen.toml");

    let files = schema_files(&[as_input(dir.path())]).unwrap();

    assert_eq!(files, vec![schema]);
}

#[test]
fn schema_files___explicit_file___taken_as_given() {
    let dir = TempDir::new().unwrap();
    let odd = touch(dir.path(), "schema.txt");

    let files = schema_files(&[as_input(&odd)]).unwrap();

    assert_eq!(files, vec![odd]);
}

#[test]
fn schema_files___repeated_inputs___deduplicated() {
    let dir = TempDir::new().unwrap();
    let ping = touch(dir.path(), "ping.toml");

    let files = schema_files(&[as_input(&ping), as_input(dir.path())]).unwrap();

    assert_eq!(files, vec![ping]);
}

#[test]
fn schema_files___missing_input___errors() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing");

    let err = schema_files(&[as_input(&missing)]).unwrap_err();

    assert!(err.to_string().contains("Input not found"));
}

#[test]
fn schema_files___uppercase_extension___is_discovered() {
    let dir = TempDir::new().unwrap();
    let upper = touch(dir.path(), "PING.TOML");

    let files = schema_files(&[as_input(dir.path())]).unwrap();

    assert_eq!(files, vec![upper]);
}

#[cfg(unix)]
#[test]
fn schema_files___symlink_loop___lists_each_schema_once() {
    let dir = TempDir::new().unwrap();
    let schema = touch(dir.path(), "a.toml");
    std::os::unix::fs::symlink(dir.path(), dir.path().join("loop")).unwrap();

    let files = schema_files(&[as_input(dir.path())]).unwrap();

    assert_eq!(files, vec![schema]);
}

#[cfg(unix)]
#[test]
fn schema_files___symlinked_schema_file___is_kept() {
    let dir = TempDir::new().unwrap();
    let target = touch(dir.path(), "real/ping.toml");
    let link = dir.path().join("alias.toml");
    std::os::unix::fs::symlink(&target, &link).unwrap();

    let files = schema_files(&[as_input(dir.path())]).unwrap();

    assert_eq!(files, vec![link, target]);
}
