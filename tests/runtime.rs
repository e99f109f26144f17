//! Tests for the default runtime-directory resolver.

#![cfg(unix)]

mod common;

use common::{Capture, strip_prefix};
use std::fs;
use std::os::unix::fs::{PermissionsExt, symlink};
use std::path::Path;
use tempfile::TempDir;
use tilelog::runtime::PathResolver;
use tilelog::{Logger, RuntimeDir};

fn mode(path: &Path) -> u32 {
    fs::metadata(path).unwrap().permissions().mode() & 0o777
}

#[test]
fn creates_private_app_dir_with_pid_suffix() {
    let base = TempDir::new().unwrap();
    let path = RuntimeDir::new("wm")
        .in_dir(base.path())
        .resolve("errorlog")
        .unwrap();

    let app_dir = base.path().join("wm");
    assert_eq!(path, app_dir.join(format!("errorlog.{}", std::process::id())));
    assert_eq!(mode(&app_dir), 0o700);
}

#[test]
fn reuses_existing_private_dir() {
    let base = TempDir::new().unwrap();
    let app_dir = base.path().join("wm");
    fs::create_dir(&app_dir).unwrap();
    fs::set_permissions(&app_dir, fs::Permissions::from_mode(0o700)).unwrap();

    let path = RuntimeDir::new("wm").in_dir(base.path()).resolve("errorlog");
    assert_eq!(path.unwrap().parent(), Some(app_dir.as_path()));
}

#[test]
fn refuses_dir_open_to_other_users() {
    let base = TempDir::new().unwrap();
    let victim_dir = TempDir::new().unwrap();
    let victim = victim_dir.path().join("victim");
    fs::write(&victim, "precious data\n").unwrap();

    let app_dir = base.path().join("wm");
    fs::create_dir(&app_dir).unwrap();
    fs::set_permissions(&app_dir, fs::Permissions::from_mode(0o777)).unwrap();
    symlink(&victim, app_dir.join(format!("errorlog.{}", std::process::id()))).unwrap();

    let capture = Capture::new();
    let mut logger = Logger::builder()
        .console(capture.clone())
        .resolver(RuntimeDir::new("wm").in_dir(base.path()))
        .build();
    logger.init_logging();
    logger.error(format_args!("boom\n"));

    assert!(logger.errorlog_path().is_none());
    assert_eq!(fs::read_to_string(&victim).unwrap(), "precious data\n");
    let lines = capture.lines();
    assert_eq!(strip_prefix(&lines[0]), "Could not initialize errorlog\n");
}

#[test]
fn refuses_symlinked_app_dir() {
    let base = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();
    fs::set_permissions(elsewhere.path(), fs::Permissions::from_mode(0o700)).unwrap();
    symlink(elsewhere.path(), base.path().join("wm")).unwrap();

    let path = RuntimeDir::new("wm").in_dir(base.path()).resolve("errorlog");
    assert!(path.is_none());
}

#[test]
fn temp_fallback_ignores_planted_shared_dir() {
    let pid = std::process::id();
    let app = format!("tilelog-planted-{pid}");
    let planted = std::env::temp_dir().join(&app);
    fs::create_dir_all(&planted).unwrap();

    let victim_dir = TempDir::new().unwrap();
    let victim = victim_dir.path().join("victim");
    fs::write(&victim, "precious data\n").unwrap();
    symlink(&victim, planted.join(format!("errorlog.{pid}"))).unwrap();

    let mut logger = Logger::builder()
        .console(std::io::sink())
        .resolver(RuntimeDir::new(&app).temp_only())
        .build();
    logger.init_logging();
    logger.error(format_args!("boom\n"));

    let path = logger.errorlog_path().unwrap().to_path_buf();
    let dir = path.parent().unwrap().to_path_buf();
    let content = fs::read_to_string(&path).unwrap();
    let victim_content = fs::read_to_string(&victim).unwrap();
    let dir_mode = mode(&dir);

    let _ = fs::remove_dir_all(&planted);
    let _ = fs::remove_dir_all(&dir);

    assert_eq!(victim_content, "precious data\n");
    assert_eq!(content, "boom\n");
    assert_ne!(dir, planted);
    let dir_name = dir.file_name().unwrap().to_string_lossy().into_owned();
    assert!(dir_name.starts_with(&format!("{app}-")), "{dir_name}");
    assert_eq!(dir_mode, 0o700);
}

#[test]
fn temp_fallback_is_stable_per_resolver() {
    let resolver = RuntimeDir::new("tilelog-stable").temp_only();
    let first = resolver.resolve("errorlog").unwrap();
    let second = resolver.resolve("errorlog").unwrap();
    let dir = first.parent().unwrap().to_path_buf();
    let dir_mode = mode(&dir);
    let _ = fs::remove_dir_all(&dir);

    assert_eq!(first, second);
    assert_eq!(dir_mode, 0o700);
}
