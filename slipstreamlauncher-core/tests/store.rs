use slipstreamlauncher_core::{AccountStore, AppSettings, LauncherConfig, LauncherPaths, StoreError};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

fn setup(with_master: bool) -> (TempDir, AccountStore) {
    let tmp = tempdir().unwrap();
    let paths = LauncherPaths::new(tmp.path(), &AppSettings::default());
    paths.ensure_dirs().unwrap();
    if with_master {
        fs::write(&paths.master_executable, b"MZ fake game").unwrap();
    }
    (tmp, AccountStore::new(paths))
}

fn raw_config(store: &AccountStore) -> Option<String> {
    fs::read_to_string(&store.paths().config_file).ok()
}

#[test]
fn load_without_file_is_empty() {
    let (_tmp, store) = setup(true);
    assert_eq!(store.load().unwrap(), LauncherConfig::default());
}

#[test]
fn first_account_becomes_selected_later_ones_do_not() {
    let (_tmp, store) = setup(true);

    let cfg = store.add_account("main").unwrap();
    assert_eq!(cfg.last_used.as_deref(), Some("main"));
    let exe = store.paths().account_executable("main");
    assert_eq!(cfg.accounts["main"], exe);
    assert_eq!(fs::read(&exe).unwrap(), b"MZ fake game");

    let cfg = store.add_account("smurf").unwrap();
    assert_eq!(cfg.last_used.as_deref(), Some("main"));
    assert_eq!(cfg.accounts.len(), 2);
    assert_eq!(store.load().unwrap(), cfg);
}

#[test]
fn duplicate_name_fails_and_leaves_config_unchanged() {
    let (_tmp, store) = setup(true);
    store.add_account("main").unwrap();
    let before = raw_config(&store);

    let err = store.add_account("main").unwrap_err();
    assert!(matches!(err, StoreError::DuplicateAccount(ref n) if n == "main"));
    assert_eq!(raw_config(&store), before);
}

#[test]
fn missing_master_executable_creates_nothing() {
    let (_tmp, store) = setup(false);
    assert!(!store.master_executable_available());

    let err = store.add_account("main").unwrap_err();
    assert!(matches!(err, StoreError::MasterExecutableMissing(_)));
    assert!(!store.paths().account_dir("main").exists());
    assert!(raw_config(&store).is_none());
}

#[test]
fn invalid_names_are_rejected() {
    let (_tmp, store) = setup(true);
    for name in ["", "   ", "a/b", "..", "bad:name"] {
        let err = store.add_account(name).unwrap_err();
        assert!(matches!(err, StoreError::InvalidName(_)), "{name:?} gave {err}");
    }
    assert!(raw_config(&store).is_none());
}

#[test]
fn name_is_trimmed() {
    let (_tmp, store) = setup(true);
    let cfg = store.add_account("  main  ").unwrap();
    assert!(cfg.accounts.contains_key("main"));
}

#[test]
fn orphaned_directory_blocks_add() {
    let (_tmp, store) = setup(true);
    fs::create_dir_all(store.paths().account_dir("main")).unwrap();
    let err = store.add_account("main").unwrap_err();
    assert!(matches!(err, StoreError::AccountDirectoryExists(_)));
    assert!(store.load().unwrap().accounts.is_empty());
}

#[test]
fn deleting_selected_account_reassigns_selection() {
    let (_tmp, store) = setup(true);
    store.add_account("main").unwrap();
    store.add_account("smurf").unwrap();

    let cfg = store.delete_account("main").unwrap();
    assert_eq!(cfg.last_used.as_deref(), Some("smurf"));
    assert!(!store.paths().account_dir("main").exists());

    let cfg = store.delete_account("smurf").unwrap();
    assert_eq!(cfg.last_used, None);
    assert!(cfg.accounts.is_empty());
    assert_eq!(store.load().unwrap(), cfg);
}

#[test]
fn deleting_other_account_keeps_selection() {
    let (_tmp, store) = setup(true);
    store.add_account("main").unwrap();
    store.add_account("smurf").unwrap();
    let cfg = store.delete_account("smurf").unwrap();
    assert_eq!(cfg.last_used.as_deref(), Some("main"));
    assert!(store.paths().account_dir("main").exists());
}

#[test]
fn deleting_unknown_account_is_noop() {
    let (_tmp, store) = setup(true);
    store.add_account("main").unwrap();
    let before = raw_config(&store);
    let cfg = store.delete_account("ghost").unwrap();
    assert_eq!(cfg.accounts.len(), 1);
    assert_eq!(raw_config(&store), before);
}

#[test]
fn deleting_account_whose_directory_vanished_still_unregisters() {
    let (_tmp, store) = setup(true);
    store.add_account("main").unwrap();
    fs::remove_dir_all(store.paths().account_dir("main")).unwrap();
    let cfg = store.delete_account("main").unwrap();
    assert!(cfg.accounts.is_empty());
}

#[test]
fn switch_requires_known_account() {
    let (_tmp, store) = setup(true);
    store.add_account("main").unwrap();
    store.add_account("smurf").unwrap();

    let cfg = store.switch_account("smurf").unwrap();
    assert_eq!(cfg.last_used.as_deref(), Some("smurf"));
    assert_eq!(store.load().unwrap().last_used.as_deref(), Some("smurf"));

    let err = store.switch_account("ghost").unwrap_err();
    assert!(matches!(err, StoreError::AccountNotFound(_)));
    assert_eq!(store.load().unwrap().last_used.as_deref(), Some("smurf"));
}

#[test]
fn legacy_document_is_upgraded_on_next_save() {
    let (_tmp, store) = setup(true);
    let exe = store.paths().account_executable("old");
    fs::create_dir_all(exe.parent().unwrap()).unwrap();
    fs::write(&exe, b"x").unwrap();
    let legacy = serde_json::json!({ "old": exe });
    fs::write(&store.paths().config_file, legacy.to_string()).unwrap();

    let cfg = store.load().unwrap();
    assert_eq!(cfg.accounts["old"], exe);
    assert_eq!(cfg.last_used, None);

    store.switch_account("old").unwrap();
    let text = raw_config(&store).unwrap();
    assert!(text.contains("\"accounts\""));
    assert!(text.contains("\"last_used\": \"old\""));
}

#[test]
fn save_load_round_trip() {
    let (_tmp, store) = setup(true);
    store.add_account("main").unwrap();
    store.add_account("smurf").unwrap();
    store.switch_account("smurf").unwrap();

    let text = raw_config(&store).unwrap();
    let cfg = store.load().unwrap();
    store.save(&cfg).unwrap();
    assert_eq!(raw_config(&store).unwrap(), text);
    assert_eq!(store.load().unwrap(), cfg);
}

#[test]
fn malformed_config_is_an_error() {
    let (_tmp, store) = setup(true);
    fs::write(&store.paths().config_file, "{ not json").unwrap();
    assert!(matches!(store.load().unwrap_err(), StoreError::Json { .. }));
}

#[test]
fn launch_with_missing_executable_does_not_touch_selection() {
    let (_tmp, store) = setup(true);
    store.add_account("main").unwrap();
    store.add_account("smurf").unwrap();
    fs::remove_file(store.paths().account_executable("smurf")).unwrap();
    let before = raw_config(&store);

    let spawned = RefCell::new(false);
    let err = store
        .launch_account_with("smurf", |_| {
            *spawned.borrow_mut() = true;
            Ok(())
        })
        .unwrap_err();
    assert!(matches!(err, StoreError::ExecutableMissing(_)));
    assert!(!*spawned.borrow());
    assert_eq!(raw_config(&store), before);
}

#[test]
fn launch_unknown_account_fails() {
    let (_tmp, store) = setup(true);
    let err = store.launch_account_with("ghost", |_| Ok(())).unwrap_err();
    assert!(matches!(err, StoreError::AccountNotFound(_)));
}

#[test]
fn launch_selects_account_and_spawns_its_copy() {
    let (_tmp, store) = setup(true);
    store.add_account("main").unwrap();
    store.add_account("smurf").unwrap();

    let spawned: RefCell<Option<PathBuf>> = RefCell::new(None);
    let cfg = store
        .launch_account_with("smurf", |exe: &Path| {
            *spawned.borrow_mut() = Some(exe.to_path_buf());
            Ok(())
        })
        .unwrap();
    assert_eq!(cfg.last_used.as_deref(), Some("smurf"));
    assert_eq!(store.load().unwrap().last_used.as_deref(), Some("smurf"));
    assert_eq!(spawned.into_inner(), Some(store.paths().account_executable("smurf")));
}

#[test]
fn spawn_error_is_surfaced() {
    let (_tmp, store) = setup(true);
    store.add_account("main").unwrap();
    let err = store
        .launch_account_with("main", |_| Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope")))
        .unwrap_err();
    assert!(matches!(err, StoreError::Spawn { .. }));
}

#[test]
fn deleting_entry_with_unsafe_name_leaves_other_accounts_alone() {
    let (_tmp, store) = setup(true);
    store.add_account("main").unwrap();
    let main_exe = store.paths().account_executable("main");
    let doc = serde_json::json!({ "main": main_exe, ".": "/nowhere/Slipstream.exe", "..": "/nowhere/Slipstream.exe" });
    fs::write(&store.paths().config_file, doc.to_string()).unwrap();

    store.delete_account(".").unwrap();
    let cfg = store.delete_account("..").unwrap();

    assert!(main_exe.is_file());
    assert!(store.paths().config_file.is_file());
    assert_eq!(cfg.accounts.len(), 1);
    assert!(cfg.accounts.contains_key("main"));
    assert_eq!(store.load().unwrap(), cfg);
}

#[cfg(unix)]
#[test]
fn failed_directory_removal_keeps_account_registered() {
    let (_tmp, store) = setup(true);
    store.add_account("main").unwrap();
    let dir = store.paths().account_dir("main");
    fs::remove_dir_all(&dir).unwrap();
    fs::write(&dir, b"not a directory").unwrap();
    let before = raw_config(&store);

    let err = store.delete_account("main").unwrap_err();
    assert!(matches!(err, StoreError::Io { action: "remove", .. }));
    assert_eq!(raw_config(&store), before);
    assert!(dir.is_file());
}

#[test]
fn failed_copy_removes_new_directory() {
    let tmp = tempdir().unwrap();
    let settings = AppSettings { executable_name: "bin/Slipstream.exe".into(), ..Default::default() };
    let paths = LauncherPaths::new(tmp.path(), &settings);
    paths.ensure_dirs().unwrap();
    fs::create_dir_all(paths.master_executable.parent().unwrap()).unwrap();
    fs::write(&paths.master_executable, b"MZ fake game").unwrap();
    let store = AccountStore::new(paths);
    assert!(store.master_executable_available());

    let err = store.add_account("main").unwrap_err();
    assert!(matches!(err, StoreError::Io { action: "copy to", .. }));
    assert!(!store.paths().account_dir("main").exists());
    assert!(raw_config(&store).is_none());
}
