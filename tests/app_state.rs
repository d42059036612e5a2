use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use branchbar::branches::BranchesTab;
use branchbar::state::{AppState, AppStateStore};

#[test]
fn app_state_defaults_to_no_repository_and_branches_tab() {
    let state = AppState::default();
    assert_eq!(state.last_repository_path, None);
    assert_eq!(state.selected_tab, BranchesTab::Branches);
}

#[test]
fn app_state_parses_without_fields() {
    let state: AppState = toml::from_str("").expect("state without fields should parse");
    assert_eq!(state, AppState::default());
}

#[test]
fn app_state_round_trips_repository_and_tab() {
    let state = AppState {
        last_repository_path: Some(PathBuf::from("/tmp/branchbar-repo")),
        selected_tab: BranchesTab::PullRequests,
    };

    let raw = toml::to_string(&state).expect("state should serialize");
    assert!(raw.contains("selected_tab = \"pull_requests\""));
    let loaded: AppState = toml::from_str(&raw).expect("state should deserialize");

    assert_eq!(loaded, state);
}

#[test]
fn app_state_store_defaults_when_file_is_missing() {
    let store = AppStateStore::at(temp_dir("state-missing").join("state.toml"));
    let state = store.load_or_default().expect("missing state should default");
    assert_eq!(state, AppState::default());
    assert!(!store.path().exists());
}

#[test]
fn app_state_store_persists_between_instances() {
    let dir = temp_dir("state-persist");
    let path = dir.join("branchbar").join("state.toml");
    let state = AppState {
        last_repository_path: Some(PathBuf::from("/work/repo")),
        selected_tab: BranchesTab::PullRequests,
    };

    AppStateStore::at(&path)
        .save(&state)
        .expect("state should save");
    let loaded = AppStateStore::at(&path)
        .load_or_default()
        .expect("state should load");

    assert_eq!(loaded, state);

    let _ = fs::remove_dir_all(dir);
}

fn temp_dir(prefix: &str) -> PathBuf {
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time should be after unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("branchbar-{prefix}-{unique}"))
}
