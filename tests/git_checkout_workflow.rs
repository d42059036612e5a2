use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

use branchbar::branches::{Branch, Tip};
use branchbar::checkout::CheckoutProgress;
use branchbar::dispatcher::Dispatcher;
use branchbar::git::{GitDispatcher, checkout_branch, discover_repository, load_repository_state};

#[test]
fn checkout_switches_branch_and_reports_progress() {
    let fixture = TempRepo::new("checkout-progress");
    fixture.commit_file("readme.md", "main\n", "initial");
    run_git(fixture.path(), ["checkout", "-b", "feature"]);
    fixture.commit_file("feature.txt", "feature\n", "feature work");
    run_git(fixture.path(), ["checkout", "main"]);

    let mut progress = Vec::<CheckoutProgress>::new();
    checkout_branch(
        fixture.path(),
        &Branch::local("feature", ""),
        &mut |update| progress.push(update),
    )
    .expect("checkout should succeed");

    assert!(fixture.path().join("feature.txt").exists());
    let last = progress.last().expect("progress should be reported");
    assert_eq!(last.target_branch, "feature");
    assert_eq!(last.value, 1.0);
    assert!(
        progress
            .windows(2)
            .all(|pair| pair[0].value <= pair[1].value),
        "progress should never go backwards"
    );

    let repository = discover_repository(fixture.path()).expect("repository should be discovered");
    let state = load_repository_state(&repository).expect("state should load");
    assert_eq!(
        state
            .branches_state
            .tip
            .current_branch()
            .map(|branch| branch.name.as_str()),
        Some("feature")
    );
}

#[test]
fn dispatcher_checkout_removes_files_missing_on_target() {
    let fixture = TempRepo::new("dispatcher-checkout");
    fixture.commit_file("readme.md", "main\n", "initial");
    run_git(fixture.path(), ["checkout", "-b", "feature"]);
    fixture.commit_file("feature.txt", "feature\n", "feature work");

    let repository = discover_repository(fixture.path()).expect("repository should be discovered");
    let dispatcher = GitDispatcher;
    dispatcher
        .checkout_branch(&repository, &Branch::local("main", ""), &mut |_| {})
        .expect("checkout through dispatcher should succeed");

    assert!(!fixture.path().join("feature.txt").exists());
    assert_eq!(
        git_output(fixture.path(), ["rev-parse", "--abbrev-ref", "HEAD"]),
        "main"
    );
}

#[test]
fn checkout_of_remote_branch_creates_tracking_branch() {
    let fixture = TempRepo::new("checkout-remote");
    fixture.commit_file("readme.md", "main\n", "initial");
    run_git(
        fixture.path(),
        ["remote", "add", "origin", "https://example.invalid/repo.git"],
    );
    run_git(
        fixture.path(),
        ["update-ref", "refs/remotes/origin/remote-topic", "HEAD"],
    );

    checkout_branch(
        fixture.path(),
        &Branch::remote("origin/remote-topic", ""),
        &mut |_| {},
    )
    .expect("checkout of remote branch should succeed");

    let repository = discover_repository(fixture.path()).expect("repository should be discovered");
    let state = load_repository_state(&repository).expect("state should load");
    let Tip::Valid { branch } = &state.branches_state.tip else {
        panic!("expected valid tip, got {:?}", state.branches_state.tip);
    };
    assert_eq!(branch.name, "remote-topic");
    assert_eq!(branch.upstream.as_deref(), Some("origin/remote-topic"));
}

#[test]
fn checkout_refuses_to_overwrite_local_changes() {
    let fixture = TempRepo::new("checkout-conflict");
    fixture.commit_file("shared.txt", "main\n", "initial");
    run_git(fixture.path(), ["checkout", "-b", "feature"]);
    fixture.commit_file("shared.txt", "feature\n", "feature edit");
    run_git(fixture.path(), ["checkout", "main"]);
    write_file(fixture.path().join("shared.txt"), "local edit\n");

    let result = checkout_branch(fixture.path(), &Branch::local("feature", ""), &mut |_| {});

    assert!(result.is_err(), "dirty checkout should fail");
    assert_eq!(
        git_output(fixture.path(), ["rev-parse", "--abbrev-ref", "HEAD"]),
        "main"
    );
    assert_eq!(
        fs::read_to_string(fixture.path().join("shared.txt")).expect("file should be readable"),
        "local edit\n"
    );
}

#[test]
fn checkout_of_missing_branch_fails() {
    let fixture = TempRepo::new("checkout-missing");
    fixture.commit_file("readme.md", "main\n", "initial");

    let result = checkout_branch(fixture.path(), &Branch::local("nope", ""), &mut |_| {});
    assert!(result.is_err());
}

struct TempRepo {
    path: PathBuf,
}

impl TempRepo {
    fn new(prefix: &str) -> Self {
        let unique = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after unix epoch")
            .as_nanos();
        let path = std::env::temp_dir().join(format!("branchbar-{prefix}-{unique}"));
        fs::create_dir_all(&path).expect("temp repo directory should be created");

        run_git(&path, ["init"]);
        run_git(&path, ["symbolic-ref", "HEAD", "refs/heads/main"]);
        run_git(&path, ["config", "user.email", "branchbar@test.local"]);
        run_git(&path, ["config", "user.name", "Branchbar Test"]);
        Self { path }
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn commit_file(&self, relative_path: &str, contents: &str, message: &str) {
        write_file(self.path.join(relative_path), contents);
        run_git(&self.path, ["add", "."]);
        run_git(&self.path, ["commit", "-m", message]);
    }
}

impl Drop for TempRepo {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn write_file(path: PathBuf, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("parent directories should be created");
    }
    fs::write(path, contents).expect("file should be written");
}

fn run_git<const N: usize>(cwd: &Path, args: [&str; N]) {
    let status = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .status()
        .expect("git command should run");
    assert!(status.success(), "git command failed");
}

fn git_output<const N: usize>(cwd: &Path, args: [&str; N]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("git command should run");
    assert!(output.status.success(), "git command failed");
    String::from_utf8(output.stdout)
        .expect("git output should be utf-8")
        .trim()
        .to_string()
}
