use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use git2::{BranchType, ErrorCode};
use tracing::{debug, info, warn};

use crate::branches::{Branch, BranchKind, BranchesState, Tip};
use crate::checkout::CheckoutProgress;
use crate::dispatcher::Dispatcher;
use crate::repository::{Repository, RepositoryState};

pub const RECENT_BRANCHES_LIMIT: usize = 5;

const LOCAL_BRANCH_PREFIX: &str = "refs/heads/";
const ORIGIN_HEAD_REF: &str = "refs/remotes/origin/HEAD";
const ORIGIN_BRANCH_PREFIX: &str = "refs/remotes/origin/";
const FALLBACK_DEFAULT_BRANCHES: [&str; 2] = ["main", "master"];

pub fn discover_repository(path: &Path) -> Result<Repository> {
    let repo = git2::Repository::discover(path).context("failed to discover git repository")?;
    Ok(Repository::new(repo_root(&repo)?))
}

pub fn load_repository_state(repository: &Repository) -> Result<RepositoryState> {
    let repo = open_repo(repository.path())?;

    let tip = load_tip(&repo);
    let all_branches = list_branches(&repo)?;
    let recent_branches = recent_branches(&repo, &all_branches, RECENT_BRANCHES_LIMIT);
    let default_branch = default_branch(&repo, &all_branches);

    debug!(
        "loaded {} branches ({} recent) for {}, tip is {}",
        all_branches.len(),
        recent_branches.len(),
        repository.name,
        tip.kind()
    );

    Ok(RepositoryState {
        branches_state: BranchesState {
            tip,
            default_branch,
            all_branches,
            recent_branches,
        },
        checkout_progress: None,
    })
}

/// Switches the working copy to `branch`, reporting file checkout progress.
///
/// Remote branches are checked out through a local branch of the same
/// short name, created and set to track the remote when missing.
pub fn checkout_branch(
    repo_root: &Path,
    branch: &Branch,
    on_progress: &mut dyn FnMut(CheckoutProgress),
) -> Result<()> {
    let repo = open_repo(repo_root)?;
    let local_name = match branch.kind {
        BranchKind::Local => branch.name.clone(),
        BranchKind::Remote => ensure_tracking_branch(&repo, branch)?,
    };
    let reference_name = format!("{LOCAL_BRANCH_PREFIX}{local_name}");

    let target = repo
        .revparse_single(&reference_name)
        .with_context(|| format!("failed to resolve branch {local_name}"))?;

    {
        let mut builder = git2::build::CheckoutBuilder::new();
        builder.safe();
        builder.progress(|_path, completed, total| {
            on_progress(CheckoutProgress::from_counts(
                local_name.as_str(),
                completed,
                total,
            ));
        });
        repo.checkout_tree(&target, Some(&mut builder))
            .with_context(|| format!("failed to check out files for {local_name}"))?;
    }

    repo.set_head(&reference_name)
        .with_context(|| format!("failed to move HEAD to {local_name}"))?;
    on_progress(CheckoutProgress::new(local_name.as_str(), 1.0));
    Ok(())
}

/// Git-backed [`Dispatcher`] used by the desktop app.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitDispatcher;

impl Dispatcher for GitDispatcher {
    fn checkout_branch(
        &self,
        repository: &Repository,
        branch: &Branch,
        on_progress: &mut dyn FnMut(CheckoutProgress),
    ) -> Result<()> {
        info!("checking out {} in {}", branch.name, repository.name);
        checkout_branch(repository.path(), branch, on_progress)?;
        info!("checked out {} in {}", branch.name, repository.name);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReflogBranchMove {
    Checkout { from: String, to: String },
    Rename { from: String, to: String },
}

/// Parses HEAD reflog messages such as `checkout: moving from main to feature`
/// and `Branch: renamed refs/heads/old to refs/heads/new`.
pub fn parse_reflog_branch_move(message: &str) -> Option<ReflogBranchMove> {
    if let Some(rest) = message.strip_prefix("checkout: moving from ") {
        let (from, to) = rest.trim_end().rsplit_once(" to ")?;
        return Some(ReflogBranchMove::Checkout {
            from: strip_local_prefix(from).to_string(),
            to: strip_local_prefix(to).to_string(),
        });
    }

    let rest = message.strip_prefix("Branch: renamed ")?;
    let (from, to) = rest.trim_end().rsplit_once(" to ")?;
    Some(ReflogBranchMove::Rename {
        from: strip_local_prefix(from).to_string(),
        to: strip_local_prefix(to).to_string(),
    })
}

/// Branch names checked out most recently, newest first and without repeats.
/// Names that were later renamed away are skipped.
pub fn recent_branch_names<'a>(
    messages: impl IntoIterator<Item = &'a str>,
    limit: usize,
) -> Vec<String> {
    let mut names = Vec::new();
    let mut seen = BTreeSet::new();
    let mut renamed_away = BTreeSet::new();

    for message in messages {
        if names.len() >= limit {
            break;
        }

        let candidate = match parse_reflog_branch_move(message) {
            Some(ReflogBranchMove::Checkout { to, .. }) => to,
            Some(ReflogBranchMove::Rename { from, to }) => {
                renamed_away.insert(from);
                to
            }
            None => continue,
        };

        if renamed_away.contains(&candidate) || !seen.insert(candidate.clone()) {
            continue;
        }
        names.push(candidate);
    }

    names
}

fn open_repo(repo_root: &Path) -> Result<git2::Repository> {
    git2::Repository::open(repo_root)
        .or_else(|_| git2::Repository::discover(repo_root))
        .context("failed to open git repository")
}

fn repo_root(repo: &git2::Repository) -> Result<PathBuf> {
    if let Some(workdir) = repo.workdir() {
        return Ok(workdir.to_path_buf());
    }

    repo.path()
        .parent()
        .map(|path| path.to_path_buf())
        .context("failed to resolve repository root")
}

fn load_tip(repo: &git2::Repository) -> Tip {
    let head = match repo.head() {
        Ok(head) => head,
        Err(err) if err.code() == ErrorCode::UnbornBranch => {
            return match unborn_ref_name(repo) {
                Some(ref_name) => Tip::Unborn { ref_name },
                None => Tip::Unknown,
            };
        }
        Err(err) => {
            warn!("failed to resolve HEAD: {err}");
            return Tip::Unknown;
        }
    };

    if !head.is_branch() {
        return match head.target() {
            Some(oid) => Tip::Detached {
                current_sha: oid.to_string(),
            },
            None => Tip::Unknown,
        };
    }

    let Some(name) = head.shorthand() else {
        return Tip::Unknown;
    };

    match repo
        .find_branch(name, BranchType::Local)
        .ok()
        .and_then(|branch| branch_from_git(branch, BranchKind::Local))
    {
        Some(branch) => Tip::Valid { branch },
        None => Tip::Unknown,
    }
}

fn unborn_ref_name(repo: &git2::Repository) -> Option<String> {
    let head = repo.find_reference("HEAD").ok()?;
    let target = head.symbolic_target()?;
    Some(strip_local_prefix(target).to_string())
}

fn list_branches(repo: &git2::Repository) -> Result<Vec<Branch>> {
    let mut branches = Vec::new();

    for entry in repo.branches(None).context("failed to list branches")? {
        let (branch, branch_type) = entry.context("failed to read branch")?;
        let kind = match branch_type {
            BranchType::Local => BranchKind::Local,
            BranchType::Remote => BranchKind::Remote,
        };
        if let Some(branch) = branch_from_git(branch, kind)
            && !(kind == BranchKind::Remote && branch.name.ends_with("/HEAD"))
        {
            branches.push(branch);
        }
    }

    branches.sort_by(|a, b| a.kind.cmp(&b.kind).then_with(|| a.name.cmp(&b.name)));
    Ok(branches)
}

fn branch_from_git(branch: git2::Branch<'_>, kind: BranchKind) -> Option<Branch> {
    let name = branch.name().ok().flatten()?.to_string();
    let upstream = match kind {
        BranchKind::Local => branch
            .upstream()
            .ok()
            .and_then(|upstream| upstream.name().ok().flatten().map(str::to_string)),
        BranchKind::Remote => None,
    };
    let commit = branch.get().peel_to_commit().ok()?;

    Some(Branch {
        name,
        kind,
        upstream,
        tip_sha: commit.id().to_string(),
        tip_unix_time: Some(commit.time().seconds()),
    })
}

fn recent_branches(repo: &git2::Repository, all_branches: &[Branch], limit: usize) -> Vec<Branch> {
    let reflog = match repo.reflog("HEAD") {
        Ok(reflog) => reflog,
        Err(err) => {
            debug!("no HEAD reflog available: {err}");
            return Vec::new();
        }
    };

    let messages = reflog
        .iter()
        .filter_map(|entry| entry.message().map(str::to_string))
        .collect::<Vec<_>>();

    // Over-fetch: some names may no longer exist as local branches.
    recent_branch_names(messages.iter().map(String::as_str), usize::MAX)
        .into_iter()
        .filter_map(|name| {
            all_branches
                .iter()
                .find(|branch| !branch.is_remote() && branch.name == name)
                .cloned()
        })
        .take(limit)
        .collect()
}

fn default_branch(repo: &git2::Repository, all_branches: &[Branch]) -> Option<Branch> {
    let find = |kind: BranchKind, name: &str| {
        all_branches
            .iter()
            .find(|branch| branch.kind == kind && branch.name == name)
            .cloned()
    };

    let origin_default = repo
        .find_reference(ORIGIN_HEAD_REF)
        .ok()
        .and_then(|reference| reference.symbolic_target().map(str::to_string))
        .and_then(|target| target.strip_prefix(ORIGIN_BRANCH_PREFIX).map(str::to_string));

    if let Some(name) = origin_default {
        return find(BranchKind::Local, &name)
            .or_else(|| find(BranchKind::Remote, &format!("origin/{name}")));
    }

    FALLBACK_DEFAULT_BRANCHES
        .iter()
        .find_map(|name| find(BranchKind::Local, name))
}

fn ensure_tracking_branch(repo: &git2::Repository, branch: &Branch) -> Result<String> {
    let local_name = branch.name_without_remote().to_string();
    if repo.find_branch(&local_name, BranchType::Local).is_ok() {
        return Ok(local_name);
    }

    let remote = repo
        .find_branch(&branch.name, BranchType::Remote)
        .with_context(|| format!("failed to find remote branch {}", branch.name))?;
    let commit = remote
        .get()
        .peel_to_commit()
        .with_context(|| format!("remote branch {} has no commit", branch.name))?;

    let mut local = repo
        .branch(&local_name, &commit, false)
        .with_context(|| format!("failed to create branch {local_name}"))?;
    local
        .set_upstream(Some(&branch.name))
        .map_err(|err| anyhow!("failed to track {} from {local_name}: {err}", branch.name))?;

    info!("created {local_name} tracking {}", branch.name);
    Ok(local_name)
}

fn strip_local_prefix(name: &str) -> &str {
    name.strip_prefix(LOCAL_BRANCH_PREFIX).unwrap_or(name)
}
