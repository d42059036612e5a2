use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::labels::LabelCasing;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BranchKind {
    Local,
    Remote,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub name: String,
    pub kind: BranchKind,
    pub upstream: Option<String>,
    pub tip_sha: String,
    pub tip_unix_time: Option<i64>,
}

impl Branch {
    pub fn local(name: impl Into<String>, tip_sha: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: BranchKind::Local,
            upstream: None,
            tip_sha: tip_sha.into(),
            tip_unix_time: None,
        }
    }

    pub fn remote(name: impl Into<String>, tip_sha: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: BranchKind::Remote,
            upstream: None,
            tip_sha: tip_sha.into(),
            tip_unix_time: None,
        }
    }

    pub fn with_upstream(mut self, upstream: impl Into<String>) -> Self {
        self.upstream = Some(upstream.into());
        self
    }

    pub fn is_remote(&self) -> bool {
        self.kind == BranchKind::Remote
    }

    /// `origin/feature` -> `feature`. Local names are returned unchanged.
    pub fn name_without_remote(&self) -> &str {
        match self.kind {
            BranchKind::Local => &self.name,
            BranchKind::Remote => self
                .name
                .split_once('/')
                .map(|(_, rest)| rest)
                .unwrap_or(&self.name),
        }
    }
}

/// Where HEAD currently points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tip {
    /// Nothing has been loaded yet.
    Unknown,
    /// HEAD names a branch that has no commits.
    Unborn { ref_name: String },
    Detached { current_sha: String },
    Valid { branch: Branch },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipKind {
    Unknown,
    Unborn,
    Detached,
    Valid,
}

impl fmt::Display for TipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Unknown => "unknown",
            Self::Unborn => "unborn",
            Self::Detached => "detached",
            Self::Valid => "valid",
        };
        f.write_str(label)
    }
}

impl Tip {
    pub fn kind(&self) -> TipKind {
        match self {
            Self::Unknown => TipKind::Unknown,
            Self::Unborn { .. } => TipKind::Unborn,
            Self::Detached { .. } => TipKind::Detached,
            Self::Valid { .. } => TipKind::Valid,
        }
    }

    pub fn current_branch(&self) -> Option<&Branch> {
        match self {
            Self::Valid { branch } => Some(branch),
            Self::Unknown | Self::Unborn { .. } | Self::Detached { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchesTab {
    #[default]
    Branches,
    PullRequests,
}

impl BranchesTab {
    pub const ALL: [Self; 2] = [Self::Branches, Self::PullRequests];

    pub fn label(self, casing: LabelCasing) -> &'static str {
        match self {
            Self::Branches => "Branches",
            Self::PullRequests => casing.pick("Pull Requests", "Pull requests"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchesState {
    pub tip: Tip,
    pub default_branch: Option<Branch>,
    pub all_branches: Vec<Branch>,
    pub recent_branches: Vec<Branch>,
}

impl Default for BranchesState {
    fn default() -> Self {
        Self {
            tip: Tip::Unknown,
            default_branch: None,
            all_branches: Vec::new(),
            recent_branches: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchGroupKind {
    Default,
    Recent,
    Other,
}

impl BranchGroupKind {
    pub fn label(self, casing: LabelCasing) -> &'static str {
        match self {
            Self::Default => casing.pick("Default Branch", "Default branch"),
            Self::Recent => casing.pick("Recent Branches", "Recent branches"),
            Self::Other => casing.pick("Other Branches", "Other branches"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchGroup {
    pub kind: BranchGroupKind,
    pub branches: Vec<Branch>,
}

/// Splits branches into the sections shown in the branch foldout.
///
/// Remote branches that already have a local counterpart (same name or
/// tracked as upstream) are hidden. `filter` is a case-insensitive substring
/// match on the branch name; empty groups are dropped.
pub fn group_branches(
    default_branch: Option<&Branch>,
    recent_branches: &[Branch],
    all_branches: &[Branch],
    filter: &str,
) -> Vec<BranchGroup> {
    let filter = filter.trim().to_lowercase();
    let matches = |branch: &Branch| filter.is_empty() || branch.name.to_lowercase().contains(&filter);
    let default_name = default_branch.map(|branch| branch.name.as_str());

    let mut groups = Vec::new();

    if let Some(default_branch) = default_branch.filter(|branch| matches(branch)) {
        groups.push(BranchGroup {
            kind: BranchGroupKind::Default,
            branches: vec![default_branch.clone()],
        });
    }

    let mut recent_names = BTreeSet::new();
    let recent = recent_branches
        .iter()
        .filter(|branch| Some(branch.name.as_str()) != default_name)
        .filter(|branch| recent_names.insert(branch.name.as_str()))
        .filter(|branch| matches(branch))
        .cloned()
        .collect::<Vec<_>>();
    if !recent.is_empty() {
        groups.push(BranchGroup {
            kind: BranchGroupKind::Recent,
            branches: recent,
        });
    }

    let local_names = all_branches
        .iter()
        .filter(|branch| !branch.is_remote())
        .map(|branch| branch.name.as_str())
        .collect::<BTreeSet<_>>();
    let tracked_upstreams = all_branches
        .iter()
        .filter(|branch| !branch.is_remote())
        .filter_map(|branch| branch.upstream.as_deref())
        .collect::<BTreeSet<_>>();

    let mut other = all_branches
        .iter()
        .filter(|branch| Some(branch.name.as_str()) != default_name)
        .filter(|branch| !recent_names.contains(branch.name.as_str()))
        .filter(|branch| {
            !branch.is_remote()
                || (!tracked_upstreams.contains(branch.name.as_str())
                    && !local_names.contains(branch.name_without_remote()))
        })
        .filter(|branch| matches(branch))
        .cloned()
        .collect::<Vec<_>>();
    other.sort_by(|a, b| a.kind.cmp(&b.kind).then_with(|| a.name.cmp(&b.name)));
    if !other.is_empty() {
        groups.push(BranchGroup {
            kind: BranchGroupKind::Other,
            branches: other,
        });
    }

    groups
}
