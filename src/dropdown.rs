use std::sync::Arc;

use crate::branches::{Branch, BranchesTab, Tip};
use crate::checkout::CheckoutProgress;
use crate::dispatcher::Dispatcher;
use crate::labels::{DETACHED_HEAD, LabelCasing};
use crate::path_text::PathText;
use crate::pull_request::{PullRequest, PullRequestBadge};
use crate::repository::{Repository, RepositoryState};

const SHORT_SHA_LENGTH: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownState {
    Open,
    Closed,
}

impl DropdownState {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchIcon {
    Branch,
    PullRequest,
    Commit,
    Sync,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconAnimation {
    Spin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropdownTitle {
    Text(String),
    /// Rendered with the directory prefix muted.
    Path(PathText),
}

impl DropdownTitle {
    pub fn path(path: &str) -> Self {
        Self::Path(PathText::new(path))
    }

    pub fn to_plain_string(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Path(path) => path.full(),
        }
    }
}

/// Everything the toolbar button needs to draw itself.
#[derive(Debug, Clone, PartialEq)]
pub struct BranchDropdownModel {
    pub icon: BranchIcon,
    pub icon_animation: Option<IconAnimation>,
    pub title: DropdownTitle,
    pub description: String,
    pub tooltip: String,
    pub can_open: bool,
    pub branch_name: Option<String>,
    pub can_show_pr_badge: bool,
    pub progress_value: Option<f64>,
}

impl BranchDropdownModel {
    /// Returns `None` while the tip is still unknown.
    pub fn from_state(
        tip: &Tip,
        checkout_progress: Option<&CheckoutProgress>,
        current_pull_request: Option<&PullRequest>,
        casing: LabelCasing,
    ) -> Option<Self> {
        let mut icon = if current_pull_request.is_some() {
            BranchIcon::PullRequest
        } else {
            BranchIcon::Branch
        };
        let mut icon_animation = None;
        let mut description = casing.current_branch().to_string();
        let mut can_open = true;
        let mut branch_name = None;
        let mut progress_value = None;

        let (mut title, tooltip) = match tip {
            Tip::Unknown => return None,
            Tip::Unborn { ref_name } => {
                branch_name = Some(ref_name.clone());
                can_open = false;
                (
                    DropdownTitle::Text(ref_name.clone()),
                    format!("Current branch is {ref_name}"),
                )
            }
            Tip::Detached { current_sha } => {
                icon = BranchIcon::Commit;
                description = DETACHED_HEAD.to_string();
                let short_sha = current_sha
                    .chars()
                    .take(SHORT_SHA_LENGTH)
                    .collect::<String>();
                (
                    DropdownTitle::Text(format!("On {short_sha}")),
                    "Currently on a detached HEAD".to_string(),
                )
            }
            Tip::Valid { branch } => {
                branch_name = Some(branch.name.clone());
                (
                    DropdownTitle::path(&branch.name),
                    format!("Current branch is {}", branch.name),
                )
            }
        };

        if let Some(progress) = checkout_progress {
            title = DropdownTitle::path(&progress.target_branch);
            description = casing.switching_to_branch().to_string();
            if progress.value > 0.0 {
                description = format!("{description} ({} %)", progress.percent());
            }
            progress_value = Some(progress.value);
            icon = BranchIcon::Sync;
            icon_animation = Some(IconAnimation::Spin);
            can_open = false;
        }

        let can_show_pr_badge = match (branch_name.as_deref(), current_pull_request) {
            (Some(name), Some(pull_request)) => name == pull_request.head.ref_name,
            _ => false,
        };

        Some(Self {
            icon,
            icon_animation,
            title,
            description,
            tooltip,
            can_open,
            branch_name,
            can_show_pr_badge,
            progress_value,
        })
    }

    /// The state actually drawn: open only when requested and allowed.
    pub fn displayed_state(&self, is_open: bool) -> DropdownState {
        if is_open && self.can_open {
            DropdownState::Open
        } else {
            DropdownState::Closed
        }
    }

    pub fn show_disclosure_arrow(&self) -> bool {
        self.can_open
    }
}

/// Drops requests to open the dropdown while a checkout is running.
pub fn gate_dropdown_state_change(
    requested: DropdownState,
    checkout_progress: Option<&CheckoutProgress>,
) -> Option<DropdownState> {
    if requested == DropdownState::Open && checkout_progress.is_some() {
        return None;
    }
    Some(requested)
}

/// Inputs of the branch dropdown, all owned by the parent view.
#[derive(Clone, Copy)]
pub struct BranchDropdownProps<'a> {
    pub dispatcher: &'a Arc<dyn Dispatcher>,
    pub repository: &'a Repository,
    pub repository_state: &'a RepositoryState,
    pub is_open: bool,
    pub selected_tab: BranchesTab,
    pub pull_requests: Option<&'a [PullRequest]>,
    pub current_pull_request: Option<&'a PullRequest>,
    pub label_casing: LabelCasing,
    pub enable_preview_features: bool,
}

/// Data handed to the branch list panel.
#[derive(Clone, Copy)]
pub struct BranchFoldoutProps<'a> {
    pub all_branches: &'a [Branch],
    pub recent_branches: &'a [Branch],
    pub current_branch: Option<&'a Branch>,
    pub default_branch: Option<&'a Branch>,
    pub dispatcher: &'a Arc<dyn Dispatcher>,
    pub repository: &'a Repository,
    pub selected_tab: BranchesTab,
    pub pull_requests: Option<&'a [PullRequest]>,
    pub current_pull_request: Option<&'a PullRequest>,
}

impl<'a> BranchDropdownProps<'a> {
    pub fn model(&self) -> Option<BranchDropdownModel> {
        BranchDropdownModel::from_state(
            &self.repository_state.branches_state.tip,
            self.repository_state.checkout_progress.as_ref(),
            self.current_pull_request,
            self.label_casing,
        )
    }

    /// Forwards `requested` to `on_change` unless the gate swallows it.
    /// Returns whether the request was forwarded.
    pub fn request_state_change(
        &self,
        requested: DropdownState,
        on_change: impl FnOnce(DropdownState),
    ) -> bool {
        match gate_dropdown_state_change(
            requested,
            self.repository_state.checkout_progress.as_ref(),
        ) {
            Some(state) => {
                on_change(state);
                true
            }
            None => false,
        }
    }

    /// Built only while the dropdown is displayed open.
    pub fn foldout(&self, model: &BranchDropdownModel) -> Option<BranchFoldoutProps<'a>> {
        if !model.displayed_state(self.is_open).is_open() {
            return None;
        }

        let branches_state = &self.repository_state.branches_state;
        Some(BranchFoldoutProps {
            all_branches: &branches_state.all_branches,
            recent_branches: &branches_state.recent_branches,
            current_branch: branches_state.tip.current_branch(),
            default_branch: branches_state.default_branch.as_ref(),
            dispatcher: self.dispatcher,
            repository: self.repository,
            selected_tab: self.selected_tab,
            pull_requests: self.pull_requests,
            current_pull_request: self.current_pull_request,
        })
    }

    /// Badge shown beside the title when the current pull request matches
    /// the checked out branch and preview features are on.
    pub fn pull_request_badge(&self, model: &BranchDropdownModel) -> Option<PullRequestBadge> {
        pull_request_badge(
            model.can_show_pr_badge,
            self.enable_preview_features,
            self.current_pull_request,
        )
    }
}

pub fn pull_request_badge(
    can_show_pr_badge: bool,
    enable_preview_features: bool,
    current_pull_request: Option<&PullRequest>,
) -> Option<PullRequestBadge> {
    if !can_show_pr_badge || !enable_preview_features {
        return None;
    }
    current_pull_request.map(PullRequestBadge::from_pull_request)
}
