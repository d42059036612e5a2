use crate::branches::Tip;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestRef {
    pub ref_name: String,
    pub sha: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Pending,
    Success,
    Failure,
}

/// Combined commit status of a pull request head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestStatus {
    pub state: CheckState,
    pub total_count: usize,
    pub sha: String,
}

impl PullRequestStatus {
    pub fn summary(&self) -> String {
        let checks = if self.total_count == 1 { "check" } else { "checks" };
        match self.state {
            CheckState::Pending => format!("{} {checks} pending", self.total_count),
            CheckState::Success => format!("{} {checks} passed", self.total_count),
            CheckState::Failure => format!("{} {checks} failed", self.total_count),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub author: String,
    pub head: PullRequestRef,
    pub base: PullRequestRef,
    pub status: Option<PullRequestStatus>,
}

/// Data shown by the pull request badge next to the branch title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestBadge {
    pub number: u64,
    pub status: Option<PullRequestStatus>,
}

impl PullRequestBadge {
    pub fn from_pull_request(pull_request: &PullRequest) -> Self {
        Self {
            number: pull_request.number,
            status: pull_request.status.clone(),
        }
    }

    pub fn label(&self) -> String {
        format!("#{}", self.number)
    }
}

/// The open pull request whose head is the checked out branch, if any.
pub fn find_current_pull_request<'a>(
    pull_requests: &'a [PullRequest],
    tip: &Tip,
) -> Option<&'a PullRequest> {
    let branch = tip.current_branch()?;
    let head_name = branch
        .upstream
        .as_deref()
        .and_then(|upstream| upstream.split_once('/').map(|(_, name)| name))
        .unwrap_or(branch.name.as_str());
    pull_requests
        .iter()
        .find(|pull_request| pull_request.head.ref_name == head_name)
}
