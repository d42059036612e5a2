use std::cell::RefCell;
use std::sync::Arc;

use anyhow::Result;
use branchbar::branches::{Branch, BranchesState, BranchesTab, Tip};
use branchbar::checkout::CheckoutProgress;
use branchbar::dispatcher::Dispatcher;
use branchbar::dropdown::{BranchDropdownProps, DropdownState, gate_dropdown_state_change};
use branchbar::labels::LabelCasing;
use branchbar::pull_request::{PullRequest, PullRequestRef};
use branchbar::repository::{Repository, RepositoryState};

struct NoopDispatcher;

impl Dispatcher for NoopDispatcher {
    fn checkout_branch(
        &self,
        _repository: &Repository,
        _branch: &Branch,
        _on_progress: &mut dyn FnMut(CheckoutProgress),
    ) -> Result<()> {
        Ok(())
    }
}

struct Fixture {
    dispatcher: Arc<dyn Dispatcher>,
    repository: Repository,
    repository_state: RepositoryState,
    pull_requests: Vec<PullRequest>,
}

impl Fixture {
    fn new(tip: Tip, checkout_progress: Option<CheckoutProgress>) -> Self {
        let main = Branch::local("main", "aaaaaaa");
        let feature = Branch::local("feature", "bbbbbbb");
        Self {
            dispatcher: Arc::new(NoopDispatcher),
            repository: Repository::new("/tmp/branchbar-fixture"),
            repository_state: RepositoryState {
                branches_state: BranchesState {
                    tip,
                    default_branch: Some(main.clone()),
                    all_branches: vec![feature.clone(), main],
                    recent_branches: vec![feature],
                },
                checkout_progress,
            },
            pull_requests: vec![PullRequest {
                number: 42,
                title: "Feature".to_string(),
                author: "octocat".to_string(),
                head: PullRequestRef {
                    ref_name: "feature".to_string(),
                    sha: "bbbbbbb".to_string(),
                },
                base: PullRequestRef {
                    ref_name: "main".to_string(),
                    sha: "aaaaaaa".to_string(),
                },
                status: None,
            }],
        }
    }

    fn props(&self, is_open: bool) -> BranchDropdownProps<'_> {
        BranchDropdownProps {
            dispatcher: &self.dispatcher,
            repository: &self.repository,
            repository_state: &self.repository_state,
            is_open,
            selected_tab: BranchesTab::PullRequests,
            pull_requests: Some(&self.pull_requests),
            current_pull_request: self.pull_requests.first(),
            label_casing: LabelCasing::Sentence,
            enable_preview_features: false,
        }
    }
}

fn feature_tip() -> Tip {
    Tip::Valid {
        branch: Branch::local("feature", "bbbbbbb"),
    }
}

#[test]
fn gate_blocks_open_only_during_checkout() {
    let progress = CheckoutProgress::new("feature", 0.4);

    assert_eq!(
        gate_dropdown_state_change(DropdownState::Open, Some(&progress)),
        None
    );
    assert_eq!(
        gate_dropdown_state_change(DropdownState::Closed, Some(&progress)),
        Some(DropdownState::Closed)
    );
    assert_eq!(
        gate_dropdown_state_change(DropdownState::Open, None),
        Some(DropdownState::Open)
    );
    assert_eq!(
        gate_dropdown_state_change(DropdownState::Closed, None),
        Some(DropdownState::Closed)
    );
}

#[test]
fn open_request_during_checkout_is_never_forwarded() {
    let fixture = Fixture::new(feature_tip(), Some(CheckoutProgress::started("main")));
    let forwarded = RefCell::new(Vec::new());

    let accepted = fixture
        .props(false)
        .request_state_change(DropdownState::Open, |state| forwarded.borrow_mut().push(state));

    assert!(!accepted);
    assert!(forwarded.borrow().is_empty());
}

#[test]
fn close_request_is_forwarded_regardless_of_checkout() {
    for progress in [None, Some(CheckoutProgress::new("main", 0.9))] {
        let fixture = Fixture::new(feature_tip(), progress);
        let forwarded = RefCell::new(Vec::new());

        let accepted = fixture
            .props(true)
            .request_state_change(DropdownState::Closed, |state| {
                forwarded.borrow_mut().push(state)
            });

        assert!(accepted);
        assert_eq!(*forwarded.borrow(), vec![DropdownState::Closed]);
    }
}

#[test]
fn open_request_without_checkout_is_forwarded() {
    let fixture = Fixture::new(feature_tip(), None);
    let mut forwarded = None;

    fixture
        .props(false)
        .request_state_change(DropdownState::Open, |state| forwarded = Some(state));

    assert_eq!(forwarded, Some(DropdownState::Open));
}

#[test]
fn foldout_is_built_only_while_displayed_open() {
    let fixture = Fixture::new(feature_tip(), None);

    let closed = fixture.props(false);
    let model = closed.model().expect("valid tip should produce a model");
    assert!(closed.foldout(&model).is_none());

    let open = fixture.props(true);
    let model = open.model().expect("valid tip should produce a model");
    let foldout = open.foldout(&model).expect("open dropdown should build foldout");

    assert_eq!(foldout.all_branches.len(), 2);
    assert_eq!(foldout.recent_branches.len(), 1);
    assert_eq!(
        foldout.current_branch.map(|branch| branch.name.as_str()),
        Some("feature")
    );
    assert_eq!(
        foldout.default_branch.map(|branch| branch.name.as_str()),
        Some("main")
    );
    assert_eq!(foldout.selected_tab, BranchesTab::PullRequests);
    assert_eq!(foldout.pull_requests.map(<[_]>::len), Some(1));
    assert_eq!(
        foldout.current_pull_request.map(|pull_request| pull_request.number),
        Some(42)
    );
    assert_eq!(foldout.repository.path, fixture.repository.path);
}

#[test]
fn foldout_has_no_current_branch_when_detached() {
    let fixture = Fixture::new(
        Tip::Detached {
            current_sha: "ccccccccccc".to_string(),
        },
        None,
    );
    let props = fixture.props(true);
    let model = props.model().expect("detached tip should produce a model");
    let foldout = props.foldout(&model).expect("detached dropdown can open");

    assert!(foldout.current_branch.is_none());
}

#[test]
fn foldout_is_not_built_while_checkout_runs() {
    let fixture = Fixture::new(feature_tip(), Some(CheckoutProgress::new("main", 0.1)));
    let props = fixture.props(true);
    let model = props.model().expect("valid tip should produce a model");

    assert_eq!(model.displayed_state(props.is_open), DropdownState::Closed);
    assert!(props.foldout(&model).is_none());
}

#[test]
fn unknown_tip_produces_no_model() {
    let fixture = Fixture::new(Tip::Unknown, None);
    assert!(fixture.props(true).model().is_none());
}
