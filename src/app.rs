use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use gpui::{
    AnyElement, AppContext as _, Application, Context, Entity, InteractiveElement as _,
    IntoElement, ParentElement as _, Render, StatefulInteractiveElement as _, Styled as _,
    Subscription, Task, Timer, Window, WindowOptions, div, prelude::FluentBuilder as _, px,
};
use gpui_component::{
    ActiveTheme as _, Colorize as _, Root, StyledExt as _, Theme, ThemeMode, h_flex,
    input::{InputEvent, InputState},
    scroll::ScrollableElement,
    v_flex,
};
use tracing::error;

use branchbar::branches::{Branch, BranchesTab};
use branchbar::config::{AppConfig, ConfigStore, ThemePreference};
use branchbar::dispatcher::Dispatcher;
use branchbar::git::GitDispatcher;
use branchbar::pull_request::PullRequest;
use branchbar::repository::{Repository, RepositoryState};
use branchbar::state::{AppState, AppStateStore};

mod assets;
mod controller;
mod render;

const AUTO_REFRESH_INTERVAL: Duration = Duration::from_millis(1500);

pub fn run(requested_path: Option<PathBuf>) -> Result<()> {
    let app = Application::new().with_assets(assets::Assets);
    app.run(move |cx| {
        gpui_component::init(cx);

        if let Err(err) = cx.open_window(WindowOptions::default(), move |window, cx| {
            let view = cx.new(|cx| BranchBar::new(requested_path, window, cx));
            cx.new(|cx| Root::new(view, window, cx))
        }) {
            error!("failed to open window: {err:#}");
        }
    });

    Ok(())
}

struct BranchBar {
    config_store: Option<ConfigStore>,
    config: AppConfig,
    state_store: Option<AppStateStore>,
    app_state: AppState,
    repository_path: Option<PathBuf>,
    repository: Option<Repository>,
    repository_state: RepositoryState,
    dispatcher: Arc<dyn Dispatcher>,
    branch_dropdown_open: bool,
    selected_tab: BranchesTab,
    branch_filter_input: Entity<InputState>,
    pull_requests: Option<Vec<PullRequest>>,
    current_pull_request: Option<PullRequest>,
    refresh_epoch: usize,
    auto_refresh_task: Task<()>,
    snapshot_epoch: usize,
    snapshot_task: Task<()>,
    snapshot_loading: bool,
    checkout_epoch: usize,
    checkout_task: Task<()>,
    error_message: Option<String>,
    _subscriptions: Vec<Subscription>,
}
