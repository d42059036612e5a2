impl BranchBar {
    fn load_app_config() -> (Option<ConfigStore>, AppConfig) {
        let store = match ConfigStore::new() {
            Ok(store) => store,
            Err(err) => {
                error!("failed to initialize config path: {err:#}");
                return (None, AppConfig::default());
            }
        };

        match store.load_or_create_default() {
            Ok(config) => (Some(store), config),
            Err(err) => {
                error!(
                    "failed to load app config from {}: {err:#}",
                    store.path().display()
                );
                (Some(store), AppConfig::default())
            }
        }
    }

    fn load_app_state() -> (Option<AppStateStore>, AppState) {
        let store = match AppStateStore::new() {
            Ok(store) => store,
            Err(err) => {
                error!("failed to initialize app state path: {err:#}");
                return (None, AppState::default());
            }
        };

        match store.load_or_default() {
            Ok(state) => (Some(store), state),
            Err(err) => {
                warn!(
                    "failed to load app state from {}: {err:#}",
                    store.path().display()
                );
                (Some(store), AppState::default())
            }
        }
    }

    fn apply_theme_preference(&self, window: &mut Window, cx: &mut Context<Self>) {
        let mode = match self.config.theme {
            ThemePreference::System => ThemeMode::from(window.appearance()),
            ThemePreference::Light => ThemeMode::Light,
            ThemePreference::Dark => ThemeMode::Dark,
        };
        Theme::change(mode, Some(window), cx);
    }

    fn persist_app_state(&self) {
        let Some(store) = &self.state_store else {
            return;
        };

        if let Err(err) = store.save(&self.app_state) {
            error!(
                "failed to save app state to {}: {err:#}",
                store.path().display()
            );
        }
    }

    fn push_error_notification(message: String, cx: &mut Context<Self>) {
        let window_handles = cx.windows().into_iter().collect::<Vec<_>>();
        if window_handles.is_empty() {
            error!("cannot show error notification: no windows available");
            return;
        }

        for window_handle in window_handles {
            if let Err(err) = cx.update_window(window_handle, |_, window, cx| {
                gpui_component::WindowExt::push_notification(
                    window,
                    gpui_component::notification::Notification::error(message.clone()),
                    cx,
                );
            }) {
                error!("failed to show error notification: {err:#}");
            }
        }
    }

    pub(super) fn new(
        requested_path: Option<PathBuf>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let (config_store, config) = Self::load_app_config();
        let (state_store, app_state) = Self::load_app_state();
        let repository_path = requested_path
            .or_else(|| app_state.last_repository_path.clone())
            .or_else(|| std::env::current_dir().ok());

        let branch_filter_input =
            cx.new(|cx| InputState::new(window, cx).placeholder("Filter branches"));
        let filter_subscription = cx.subscribe_in(
            &branch_filter_input,
            window,
            |_, _, event: &InputEvent, _, cx| {
                if matches!(event, InputEvent::Change { .. }) {
                    cx.notify();
                }
            },
        );

        let mut view = Self {
            config_store,
            selected_tab: app_state.selected_tab,
            config,
            state_store,
            app_state,
            repository_path,
            repository: None,
            repository_state: RepositoryState::default(),
            dispatcher: Arc::new(GitDispatcher),
            branch_dropdown_open: false,
            branch_filter_input,
            pull_requests: None,
            current_pull_request: None,
            refresh_epoch: 0,
            auto_refresh_task: Task::ready(()),
            snapshot_epoch: 0,
            snapshot_task: Task::ready(()),
            snapshot_loading: false,
            checkout_epoch: 0,
            checkout_task: Task::ready(()),
            error_message: None,
            _subscriptions: vec![filter_subscription],
        };

        if let Some(store) = &view.config_store {
            info!("using config at {}", store.path().display());
        }
        view.apply_theme_preference(window, cx);
        view.request_snapshot_refresh(cx);
        view.start_auto_refresh(cx);
        view
    }
}
