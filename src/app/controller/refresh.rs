impl BranchBar {
    fn request_snapshot_refresh(&mut self, cx: &mut Context<Self>) {
        if self.snapshot_loading || self.repository_state.is_checkout_in_progress() {
            return;
        }

        let Some(path) = self.repository_path.clone() else {
            self.error_message = Some("No repository path available.".to_string());
            cx.notify();
            return;
        };

        let epoch = self.next_snapshot_epoch();
        self.snapshot_loading = true;

        self.snapshot_task = cx.spawn(async move |this, cx| {
            let result = cx
                .background_executor()
                .spawn(async move {
                    let repository = discover_repository(&path)
                        .with_context(|| format!("{} is not a git repository", path.display()))?;
                    let state = load_repository_state(&repository)?;
                    anyhow::Ok((repository, state))
                })
                .await;

            if let Some(this) = this.upgrade() {
                this.update(cx, |this, cx| {
                    if epoch != this.snapshot_epoch {
                        return;
                    }

                    this.snapshot_loading = false;
                    match result {
                        Ok((repository, state)) => this.apply_snapshot(repository, state, cx),
                        Err(err) => this.apply_snapshot_error(err, cx),
                    }
                })
                .ok();
            }
        });
    }

    /// Discards any in-flight load so the next snapshot reflects the latest
    /// repository operation.
    fn force_snapshot_refresh(&mut self, cx: &mut Context<Self>) {
        self.snapshot_loading = false;
        self.request_snapshot_refresh(cx);
    }

    fn apply_snapshot(
        &mut self,
        repository: Repository,
        mut state: RepositoryState,
        cx: &mut Context<Self>,
    ) {
        let previous_tip = &self.repository_state.branches_state.tip;
        if *previous_tip != state.branches_state.tip {
            info!(
                "{} tip is now {}",
                repository.name,
                state.branches_state.tip.kind()
            );
        }

        if self.app_state.last_repository_path.as_ref() != Some(&repository.path) {
            self.app_state.last_repository_path = Some(repository.path.clone());
            self.persist_app_state();
        }

        state.checkout_progress = self.repository_state.checkout_progress.take();
        self.current_pull_request = self.pull_requests.as_deref().and_then(|pull_requests| {
            find_current_pull_request(pull_requests, &state.branches_state.tip).cloned()
        });
        self.repository = Some(repository);
        self.repository_state = state;
        self.error_message = None;
        cx.notify();
    }

    fn apply_snapshot_error(&mut self, err: anyhow::Error, cx: &mut Context<Self>) {
        error!("failed to load repository state: {err:#}");
        self.repository = None;
        self.repository_state = RepositoryState::default();
        self.current_pull_request = None;
        self.branch_dropdown_open = false;
        self.error_message = Some(format!("{err:#}"));
        cx.notify();
    }

    fn next_snapshot_epoch(&mut self) -> usize {
        self.snapshot_epoch = self.snapshot_epoch.saturating_add(1);
        self.snapshot_epoch
    }

    fn start_auto_refresh(&mut self, cx: &mut Context<Self>) {
        let epoch = self.next_refresh_epoch();
        self.schedule_auto_refresh(epoch, cx);
    }

    fn next_refresh_epoch(&mut self) -> usize {
        self.refresh_epoch = self.refresh_epoch.saturating_add(1);
        self.refresh_epoch
    }

    fn schedule_auto_refresh(&mut self, epoch: usize, cx: &mut Context<Self>) {
        if epoch != self.refresh_epoch {
            return;
        }

        self.auto_refresh_task = cx.spawn(async move |this, cx| {
            Timer::after(AUTO_REFRESH_INTERVAL).await;
            if let Some(this) = this.upgrade() {
                this.update(cx, |this, cx| {
                    this.request_snapshot_refresh(cx);
                    let next_epoch = this.next_refresh_epoch();
                    this.schedule_auto_refresh(next_epoch, cx);
                })
                .ok();
            }
        });
    }
}
