impl BranchBar {
    fn next_checkout_epoch(&mut self) -> usize {
        self.checkout_epoch = self.checkout_epoch.saturating_add(1);
        self.checkout_epoch
    }

    pub(super) fn checkout_branch(
        &mut self,
        dispatcher: Arc<dyn Dispatcher>,
        repository: Repository,
        branch: Branch,
        cx: &mut Context<Self>,
    ) {
        if self.repository_state.is_checkout_in_progress() {
            warn!("checkout of {} requested while another is running", branch.name);
            return;
        }

        self.on_branch_dropdown_state_changed(DropdownState::Closed, cx);

        let is_current = self
            .repository_state
            .branches_state
            .tip
            .current_branch()
            .is_some_and(|current| current.name == branch.name);
        if is_current {
            return;
        }

        let target_name = branch.name_without_remote().to_string();
        let epoch = self.next_checkout_epoch();
        self.repository_state.checkout_progress = Some(CheckoutProgress::started(&target_name));
        cx.notify();

        let (progress_tx, mut progress_rx) = mpsc::unbounded::<CheckoutProgress>();
        self.checkout_task = cx.spawn(async move |this, cx| {
            let checkout = cx.background_executor().spawn(async move {
                let mut last_percent = None;
                let mut on_progress = |progress: CheckoutProgress| {
                    let percent = progress.percent();
                    if last_percent == Some(percent) {
                        return;
                    }
                    last_percent = Some(percent);
                    progress_tx.unbounded_send(progress).ok();
                };
                dispatcher.checkout_branch(&repository, &branch, &mut on_progress)
            });

            while let Some(progress) = progress_rx.next().await {
                let Some(this) = this.upgrade() else {
                    return;
                };
                let applied = this.update(cx, |this, cx| {
                    this.apply_checkout_progress(epoch, progress, cx);
                });
                if applied.is_err() {
                    return;
                }
            }

            let result = checkout.await;
            if let Some(this) = this.upgrade() {
                this.update(cx, |this, cx| {
                    if epoch != this.checkout_epoch {
                        return;
                    }

                    this.repository_state.checkout_progress = None;
                    match result {
                        Ok(()) => info!("switched to {target_name}"),
                        Err(err) => {
                            error!("failed to switch to {target_name}: {err:#}");
                            Self::push_error_notification(
                                format!("Failed to switch to {target_name}: {err:#}"),
                                cx,
                            );
                        }
                    }
                    this.force_snapshot_refresh(cx);
                    cx.notify();
                })
                .ok();
            }
        });
    }

    fn apply_checkout_progress(
        &mut self,
        epoch: usize,
        progress: CheckoutProgress,
        cx: &mut Context<Self>,
    ) {
        if epoch != self.checkout_epoch || !self.repository_state.is_checkout_in_progress() {
            return;
        }

        self.repository_state.checkout_progress = Some(progress);
        cx.notify();
    }
}
