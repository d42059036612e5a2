impl BranchBar {
    pub(super) fn branch_dropdown_props(&self) -> Option<BranchDropdownProps<'_>> {
        let repository = self.repository.as_ref()?;
        Some(BranchDropdownProps {
            dispatcher: &self.dispatcher,
            repository,
            repository_state: &self.repository_state,
            is_open: self.branch_dropdown_open,
            selected_tab: self.selected_tab,
            pull_requests: self.pull_requests.as_deref(),
            current_pull_request: self.current_pull_request.as_ref(),
            label_casing: self.config.label_casing,
            enable_preview_features: self.config.enable_preview_features,
        })
    }

    pub(super) fn request_branch_dropdown_state(
        &mut self,
        requested: DropdownState,
        cx: &mut Context<Self>,
    ) {
        let mut next_state = None;
        if let Some(props) = self.branch_dropdown_props() {
            props.request_state_change(requested, |state| next_state = Some(state));
        }

        match next_state {
            Some(state) => self.on_branch_dropdown_state_changed(state, cx),
            None => debug!("branch dropdown {requested:?} request ignored"),
        }
    }

    fn on_branch_dropdown_state_changed(&mut self, state: DropdownState, cx: &mut Context<Self>) {
        let open = state.is_open();
        if self.branch_dropdown_open == open {
            return;
        }

        self.branch_dropdown_open = open;
        cx.notify();
    }

    pub(super) fn select_branches_tab(&mut self, tab: BranchesTab, cx: &mut Context<Self>) {
        if self.selected_tab == tab {
            return;
        }

        self.selected_tab = tab;
        self.app_state.selected_tab = tab;
        self.persist_app_state();
        cx.notify();
    }

    pub(super) fn branch_filter_text(&self, cx: &Context<Self>) -> String {
        self.branch_filter_input.read(cx).value().to_string()
    }
}
