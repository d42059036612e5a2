impl BranchBar {
    fn render_body(&self, cx: &mut Context<Self>) -> AnyElement {
        let (headline, detail) = match (&self.repository, &self.error_message) {
            (_, Some(error)) => (
                "Open this app from a Git repository to switch branches.".to_string(),
                Some(error.clone()),
            ),
            (Some(repository), None) => (
                repository.path.display().to_string(),
                Some(format!(
                    "{} branches",
                    self.repository_state.branches_state.all_branches.len()
                )),
            ),
            (None, None) => ("Loading repository…".to_string(), None),
        };

        v_flex()
            .flex_1()
            .min_h_0()
            .items_center()
            .justify_center()
            .gap_1()
            .child(
                div()
                    .text_sm()
                    .text_color(cx.theme().foreground)
                    .child(headline),
            )
            .when_some(detail, |this, detail| {
                this.child(
                    div()
                        .text_xs()
                        .text_color(cx.theme().muted_foreground)
                        .child(detail),
                )
            })
            .into_any_element()
    }
}

impl Render for BranchBar {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex()
            .size_full()
            .relative()
            .bg(cx.theme().background)
            .text_color(cx.theme().foreground)
            .child(self.render_toolbar(cx))
            .child(self.render_body(cx))
            .children(Root::render_dialog_layer(window, cx))
            .children(Root::render_notification_layer(window, cx))
    }
}
