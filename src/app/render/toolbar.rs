impl BranchBar {
    fn render_toolbar(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let is_dark = cx.theme().mode.is_dark();
        let brand_bg = cx
            .theme()
            .accent
            .opacity(if is_dark { 0.26 } else { 0.14 });
        let repository_label = self
            .repository
            .as_ref()
            .map(|repository| repository.name.clone())
            .unwrap_or_else(|| "No repository".to_string());

        h_flex()
            .w_full()
            .h_12()
            .flex_none()
            .items_center()
            .gap_2()
            .px_3()
            .border_b_1()
            .border_color(cx.theme().border)
            .bg(cx.theme().background)
            .child(
                h_flex()
                    .items_center()
                    .px_2()
                    .py_0p5()
                    .rounded_md()
                    .bg(brand_bg)
                    .border_1()
                    .border_color(cx.theme().accent.opacity(if is_dark { 0.62 } else { 0.42 }))
                    .child(
                        div()
                            .text_sm()
                            .font_semibold()
                            .text_color(cx.theme().foreground)
                            .child(repository_label),
                    ),
            )
            .child(self.render_branch_dropdown(cx))
    }
}
