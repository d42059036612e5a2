fn render_pull_request_badge(badge: PullRequestBadge, cx: &mut Context<BranchBar>) -> AnyElement {
    let status_color = badge.status.as_ref().map(|status| match status.state {
        CheckState::Pending => cx.theme().warning,
        CheckState::Success => cx.theme().success,
        CheckState::Failure => cx.theme().danger,
    });
    let tooltip = badge
        .status
        .as_ref()
        .map(|status| status.summary())
        .unwrap_or_else(|| "No checks reported".to_string());

    h_flex()
        .id(("pull-request-badge", badge.number as usize))
        .flex_none()
        .items_center()
        .gap_1()
        .px_1p5()
        .py_0p5()
        .rounded(px(10.0))
        .bg(cx.theme().secondary)
        .border_1()
        .border_color(cx.theme().border)
        .tooltip(move |window, cx| {
            gpui_component::tooltip::Tooltip::new(tooltip.clone()).build(window, cx)
        })
        .when_some(status_color, |this, color| {
            this.child(div().size(px(6.0)).rounded_full().bg(color))
        })
        .child(
            div()
                .text_xs()
                .font_family(cx.theme().mono_font_family.clone())
                .text_color(cx.theme().foreground)
                .child(badge.label()),
        )
        .into_any_element()
}
