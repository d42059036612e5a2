impl BranchBar {
    fn render_branch_dropdown(&self, cx: &mut Context<Self>) -> AnyElement {
        let Some(props) = self.branch_dropdown_props() else {
            return div().into_any_element();
        };
        let Some(model) = props.model() else {
            return div().into_any_element();
        };

        let view = cx.entity();
        let is_dark = cx.theme().mode.is_dark();
        let displayed_state = model.displayed_state(props.is_open);
        let badge = props.pull_request_badge(&model);
        let foldout = props
            .foldout(&model)
            .map(|foldout| self.render_branch_foldout(foldout, cx));

        let button = Button::new("branch-dropdown")
            .ghost()
            .rounded(px(7.0))
            .h(px(40.0))
            .min_w(px(220.0))
            .when(displayed_state.is_open(), |this| this.selected(true))
            .tooltip(model.tooltip.clone())
            .child(
                h_flex()
                    .w_full()
                    .items_center()
                    .gap_2()
                    .child(render_branch_icon(&model))
                    .child(
                        v_flex()
                            .flex_1()
                            .min_w_0()
                            .items_start()
                            .child(
                                div()
                                    .text_xs()
                                    .text_color(cx.theme().muted_foreground)
                                    .child(model.description.clone()),
                            )
                            .child(render_dropdown_title(&model.title, cx)),
                    )
                    .when_some(badge, |this, badge| {
                        this.child(render_pull_request_badge(badge, cx))
                    })
                    .when(model.show_disclosure_arrow(), |this| {
                        this.child(
                            Icon::new(if displayed_state.is_open() {
                                IconName::ChevronUp
                            } else {
                                IconName::ChevronDown
                            })
                            .size(px(14.0))
                            .text_color(cx.theme().muted_foreground),
                        )
                    }),
            )
            .on_click(move |_, _, cx| {
                view.update(cx, |this, cx| {
                    this.request_branch_dropdown_state(displayed_state.toggled(), cx);
                });
            });

        v_flex()
            .relative()
            .child(button)
            .when_some(model.progress_value, |this, value| {
                this.child(
                    div()
                        .absolute()
                        .left_0()
                        .bottom_0()
                        .h(px(2.0))
                        .w(relative(value as f32))
                        .rounded(px(1.0))
                        .bg(cx.theme().accent.opacity(if is_dark { 0.82 } else { 0.66 })),
                )
            })
            .when_some(foldout, |this, foldout| {
                this.child(
                    deferred(
                        anchored()
                            .snap_to_window_with_margin(px(8.0))
                            .child(foldout),
                    )
                    .with_priority(1),
                )
            })
            .into_any_element()
    }
}

fn render_branch_icon(model: &BranchDropdownModel) -> AnyElement {
    let icon = Icon::new(ToolbarIcon(model.icon)).size(px(16.0));
    match model.icon_animation {
        Some(IconAnimation::Spin) => icon
            .with_animation(
                "branch-dropdown-icon-spin",
                Animation::new(SPIN_DURATION).repeat(),
                |icon, delta| icon.transform(Transformation::rotate(percentage(delta))),
            )
            .into_any_element(),
        None => icon.into_any_element(),
    }
}

fn render_dropdown_title(title: &DropdownTitle, cx: &mut Context<BranchBar>) -> AnyElement {
    match title {
        DropdownTitle::Text(text) => div()
            .truncate()
            .text_sm()
            .font_semibold()
            .text_color(cx.theme().foreground)
            .child(text.clone())
            .into_any_element(),
        DropdownTitle::Path(path) => h_flex()
            .min_w_0()
            .text_sm()
            .when(!path.directory.is_empty(), |this| {
                this.child(
                    div()
                        .min_w_0()
                        .truncate()
                        .text_color(cx.theme().muted_foreground)
                        .child(path.directory.clone()),
                )
            })
            .child(
                div()
                    .flex_none()
                    .font_semibold()
                    .text_color(cx.theme().foreground)
                    .child(path.file_name.clone()),
            )
            .into_any_element(),
    }
}
