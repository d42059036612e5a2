impl BranchBar {
    fn render_branch_foldout(
        &self,
        foldout: BranchFoldoutProps<'_>,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let view = cx.entity();
        let is_dark = cx.theme().mode.is_dark();
        let casing = self.config.label_casing;
        let pull_request_count = foldout.pull_requests.map_or(0, <[_]>::len);

        let tabs = h_flex().w_full().gap_1().children(BranchesTab::ALL.map(|tab| {
            let view = view.clone();
            let label = match tab {
                BranchesTab::PullRequests if pull_request_count > 0 => {
                    format!("{} ({pull_request_count})", tab.label(casing))
                }
                _ => tab.label(casing).to_string(),
            };
            let button = Button::new(("branches-tab", tab as usize))
                .compact()
                .rounded(px(7.0))
                .label(label)
                .on_click(move |_, _, cx| {
                    view.update(cx, |this, cx| {
                        this.select_branches_tab(tab, cx);
                    });
                });
            if tab == foldout.selected_tab {
                button.primary()
            } else {
                button.ghost()
            }
        }));

        let content = match foldout.selected_tab {
            BranchesTab::Branches => self.render_branch_list(&foldout, cx),
            BranchesTab::PullRequests => render_pull_request_list(&foldout, view.clone(), cx),
        };

        v_flex()
            .id("branch-foldout")
            .occlude()
            .mt_1()
            .w(px(360.0))
            .gap_2()
            .p_2()
            .rounded(px(8.0))
            .border_1()
            .border_color(cx.theme().border.opacity(if is_dark { 0.94 } else { 0.74 }))
            .bg(cx.theme().background.blend(cx.theme().secondary.opacity(if is_dark {
                0.32
            } else {
                0.20
            })))
            .shadow_lg()
            .on_mouse_down_out(cx.listener(|this, _, _, cx| {
                this.request_branch_dropdown_state(DropdownState::Closed, cx);
            }))
            .child(tabs)
            .child(content)
            .into_any_element()
    }

    fn render_branch_list(
        &self,
        foldout: &BranchFoldoutProps<'_>,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let view = cx.entity();
        let is_dark = cx.theme().mode.is_dark();
        let casing = self.config.label_casing;
        let filter = self.branch_filter_text(cx);
        let groups = group_branches(
            foldout.default_branch,
            foldout.recent_branches,
            foldout.all_branches,
            &filter,
        );
        let current_name = foldout.current_branch.map(|branch| branch.name.clone());
        let hover_bg = cx.theme().secondary.opacity(0.6);

        let mut rows = Vec::new();
        for group in groups {
            rows.push(
                div()
                    .pt_1()
                    .px_1()
                    .text_xs()
                    .font_semibold()
                    .text_color(cx.theme().muted_foreground)
                    .child(group.kind.label(casing))
                    .into_any_element(),
            );

            for branch in group.branches {
                let row_ix = rows.len();
                let is_current = current_name.as_deref() == Some(branch.name.as_str());
                let short_sha = branch.tip_sha.chars().take(7).collect::<String>();
                let view = view.clone();
                let dispatcher = foldout.dispatcher.clone();
                let repository = foldout.repository.clone();
                let branch_name = branch.name.clone();

                rows.push(
                    h_flex()
                        .id(("branch-row", row_ix))
                        .w_full()
                        .min_w_0()
                        .items_center()
                        .gap_2()
                        .px_2()
                        .py_0p5()
                        .rounded(px(6.0))
                        .bg(if is_current {
                            cx.theme().accent.opacity(if is_dark { 0.28 } else { 0.18 })
                        } else {
                            cx.theme().background.opacity(0.0)
                        })
                        .hover(move |this| this.bg(hover_bg))
                        .on_click(move |_, _, cx| {
                            view.update(cx, |this, cx| {
                                this.checkout_branch(
                                    dispatcher.clone(),
                                    repository.clone(),
                                    branch.clone(),
                                    cx,
                                );
                            });
                        })
                        .child(
                            div()
                                .flex_1()
                                .min_w_0()
                                .truncate()
                                .text_xs()
                                .font_medium()
                                .text_color(cx.theme().foreground)
                                .child(branch_name),
                        )
                        .child(
                            div()
                                .flex_none()
                                .text_xs()
                                .font_family(cx.theme().mono_font_family.clone())
                                .text_color(cx.theme().muted_foreground)
                                .child(short_sha),
                        )
                        .into_any_element(),
                );
            }
        }

        if rows.is_empty() {
            rows.push(
                div()
                    .p_2()
                    .text_xs()
                    .text_color(cx.theme().muted_foreground)
                    .child(if filter.trim().is_empty() {
                        "No branches.".to_string()
                    } else {
                        format!("No branches match \"{}\".", filter.trim())
                    })
                    .into_any_element(),
            );
        }

        v_flex()
            .w_full()
            .gap_1()
            .child(Input::new(&self.branch_filter_input).small().rounded(px(7.0)))
            .child(
                div()
                    .max_h(px(320.0))
                    .overflow_y_scrollbar()
                    .child(v_flex().w_full().gap_0p5().children(rows)),
            )
            .into_any_element()
    }
}

fn render_pull_request_list(
    foldout: &BranchFoldoutProps<'_>,
    view: Entity<BranchBar>,
    cx: &mut Context<BranchBar>,
) -> AnyElement {
    let pull_requests = foldout.pull_requests.unwrap_or_default();
    if pull_requests.is_empty() {
        return div()
            .p_2()
            .text_xs()
            .text_color(cx.theme().muted_foreground)
            .child("No open pull requests.")
            .into_any_element();
    }

    let current_number = foldout.current_pull_request.map(|pull_request| pull_request.number);
    let hover_bg = cx.theme().secondary.opacity(0.6);
    let current_bg = cx.theme().accent.opacity(0.18);
    let rows = pull_requests.iter().enumerate().map(|(ix, pull_request)| {
        let head_branch = foldout
            .all_branches
            .iter()
            .filter(|branch| branch.name_without_remote() == pull_request.head.ref_name)
            .min_by_key(|branch| branch.kind)
            .cloned();
        let is_current = current_number == Some(pull_request.number);
        let view = view.clone();
        let dispatcher = foldout.dispatcher.clone();
        let repository = foldout.repository.clone();

        h_flex()
            .id(("pull-request-row", ix))
            .w_full()
            .min_w_0()
            .items_center()
            .gap_2()
            .px_2()
            .py_0p5()
            .rounded(px(6.0))
            .when(is_current, |this| this.bg(current_bg))
            .when_some(head_branch, |this, branch| {
                this.hover(move |this| this.bg(hover_bg))
                    .on_click(move |_, _, cx| {
                        view.update(cx, |this, cx| {
                            this.checkout_branch(
                                dispatcher.clone(),
                                repository.clone(),
                                branch.clone(),
                                cx,
                            );
                        });
                    })
            })
            .child(
                div()
                    .flex_none()
                    .text_xs()
                    .font_family(cx.theme().mono_font_family.clone())
                    .text_color(cx.theme().muted_foreground)
                    .child(format!("#{}", pull_request.number)),
            )
            .child(
                v_flex()
                    .flex_1()
                    .min_w_0()
                    .child(
                        div()
                            .truncate()
                            .text_xs()
                            .font_medium()
                            .text_color(cx.theme().foreground)
                            .child(pull_request.title.clone()),
                    )
                    .child(
                        div()
                            .truncate()
                            .text_xs()
                            .text_color(cx.theme().muted_foreground)
                            .child(format!(
                                "{} wants to merge {} into {}",
                                pull_request.author,
                                pull_request.head.ref_name,
                                pull_request.base.ref_name
                            )),
                    ),
            )
            .into_any_element()
    });

    div()
        .max_h(px(320.0))
        .overflow_y_scrollbar()
        .child(v_flex().w_full().gap_0p5().children(rows))
        .into_any_element()
}
