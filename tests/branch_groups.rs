use branchbar::branches::{Branch, BranchGroup, BranchGroupKind, BranchesTab, group_branches};
use branchbar::labels::LabelCasing;

fn names(group: &BranchGroup) -> Vec<&str> {
    group.branches.iter().map(|branch| branch.name.as_str()).collect()
}

fn fixture() -> (Branch, Vec<Branch>, Vec<Branch>) {
    let main = Branch::local("main", "a1").with_upstream("origin/main");
    let feature = Branch::local("feature/login", "b2").with_upstream("origin/feature/login");
    let docs = Branch::local("docs", "c3");
    let bugfix = Branch::local("bugfix", "d4");
    let remote_main = Branch::remote("origin/main", "a1");
    let remote_feature = Branch::remote("origin/feature/login", "b2");
    let remote_only = Branch::remote("origin/release", "e5");

    let all = vec![
        remote_only,
        docs.clone(),
        main.clone(),
        remote_main,
        feature.clone(),
        bugfix,
        remote_feature,
    ];
    let recent = vec![feature, main.clone(), docs];
    (main, recent, all)
}

#[test]
fn groups_default_recent_and_other_branches() {
    let (main, recent, all) = fixture();
    let groups = group_branches(Some(&main), &recent, &all, "");

    assert_eq!(groups.len(), 3);
    assert_eq!(groups[0].kind, BranchGroupKind::Default);
    assert_eq!(names(&groups[0]), vec!["main"]);
    assert_eq!(groups[1].kind, BranchGroupKind::Recent);
    assert_eq!(names(&groups[1]), vec!["feature/login", "docs"]);
    assert_eq!(groups[2].kind, BranchGroupKind::Other);
    assert_eq!(names(&groups[2]), vec!["bugfix", "origin/release"]);
}

#[test]
fn filter_is_case_insensitive_and_drops_empty_groups() {
    let (main, recent, all) = fixture();
    let groups = group_branches(Some(&main), &recent, &all, "  LOGIN ");

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].kind, BranchGroupKind::Recent);
    assert_eq!(names(&groups[0]), vec!["feature/login"]);
}

#[test]
fn filter_can_match_nothing() {
    let (main, recent, all) = fixture();
    assert!(group_branches(Some(&main), &recent, &all, "does-not-exist").is_empty());
}

#[test]
fn without_default_branch_everything_else_is_grouped() {
    let (_, _, all) = fixture();
    let groups = group_branches(None, &[], &all, "");

    assert_eq!(groups.len(), 1);
    assert_eq!(
        names(&groups[0]),
        vec!["bugfix", "docs", "feature/login", "main", "origin/release"]
    );
}

#[test]
fn remote_branch_with_same_local_name_is_hidden() {
    let local = Branch::local("topic", "f6");
    let remote = Branch::remote("upstream/topic", "f6");
    let groups = group_branches(None, &[], &[remote, local], "");

    assert_eq!(names(&groups[0]), vec!["topic"]);
}

#[test]
fn remote_name_strips_remote_prefix() {
    assert_eq!(
        Branch::remote("origin/feature/login", "b2").name_without_remote(),
        "feature/login"
    );
    assert_eq!(Branch::local("feature/login", "b2").name_without_remote(), "feature/login");
}

#[test]
fn group_and_tab_labels_follow_casing() {
    assert_eq!(BranchGroupKind::Recent.label(LabelCasing::Title), "Recent Branches");
    assert_eq!(BranchGroupKind::Recent.label(LabelCasing::Sentence), "Recent branches");
    assert_eq!(BranchGroupKind::Default.label(LabelCasing::Sentence), "Default branch");
    assert_eq!(BranchesTab::PullRequests.label(LabelCasing::Title), "Pull Requests");
    assert_eq!(BranchesTab::Branches.label(LabelCasing::Sentence), "Branches");
}
