use std::borrow::Cow;

use anyhow::Result;
use gpui::{AssetSource, SharedString};
use gpui_component::IconNamed;

use branchbar::dropdown::BranchIcon;

const GIT_BRANCH_ICON: &str = "icons/branchbar/git-branch.svg";
const GIT_PULL_REQUEST_ICON: &str = "icons/branchbar/git-pull-request.svg";
const GIT_COMMIT_ICON: &str = "icons/branchbar/git-commit.svg";
const SYNC_ICON: &str = "icons/branchbar/sync.svg";

const EMBEDDED_ICONS: [(&str, &[u8]); 4] = [
    (
        GIT_BRANCH_ICON,
        include_bytes!("../../assets/icons/git-branch.svg"),
    ),
    (
        GIT_PULL_REQUEST_ICON,
        include_bytes!("../../assets/icons/git-pull-request.svg"),
    ),
    (
        GIT_COMMIT_ICON,
        include_bytes!("../../assets/icons/git-commit.svg"),
    ),
    (SYNC_ICON, include_bytes!("../../assets/icons/sync.svg")),
];

/// Toolbar icons layered over the gpui-component icon set.
pub(super) struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if let Some((_, bytes)) = EMBEDDED_ICONS.iter().find(|(name, _)| *name == path) {
            return Ok(Some(Cow::Borrowed(*bytes)));
        }
        gpui_component_assets::Assets.load(path)
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let mut entries = gpui_component_assets::Assets.list(path)?;
        entries.extend(
            EMBEDDED_ICONS
                .iter()
                .filter(|(name, _)| name.starts_with(path))
                .map(|(name, _)| SharedString::from(*name)),
        );
        Ok(entries)
    }
}

#[derive(Debug, Clone, Copy)]
pub(super) struct ToolbarIcon(pub BranchIcon);

impl IconNamed for ToolbarIcon {
    fn path(self) -> SharedString {
        match self.0 {
            BranchIcon::Branch => GIT_BRANCH_ICON,
            BranchIcon::PullRequest => GIT_PULL_REQUEST_ICON,
            BranchIcon::Commit => GIT_COMMIT_ICON,
            BranchIcon::Sync => SYNC_ICON,
        }
        .into()
    }
}
