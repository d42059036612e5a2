use std::time::Duration;

use gpui::{Animation, AnimationExt as _, Transformation, anchored, deferred, percentage, relative};
use gpui_component::{Selectable as _, Sizable as _};
use gpui_component::button::{Button, ButtonVariants as _};
use gpui_component::input::Input;
use gpui_component::{Icon, IconName};

use super::assets::ToolbarIcon;
use super::*;
use branchbar::branches::group_branches;
use branchbar::dropdown::{
    BranchDropdownModel, BranchFoldoutProps, DropdownState, DropdownTitle, IconAnimation,
};
use branchbar::pull_request::{CheckState, PullRequestBadge};

const SPIN_DURATION: Duration = Duration::from_millis(1200);

include!("toolbar.rs");
include!("branch_dropdown.rs");
include!("branch_foldout.rs");
include!("pull_request_badge.rs");
include!("root.rs");
