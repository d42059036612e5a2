use anyhow::Context as _;
use futures::StreamExt as _;
use futures::channel::mpsc;
use tracing::{debug, error, info, warn};

use super::*;
use branchbar::checkout::CheckoutProgress;
use branchbar::dropdown::{BranchDropdownProps, DropdownState};
use branchbar::git::{discover_repository, load_repository_state};
use branchbar::pull_request::find_current_pull_request;

include!("core.rs");
include!("refresh.rs");
include!("dropdown.rs");
include!("checkout.rs");
