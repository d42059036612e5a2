use std::path::{Path, PathBuf};

use crate::branches::BranchesState;
use crate::checkout::CheckoutProgress;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub name: String,
    pub path: PathBuf,
}

impl Repository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| path.display().to_string());
        Self { name, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Per-repository snapshot the toolbar renders from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RepositoryState {
    pub branches_state: BranchesState,
    pub checkout_progress: Option<CheckoutProgress>,
}

impl RepositoryState {
    pub fn is_checkout_in_progress(&self) -> bool {
        self.checkout_progress.is_some()
    }
}
