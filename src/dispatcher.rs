use anyhow::Result;

use crate::branches::Branch;
use crate::checkout::CheckoutProgress;
use crate::repository::Repository;

/// Performs the repository operations requested from the branch toolbar.
///
/// Implementations run off the UI thread; `on_progress` may be called any
/// number of times before the call returns.
pub trait Dispatcher: Send + Sync {
    fn checkout_branch(
        &self,
        repository: &Repository,
        branch: &Branch,
        on_progress: &mut dyn FnMut(CheckoutProgress),
    ) -> Result<()>;
}
