/// An in-flight branch switch.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutProgress {
    pub target_branch: String,
    /// Completion fraction in `[0, 1]`.
    pub value: f64,
}

impl CheckoutProgress {
    pub fn new(target_branch: impl Into<String>, value: f64) -> Self {
        let value = if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, 1.0)
        };
        Self {
            target_branch: target_branch.into(),
            value,
        }
    }

    pub fn started(target_branch: impl Into<String>) -> Self {
        Self::new(target_branch, 0.0)
    }

    pub fn from_counts(target_branch: impl Into<String>, completed: usize, total: usize) -> Self {
        let value = if total == 0 {
            0.0
        } else {
            completed as f64 / total as f64
        };
        Self::new(target_branch, value)
    }

    pub fn percent(&self) -> u32 {
        friendly_percent(self.value)
    }
}

/// Rounds a completion fraction to a whole percentage, halves rounding up.
pub fn friendly_percent(value: f64) -> u32 {
    if value.is_nan() {
        return 0;
    }
    (value.clamp(0.0, 1.0) * 100.0 + 0.5).floor() as u32
}
