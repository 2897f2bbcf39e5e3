pub const COPIED_LABEL: &str = "Copied!";
pub const LABEL_RESTORE_MS: u32 = 1000;

/// A button label temporarily replaced by a confirmation.
///
/// The original is whatever the button shows at the moment of the click. A second click inside
/// the confirmation window therefore records the confirmation itself as the original.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelSwap {
    original: String,
    confirmation: String,
}

impl LabelSwap {
    pub fn begin(current_label: impl Into<String>, confirmation: impl Into<String>) -> Self {
        Self {
            original: current_label.into(),
            confirmation: confirmation.into(),
        }
    }

    pub fn confirmation(&self) -> &str {
        &self.confirmation
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn captured_stale_label(&self) -> bool {
        self.original == self.confirmation
    }
}
