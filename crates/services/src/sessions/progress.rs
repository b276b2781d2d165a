/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: usize,
    /// 1-based number of the question on screen; equals `total` once finished.
    pub current_number: usize,
    pub answered: usize,
    pub is_complete: bool,
}
