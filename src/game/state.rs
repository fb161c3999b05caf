/// Lifecycle of a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No quiz is running.
    #[default]
    Idle,
    /// Fields are hidden, the clock is running, answers are accepted.
    Active,
    /// Every hidden field has been answered correctly.
    Complete,
}
