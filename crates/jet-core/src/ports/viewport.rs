/// Front-end view the form is rendered into.
pub trait ViewportPort: Send + Sync {
    /// Bring the top of the form into view after a step change.
    fn scroll_to_top(&self);
}
