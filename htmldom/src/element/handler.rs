use std::sync::Arc;

/// Event payload passed to click handlers.
///
/// Identifies the element the simulated click landed on.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    /// Tag name of the clicked element.
    pub tag: String,
    /// ID of the clicked element, if it has one.
    pub id: Option<String>,
}

/// A click handler closure attached to an element.
///
/// The closure captures its environment at creation time and receives the
/// event payload on dispatch. Cloning shares the underlying closure.
#[derive(Clone)]
pub struct ClickHandler(Arc<dyn Fn(&ClickEvent) + Send + Sync>);

impl ClickHandler {
    /// Wrap a closure as a click handler.
    pub fn new(f: impl Fn(&ClickEvent) + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Invoke the handler with the given event.
    pub fn call(&self, event: &ClickEvent) {
        (self.0)(event)
    }
}

impl std::fmt::Debug for ClickHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ClickHandler(...)")
    }
}
