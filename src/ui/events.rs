use crate::ui::theme::Theme;

/// Page events that UI pieces publish to each other.
#[derive(Clone, Debug, PartialEq)]
pub enum UiEvent {
    ThemeChanged(Theme),
    /// A tab or project filter was picked; animations tracked under `group` are interrupted.
    FilterSelected { group: String, value: String },
    /// The page is going away; every running animation is torn down.
    Teardown,
}

/// Token returned by [`EventBus::subscribe`]; pass it back to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Subscription(u64);

/// Typed publish/subscribe with explicit teardown. Single-threaded.
pub struct EventBus<E> {
    next_id: u64,
    handlers: Vec<(Subscription, Box<dyn FnMut(&E)>)>,
}

impl<E> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> EventBus<E> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            handlers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, handler: impl FnMut(&E) + 'static) -> Subscription {
        let sub = Subscription(self.next_id);
        self.next_id += 1;
        self.handlers.push((sub, Box::new(handler)));
        sub
    }

    /// Returns `false` if `sub` was already removed.
    pub fn unsubscribe(&mut self, sub: Subscription) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(s, _)| *s != sub);
        self.handlers.len() != before
    }

    pub fn clear(&mut self) {
        self.handlers.clear();
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Deliver `event` to every handler in subscription order. Returns how many saw it.
    pub fn emit(&mut self, event: &E) -> usize {
        for (_, handler) in &mut self.handlers {
            handler(event);
        }
        self.handlers.len()
    }
}

impl<E> std::fmt::Debug for EventBus<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ui/events.rs"]
mod tests;
