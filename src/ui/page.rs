use std::collections::BTreeMap;

use crate::sequence::timeline::{SequenceHandle, Timeline};
use crate::ui::events::UiEvent;

/// Running animations grouped by the page control that owns them.
///
/// A [`UiEvent::FilterSelected`] interrupts whatever is still running in its group (a tab switch
/// stops the counters of the tab it leaves); [`UiEvent::Teardown`] stops everything on the
/// timeline.
#[derive(Debug, Default)]
pub struct PageAnimations {
    groups: BTreeMap<String, Vec<SequenceHandle>>,
}

impl PageAnimations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tie `handle` to `group` so the group's next filter change interrupts it.
    pub fn track(&mut self, group: impl Into<String>, handle: SequenceHandle) {
        self.groups.entry(group.into()).or_default().push(handle);
    }

    /// Handles tracked under `group` that have not been interrupted yet.
    pub fn tracked(&self, group: &str) -> &[SequenceHandle] {
        self.groups.get(group).map_or(&[], Vec::as_slice)
    }

    /// Apply `event` to `timeline`. Returns how many live sequences were cancelled.
    pub fn handle(&mut self, event: &UiEvent, timeline: &mut Timeline) -> usize {
        match event {
            UiEvent::FilterSelected { group, value } => {
                let Some(handles) = self.groups.remove(group) else {
                    return 0;
                };
                let stopped = handles.into_iter().filter(|h| timeline.cancel(*h)).count();
                tracing::debug!(group, value, stopped, "filter interrupted animations");
                stopped
            }
            UiEvent::Teardown => {
                self.groups.clear();
                let stopped = timeline.cancel_all();
                tracing::debug!(stopped, "page torn down");
                stopped
            }
            UiEvent::ThemeChanged(_) => 0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ui/page.rs"]
mod tests;
