use std::collections::BTreeMap;

/// Fraction of an element that must be on screen before it counts as visible.
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Fire-once visibility observation, keyed by element id.
///
/// Each observed element carries a payload. The first visibility report at or above the
/// threshold hands the payload back and drops the observation, so later reports for the same
/// element are ignored.
#[derive(Debug)]
pub struct VisibilityTrigger<T> {
    threshold: f64,
    observed: BTreeMap<String, T>,
}

impl<T> Default for VisibilityTrigger<T> {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl<T> VisibilityTrigger<T> {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            observed: BTreeMap::new(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Start observing `element`. Replaces any payload still waiting for the same element.
    pub fn observe(&mut self, element: impl Into<String>, payload: T) -> Option<T> {
        self.observed.insert(element.into(), payload)
    }

    pub fn unobserve(&mut self, element: &str) -> Option<T> {
        self.observed.remove(element)
    }

    pub fn is_observing(&self, element: &str) -> bool {
        self.observed.contains_key(element)
    }

    pub fn pending(&self) -> usize {
        self.observed.len()
    }

    /// Report how much of `element` is visible. Returns the payload on the first qualifying
    /// report only.
    pub fn report(&mut self, element: &str, visible_ratio: f64) -> Option<T> {
        if !(visible_ratio > 0.0 && visible_ratio >= self.threshold) {
            return None;
        }
        let payload = self.observed.remove(element)?;
        tracing::debug!(element, visible_ratio, "element entered viewport");
        Some(payload)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ui/viewport.rs"]
mod tests;
