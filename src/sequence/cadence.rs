use crate::foundation::core::Millis;

/// Interval between two ticks of a sequence.
///
/// `Fixed` is a plain interval timer. `Dynamic` is consulted with the state produced by the tick
/// that just ran, which lets a typewriter slow down while typing and hold at a full line.
pub enum Cadence<S> {
    Fixed(Millis),
    Dynamic(Box<dyn FnMut(&S) -> Millis>),
}

impl<S> Cadence<S> {
    /// Same interval after every tick.
    pub fn fixed(interval: Millis) -> Self {
        Self::Fixed(interval)
    }

    /// Interval chosen by `f` from the state the last tick produced (the initial state before
    /// the first tick). A zero result is treated as 1ms by the timeline.
    pub fn dynamic(f: impl FnMut(&S) -> Millis + 'static) -> Self {
        Self::Dynamic(Box::new(f))
    }

    /// Delay before the tick that follows `state`.
    pub fn next(&mut self, state: &S) -> Millis {
        match self {
            Self::Fixed(interval) => *interval,
            Self::Dynamic(f) => f(state),
        }
    }
}

impl<S> From<Millis> for Cadence<S> {
    fn from(value: Millis) -> Self {
        Self::Fixed(value)
    }
}

impl<S> std::fmt::Debug for Cadence<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixed(interval) => f.debug_tuple("Fixed").field(interval).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}
