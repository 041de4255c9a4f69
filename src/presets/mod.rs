//! Specializations of [`Sequence`](crate::Sequence) for the page animations.

pub(crate) mod contact;
pub(crate) mod counter;
pub(crate) mod loading;
pub(crate) mod rain;
pub(crate) mod terminal;
pub(crate) mod typewriter;
