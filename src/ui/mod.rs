pub(crate) mod events;
pub(crate) mod page;
pub(crate) mod theme;
pub(crate) mod viewport;
