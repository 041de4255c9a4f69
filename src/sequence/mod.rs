pub(crate) mod cadence;
pub(crate) mod realtime;
pub(crate) mod sequencer;
pub(crate) mod timeline;
