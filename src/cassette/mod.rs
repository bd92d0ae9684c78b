//! Cassette format for recording and replaying gateway traffic.

pub mod format;
pub mod recorder;
pub mod replayer;
pub mod session;
