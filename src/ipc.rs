//! IPC module - shared state cells, event log, and snapshot channels

pub mod channels;
pub mod shared_resource;

pub use channels::DashboardChannels;
pub use shared_resource::{ConfigBuffer, EventLog, SnapshotCell};
