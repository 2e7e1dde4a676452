//! Task module - periodic tokio tasks owned by the dashboard

pub mod clock_task;
pub mod sampler_task;
