pub mod config;
pub mod generator;
pub mod scheduler;

pub use config::{resolve_interval_seconds, IntervalSources, SchedulerConfig};
pub use generator::{generate_trial, DEFAULT_INCONGRUENT_PROBABILITY};
pub use scheduler::{SchedulerEvent, SchedulerState, StroopScheduler};
