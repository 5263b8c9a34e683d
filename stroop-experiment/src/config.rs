use tracing::{debug, warn};

use crate::generator::DEFAULT_INCONGRUENT_PROBABILITY;

/// Built-in fallback when no source supplies an interval.
pub const DEFAULT_INTERVAL_SECONDS: u64 = 60;
/// Hard floor; anything lower would make the distractor near-continuous.
pub const MIN_INTERVAL_SECONDS: u64 = 5;

/// Key in the deployment secret store.
pub const INTERVAL_SECRET_KEY: &str = "STROOP_INTERVAL_SECONDS";
/// URL query parameter recognized by browser-hosted deployments.
pub const INTERVAL_QUERY_PARAM: &str = "stroop_interval";
/// Environment variable; highest-priority source.
pub const INTERVAL_ENV_VAR: &str = "STROOP_INTERVAL_SECONDS";

/// Raw interval values gathered from the three override sources, in ascending
/// priority order: secret store, URL query parameter, environment variable.
/// Hosts fill whichever slots apply to them (a terminal host has no URL, so
/// its `query_param` stays `None`).
#[derive(Debug, Clone, Default)]
pub struct IntervalSources {
    pub secret: Option<String>,
    pub query_param: Option<String>,
    pub env_var: Option<String>,
}

impl IntervalSources {
    /// Sources available to any process: just the environment variable.
    pub fn from_env() -> Self {
        Self {
            env_var: std::env::var(INTERVAL_ENV_VAR).ok(),
            ..Self::default()
        }
    }
}

/// Merges the interval sources once per session.
///
/// Starts from the built-in default; each present source in ascending
/// priority overrides the value resolved so far, so the environment variable
/// wins when set. A malformed value keeps the previously resolved one (never
/// fatal). The result is clamped to [`MIN_INTERVAL_SECONDS`].
pub fn resolve_interval_seconds(sources: &IntervalSources) -> u64 {
    let mut interval = DEFAULT_INTERVAL_SECONDS;
    let ordered = [
        ("secret", &sources.secret),
        ("query param", &sources.query_param),
        ("env var", &sources.env_var),
    ];
    for (origin, raw) in ordered {
        if let Some(raw) = raw {
            match raw.trim().parse::<u64>() {
                Ok(value) => {
                    debug!(origin, value, "stroop interval overridden");
                    interval = value;
                }
                Err(_) => warn!(origin, %raw, "ignoring malformed stroop interval"),
            }
        }
    }
    interval.max(MIN_INTERVAL_SECONDS)
}

/// Per-session scheduler configuration, resolved once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct SchedulerConfig {
    /// Minimum gap between trials, in seconds.
    pub interval_seconds: u64,
    /// Bias toward incongruent trials handed to the generator.
    pub incongruent_probability: f64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            interval_seconds: DEFAULT_INTERVAL_SECONDS,
            incongruent_probability: DEFAULT_INCONGRUENT_PROBABILITY,
        }
    }
}

impl SchedulerConfig {
    pub fn from_sources(sources: &IntervalSources) -> Self {
        Self {
            interval_seconds: resolve_interval_seconds(sources),
            ..Self::default()
        }
    }
}
