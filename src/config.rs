//! Runtime configuration for [`SocialSystem`](crate::lifecycle::SocialSystem).
//!
//! Values come from the environment; anything missing or unparsable falls back to the
//! default. Log verbosity is controlled separately through `RUST_LOG`.

use tracing::warn;

pub const CHANNEL_CAPACITY_VAR: &str = "SOCIAL_GRAPH_CHANNEL_CAPACITY";
pub const SEED_VAR: &str = "SOCIAL_GRAPH_SEED";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemConfig {
    /// Capacity of the request channel in front of the graph actor.
    pub channel_capacity: usize,
    /// Whether the binary loads the demo network on start.
    pub seed_demo_data: bool,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 32,
            seed_demo_data: true,
        }
    }
}

impl SystemConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let channel_capacity = match lookup(CHANNEL_CAPACITY_VAR) {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(capacity) if capacity > 0 => capacity,
                _ => {
                    warn!(var = CHANNEL_CAPACITY_VAR, value = %raw, "Expected a positive integer, using default");
                    defaults.channel_capacity
                }
            },
            None => defaults.channel_capacity,
        };

        let seed_demo_data = match lookup(SEED_VAR) {
            Some(raw) => parse_flag(&raw).unwrap_or_else(|| {
                warn!(var = SEED_VAR, value = %raw, "Expected a boolean, using default");
                defaults.seed_demo_data
            }),
            None => defaults.seed_demo_data,
        };

        Self {
            channel_capacity,
            seed_demo_data,
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
