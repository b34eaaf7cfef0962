use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root of `config.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct RootConfig {
    pub latency: LatencyConfig,
    pub seed: SeedConfig,
    pub log_level: LogLevel,
}

/// Simulated network round-trip windows, in milliseconds.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LatencyConfig {
    pub create_ms: u64,
    pub update_ms: u64,
    pub delete_ms: u64,
    pub initial_load_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            create_ms: 500,
            update_ms: 500,
            delete_ms: 300,
            initial_load_ms: 800,
        }
    }
}

impl LatencyConfig {
    /// No simulated latency at all.
    pub fn immediate() -> Self {
        Self {
            create_ms: 0,
            update_ms: 0,
            delete_ms: 0,
            initial_load_ms: 0,
        }
    }

    pub fn create(&self) -> Duration {
        Duration::from_millis(self.create_ms)
    }

    pub fn update(&self) -> Duration {
        Duration::from_millis(self.update_ms)
    }

    pub fn delete(&self) -> Duration {
        Duration::from_millis(self.delete_ms)
    }

    pub fn initial_load(&self) -> Duration {
        Duration::from_millis(self.initial_load_ms)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SeedConfig {
    /// Number of generated profiles loaded at startup.
    pub count: usize,
    /// RNG seed; the same seed always produces the same directory.
    pub rng_seed: u64,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            count: 12,
            rng_seed: 123,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}
