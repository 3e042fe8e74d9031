use std::{num::NonZeroUsize, time::Duration};

use clap::{Parser, ValueEnum};
use figment::{
    providers::{Env, Serialized},
    Figment, Provider,
};
use serde::{Deserialize, Serialize};

/// Prefix of the environment variables read by the generator.
const ENV_PREFIX: &str = "EXPO_TABLE_GEN_";

/// Default interval between progress reports, in seconds.
const DEFAULT_PROGRESS_INTERVAL_SECS: u64 = 60;

/// How table entries are computed.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Arbitrary-precision integer roots, refined by exact powers.
    ///
    /// Slow at large scales, but independent from the library's own derivation.
    #[default]
    Exact,

    /// The library's native 128-bit derivation.
    Native,
}

#[derive(Clone, Parser, Serialize)]
#[command(about)]
pub struct Cli {
    /// Scale of the table to generate.
    ///
    /// The table holds `2^scale` entries.
    #[arg(value_parser = clap::value_parser!(i32).range(1..=20))]
    #[serde(skip)]
    pub scale: i32,

    /// How table entries are computed.
    ///
    /// Can also be set with `EXPO_TABLE_GEN_METHOD`. Defaults to `exact`.
    #[arg(long, value_enum)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<Method>,

    /// Number of worker threads computing entries.
    ///
    /// Can also be set with `EXPO_TABLE_GEN_WORKERS`. Defaults to the available parallelism.
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workers: Option<NonZeroUsize>,

    /// Interval between progress reports, in seconds.
    ///
    /// Can also be set with `EXPO_TABLE_GEN_PROGRESS_INTERVAL_SECS`. Defaults to 60.
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_interval_secs: Option<u64>,
}

/// Generator settings, after layering defaults, environment variables and command-line flags.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct GeneratorConfiguration {
    pub method: Method,

    #[serde(default)]
    pub workers: Option<NonZeroUsize>,

    pub progress_interval_secs: u64,
}

impl Default for GeneratorConfiguration {
    fn default() -> Self {
        Self {
            method: Method::default(),
            workers: None,
            progress_interval_secs: DEFAULT_PROGRESS_INTERVAL_SECS,
        }
    }
}

impl GeneratorConfiguration {
    /// Loads the configuration from the environment and the given command-line flags.
    ///
    /// Flags take precedence over environment variables, which take precedence over defaults.
    ///
    /// # Errors
    ///
    /// If an environment variable holds an invalid value, an error is returned.
    pub fn load(cli: &Cli) -> Result<Self, figment::Error> {
        Self::layered(cli, Env::prefixed(ENV_PREFIX))
    }

    fn layered<P: Provider>(cli: &Cli, environment: P) -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(environment)
            .merge(Serialized::defaults(cli))
            .extract()
    }

    /// Returns the number of worker threads to use.
    pub fn workers(&self) -> NonZeroUsize {
        self.workers
            .or_else(|| std::thread::available_parallelism().ok())
            .unwrap_or(NonZeroUsize::MIN)
    }

    /// Returns the interval between progress reports.
    ///
    /// A zero interval is raised to one second.
    pub fn progress_interval(&self) -> Duration {
        Duration::from_secs(self.progress_interval_secs.max(1))
    }
}
