//! Configuration for the sample data generator.
//!
//! Every flag can also be supplied through the environment
//! (e.g. `OUTPUT_DIR`, `SEED`), which is how the build step sets them.

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use crate::data::DatasetSpec;

/// Install the fmt subscriber. `RUST_LOG` overrides the default `info` level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[derive(Debug, Clone, clap::Parser)]
#[clap(about = "Generate a sample dataset and its insight report")]
pub struct GeneratorConfig {
    /// Directory the JSON outputs are written to.
    #[clap(long, env, default_value = "output")]
    pub output_dir: PathBuf,

    /// Seed for the dataset RNG.
    #[clap(long, env, default_value_t = 42)]
    pub seed: u64,

    /// Number of order records to generate.
    #[clap(long, env, default_value_t = 120)]
    pub orders: usize,

    /// Number of email entries to generate.
    #[clap(long, env, default_value_t = 60)]
    pub emails: usize,

    /// Number of measurement slots to generate.
    #[clap(long, env, default_value_t = 90)]
    pub measurements: usize,
}

impl GeneratorConfig {
    pub fn dataset_spec(&self) -> DatasetSpec {
        DatasetSpec {
            seed: self.seed,
            orders: self.orders,
            emails: self.emails,
            measurements: self.measurements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::try_parse_from(["generate_outputs"]).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("output"));
        assert_eq!(config.dataset_spec(), DatasetSpec::default());
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = GeneratorConfig::try_parse_from([
            "generate_outputs",
            "--output-dir",
            "/tmp/insights",
            "--seed",
            "7",
            "--orders",
            "10",
        ])
        .unwrap();
        assert_eq!(config.output_dir, PathBuf::from("/tmp/insights"));
        assert_eq!(config.seed, 7);
        assert_eq!(config.dataset_spec().orders, 10);
    }
}
