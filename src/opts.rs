//! CLI options.

use std::path::PathBuf;

use clap::Parser;

/// Runs the housing price dashboard.
#[derive(Parser)]
#[clap(version)]
pub struct Opts {
    /// Host to bind the web application to
    #[clap(long, env = "HOUSING_DASHBOARD_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind the web application to
    #[clap(long, env = "HOUSING_DASHBOARD_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Path to the housing dataset
    #[clap(long, env = "HOUSING_DASHBOARD_DATASET", default_value = "train.csv")]
    pub dataset: PathBuf,
}
