//! Loads the housing dataset, fits the price model once, and serves the
//! dashboard with both injected as immutable process-lifetime state.

use clap::Parser;

mod dataset;
mod error;
mod math;
mod opts;
mod prelude;
mod serde;
mod tracing;
mod trainer;
mod web;

use crate::dataset::Dataset;
use crate::opts::Opts;
use crate::prelude::*;
use crate::web::state::State;

#[tokio::main]
async fn main() -> Result {
    let opts = Opts::parse();
    crate::tracing::init()?;

    let dataset = Dataset::load(&opts.dataset).context("failed to load the dataset")?;
    let model = trainer::train(&dataset).context("failed to train the model")?;
    web::run(&opts.host, opts.port, State::new(dataset, model)).await
}
