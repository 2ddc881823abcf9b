use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::prelude::*;

/// Initialises tracing.
pub fn init() -> Result {
    let format_filter = EnvFilter::try_from_env("HOUSING_DASHBOARD_LOG")
        .or_else(|_| EnvFilter::try_new("housing_dashboard=info,poem=info"))?;
    let format_layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_filter(format_filter);

    tracing_subscriber::Registry::default()
        .with(format_layer)
        .init();
    Ok(())
}
