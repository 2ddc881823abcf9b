use crate::dataset::Dataset;
use crate::prelude::*;
use crate::trainer::model::Model;

/// Web application global state.
///
/// The dataset and the model are built once at startup and injected here
/// as immutable dependencies: every prediction call shares them read-only,
/// with no invalidation path for the process lifetime.
#[derive(Clone)]
pub struct State {
    pub dataset: Arc<Dataset>,
    pub model: Arc<Model>,
}

impl State {
    #[must_use]
    pub fn new(dataset: Dataset, model: Model) -> Self {
        Self {
            dataset: Arc::new(dataset),
            model: Arc::new(model),
        }
    }
}
