use nalgebra::DVector;

use crate::math;
use crate::trainer::features::FeatureVector;

/// The fitted linear mapping from the five predictors to the sale price.
/// Immutable once trained and shared read-only between prediction calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub intercept: f64,

    /// One coefficient per predictor, in training order.
    pub coefficients: DVector<f64>,
}

impl Model {
    /// Applies the fitted coefficients to a single feature vector.
    ///
    /// Pure: no side effects and no range validation. An out-of-domain
    /// input yields the unclamped extrapolation.
    #[must_use]
    pub fn predict(&self, features: &FeatureVector) -> f64 {
        self.intercept + math::dot(self.coefficients.as_slice(), &features.to_array())
    }
}
