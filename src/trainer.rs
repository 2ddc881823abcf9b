//! Fits the sale price regression.
//!
//! Ordinary least squares in closed form: the design matrix carries an
//! intercept column, and the coefficients come out of a minimum-norm
//! SVD solve, so an under-determined sample still yields the exact
//! least-squares fit instead of aborting.

pub mod features;
pub mod model;

use nalgebra::{DMatrix, DVector};

use crate::dataset::{Dataset, PREDICTOR_COLUMNS};
use crate::error::Error;
use crate::prelude::*;
use crate::trainer::features::FeatureVector;
use crate::trainer::model::Model;

const N_PREDICTORS: usize = PREDICTOR_COLUMNS.len();

/// Fits the model on the entire dataset.
///
/// Deterministic: the same dataset always produces the same coefficients.
#[instrument(skip_all, fields(n_records = dataset.len()))]
pub fn train(dataset: &Dataset) -> StdResult<Model, Error> {
    if dataset.is_empty() {
        return Err(Error::Training {
            reason: "the dataset is empty",
        });
    }

    let mut design = DMatrix::zeros(dataset.len(), N_PREDICTORS + 1);
    let mut target = DVector::zeros(dataset.len());
    for (i, record) in dataset.records.iter().enumerate() {
        design[(i, 0)] = 1.0;
        for (j, predictor) in FeatureVector::from(record).to_array().into_iter().enumerate() {
            design[(i, j + 1)] = predictor;
        }
        target[i] = record.sale_price;
    }

    let beta = solve_least_squares(design, &target)?;
    if beta.iter().any(|coefficient| !coefficient.is_finite()) {
        return Err(Error::Training {
            reason: "the solve produced non-finite coefficients",
        });
    }

    let model = Model {
        intercept: beta[0],
        coefficients: beta.rows(1, N_PREDICTORS).into_owned(),
    };
    info!(intercept = model.intercept, "fitted");
    Ok(model)
}

/// Least-squares coefficients of `design · β ≈ target`.
///
/// Singular values below the relative tolerance are treated as zero,
/// which makes a rank-deficient sample resolve to the minimum-norm
/// solution rather than blow up.
fn solve_least_squares(
    design: DMatrix<f64>,
    target: &DVector<f64>,
) -> StdResult<DVector<f64>, Error> {
    let svd = design.svd(true, true);
    let epsilon = svd.singular_values.max() * 1e-12;
    svd.solve(target, epsilon)
        .map_err(|reason| Error::Training { reason })
}
