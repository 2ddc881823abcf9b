use poem::http::StatusCode;
use poem::web::{Data, Json};
use poem::{handler, IntoResponse, Response};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::prelude::*;
use crate::trainer::features::FeatureVector;
use crate::web::state::State;

/// Raw numbers behind the scatter plot: every training record's living
/// area and sale price, plus the highlighted prediction point.
#[derive(Serialize)]
pub struct ScatterPlot {
    pub points: Vec<(f64, f64)>,
    pub prediction: (f64, f64),
}

#[derive(Serialize)]
pub struct PredictResponse {
    pub prediction: f64,
    pub scatter: ScatterPlot,
}

#[handler]
#[instrument(skip_all)]
pub async fn predict(
    Json(features): Json<Map<String, Value>>,
    state: Data<&State>,
) -> Response {
    let features = match FeatureVector::from_map(&features) {
        Ok(features) => features,
        Err(error) => {
            info!("{:#}", error);
            return Response::builder()
                .status(StatusCode::BAD_REQUEST)
                .body(error.to_string());
        }
    };
    let prediction = state.model.predict(&features);
    info!(prediction);
    Json(PredictResponse {
        prediction,
        scatter: ScatterPlot {
            points: state.dataset.scatter_points(),
            prediction: (features.living_area, prediction),
        },
    })
    .into_response()
}

#[handler]
#[instrument(skip_all, level = "info")]
pub async fn get_health() -> impl IntoResponse {
    StatusCode::NO_CONTENT
}
