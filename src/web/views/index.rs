use maud::{html, Markup, PreEscaped, DOCTYPE};
use poem::web::{Data, Form, Html};
use poem::{handler, IntoResponse, Response};

use crate::dataset::Dataset;
use crate::prelude::*;
use crate::trainer::features::FeatureVector;
use crate::web::partials::*;
use crate::web::state::State;

/// Form defaults, matching the suggested mid-range house.
const DEFAULTS: FeatureVector = FeatureVector {
    living_area: 1500.0,
    basement_area: 800.0,
    overall_quality: 5.0,
    year_built: 2000.0,
    garage_capacity: 2.0,
};

/// Home page with the feature form.
#[handler]
#[instrument(skip_all)]
pub async fn get(state: Data<&State>) -> Response {
    Html(render(*state, &DEFAULTS, None).into_string()).into_response()
}

/// Accepts the submitted features and re-renders the page with the
/// estimate and the scatter chart.
#[handler]
#[instrument(skip_all)]
pub async fn post(Form(features): Form<FeatureVector>, state: Data<&State>) -> Response {
    let prediction = state.model.predict(&features);
    info!(prediction);
    Html(render(*state, &features, Some(prediction)).into_string()).into_response()
}

fn render(state: &State, features: &FeatureVector, prediction: Option<f64>) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                (headers())
                @if prediction.is_some() {
                    script defer src="https://cdnjs.cloudflare.com/ajax/libs/Chart.js/3.7.0/chart.min.js" crossorigin="anonymous" referrerpolicy="no-referrer" {}
                }
                title { "House Price Predictor" }
            }
            body {
                section.section {
                    div.container {
                        h1.title { "🏠 House Price Predictor" }
                        h2.subtitle { "Enter House Features" }

                        form method="POST" action="/" {
                            div.columns {
                                div.column {
                                    (number_field("living_area", "Living Area (sq ft)", features.living_area, 500, 4000))
                                    (number_field("basement_area", "Basement Area (sq ft)", features.basement_area, 0, 2000))
                                    (number_field("overall_quality", "Overall Quality (1-10)", features.overall_quality, 1, 10))
                                }
                                div.column {
                                    (number_field("year_built", "Year Built", features.year_built, 1870, 2023))
                                    (number_field("garage_capacity", "Garage Capacity (Cars)", features.garage_capacity, 0, 4))
                                }
                            }
                            div.field {
                                div.control {
                                    button.button.is-link type="submit" { "Predict Price" }
                                }
                            }
                        }

                        @if let Some(prediction) = prediction {
                            div.notification.is-success."mt-4" {
                                strong { "Estimated Price: " (format_dollars(prediction)) }
                            }
                            div.box."mt-4" {
                                canvas id="scatter" {}
                            }
                            (scatter_script(&state.dataset, features.living_area, prediction))
                        }
                    }
                }

                (footer())
            }
        }
    }
}

/// Inlines the chart payload: every training sale plus the highlighted
/// prediction point.
fn scatter_script(dataset: &Dataset, living_area: f64, prediction: f64) -> Markup {
    let sales = serde_json::Value::from(
        dataset
            .scatter_points()
            .into_iter()
            .map(|(x, y)| serde_json::json!({ "x": x, "y": y }))
            .collect::<Vec<_>>(),
    );
    let predicted = serde_json::json!([{ "x": living_area, "y": prediction }]);
    html! {
        script type="module" {
            (PreEscaped(format!(
                r#"
                "use strict";

                new Chart(document.getElementById("scatter"), {{
                    type: "scatter",
                    data: {{
                        datasets: [
                            {{ label: "Training sales", data: {sales}, backgroundColor: "rgba(50, 115, 220, 0.4)" }},
                            {{ label: "Prediction", data: {predicted}, backgroundColor: "red", pointRadius: 8 }},
                        ],
                    }},
                    options: {{
                        scales: {{
                            x: {{ title: {{ display: true, text: "Living area, sq ft" }} }},
                            y: {{ title: {{ display: true, text: "Sale price, $" }} }},
                        }},
                    }},
                }});
                "#
            )))
        }
    }
}
