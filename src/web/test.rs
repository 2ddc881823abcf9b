use poem::http::StatusCode;
use poem::test::TestClient;
use poem::Endpoint;
use serde_json::json;

use crate::dataset::{Dataset, HousingRecord};
use crate::prelude::*;
use crate::trainer;
use crate::web::create_app;
use crate::web::state::State;

fn test_client() -> Result<TestClient<impl Endpoint>> {
    let rows: [(f64, f64, u8, u16, u8, f64); 6] = [
        (1204.0, 310.0, 3, 1921, 0, 118_000.0),
        (1517.0, 840.0, 5, 1999, 2, 203_500.0),
        (2088.0, 1105.0, 7, 2011, 3, 310_250.0),
        (903.0, 0.0, 2, 1880, 0, 87_900.0),
        (2754.0, 1420.0, 9, 2019, 4, 442_000.0),
        (1633.0, 655.0, 6, 1967, 1, 176_300.0),
    ];
    let records = rows
        .into_iter()
        .map(
            |(living_area, basement_area, overall_quality, year_built, garage_capacity, sale_price)| {
                HousingRecord {
                    living_area,
                    basement_area,
                    overall_quality,
                    year_built,
                    garage_capacity,
                    sale_price,
                }
            },
        )
        .collect();
    let dataset = Dataset { records };
    let model = trainer::train(&dataset)?;
    Ok(TestClient::new(create_app(State::new(dataset, model))))
}

#[tokio::test]
async fn index_ok() -> Result {
    let client = test_client()?;
    let response = client.get("/").send().await;
    response.assert_status_is_ok();
    Ok(())
}

#[tokio::test]
async fn predict_form_ok() -> Result {
    let client = test_client()?;
    let response = client
        .post("/")
        .content_type("application/x-www-form-urlencoded")
        .body("living_area=1500&basement_area=800&overall_quality=5&year_built=2000&garage_capacity=2")
        .send()
        .await;
    response.assert_status_is_ok();
    Ok(())
}

#[tokio::test]
async fn predict_api_ok() -> Result {
    let client = test_client()?;
    let response = client
        .post("/api/predict")
        .body_json(&json!({
            "living_area": 1500,
            "basement_area": 800,
            "overall_quality": 5,
            "year_built": 2000,
            "garage_capacity": 2,
        }))
        .send()
        .await;
    response.assert_status_is_ok();

    let json = response.json().await;
    let object = json.value().object();
    assert!(object.get("prediction").f64().is_finite());
    assert_eq!(object.get("scatter").object().get("points").array().len(), 6);
    Ok(())
}

#[tokio::test]
async fn predict_api_missing_feature_fails() -> Result {
    let client = test_client()?;
    let response = client
        .post("/api/predict")
        .body_json(&json!({
            "living_area": 1500,
            "basement_area": 800,
            "overall_quality": 5,
            "year_built": 2000,
        }))
        .send()
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn predict_api_unknown_feature_fails() -> Result {
    let client = test_client()?;
    let response = client
        .post("/api/predict")
        .body_json(&json!({
            "living_area": 1500,
            "basement_area": 800,
            "overall_quality": 5,
            "year_built": 2000,
            "garage_capacity": 2,
            "pool_area": 600,
        }))
        .send()
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn health_ok() -> Result {
    let client = test_client()?;
    let response = client.get("/api/health").send().await;
    response.assert_status(StatusCode::NO_CONTENT);
    Ok(())
}

#[tokio::test]
async fn unknown_route_fails() -> Result {
    let client = test_client()?;
    let response = client.get("/no-such-page").send().await;
    response.assert_status(StatusCode::NOT_FOUND);
    Ok(())
}
