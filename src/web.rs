//! The web dashboard.

pub mod middleware;
pub mod partials;
pub mod state;
#[cfg(test)]
mod test;
pub mod views;

use std::net::IpAddr;
use std::str::FromStr;

use poem::listener::TcpListener;
use poem::middleware::{CatchPanic, Tracing};
use poem::{get, post, Endpoint, EndpointExt, Route, Server};

use crate::prelude::*;
use crate::web::middleware::{ErrorMiddleware, SecurityHeadersMiddleware};
use crate::web::state::State;

/// Builds the application with the shared state attached.
pub fn create_app(state: State) -> impl Endpoint {
    Route::new()
        .at("/", get(views::index::get).post(views::index::post))
        .at("/api/predict", post(views::api::predict))
        .at("/api/health", get(views::api::get_health))
        .data(state)
        .with(Tracing)
        .with(CatchPanic::new())
        .with(ErrorMiddleware)
        .with(SecurityHeadersMiddleware)
}

/// Runs the web application until the process is terminated.
pub async fn run(host: &str, port: u16, state: State) -> Result {
    let app = create_app(state);
    info!(host, port, "listening");
    Server::new(TcpListener::bind((IpAddr::from_str(host)?, port)))
        .run(app)
        .await?;
    Ok(())
}
