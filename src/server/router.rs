//! Keep-alive HTTP endpoint.
//!
//! Hosting platforms that idle processes without inbound traffic poll `GET /`. The
//! route has no access to bot state.

use axum::{routing::get, Router};

/// Body returned by the keep-alive route.
pub const ALIVE_BODY: &str = "Bot is alive!";

pub fn router() -> Router {
    Router::new().route("/", get(alive))
}

async fn alive() -> &'static str {
    ALIVE_BODY
}
