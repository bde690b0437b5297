//! HTTP stub for board creation.
//!
//! `POST /boards` always answers `201 Created` with the same `Location`.
//! The request body is never read and nothing is stored; boards created
//! through [`ItemUseCase`](crate::app::item_use_case::ItemUseCase) are not
//! wired to this endpoint.

use crate::config::ServerConfig;
use crate::utils::error::{Result, TodoError};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;

pub const BOARD_LOCATION: &str = "/boards/5b9fabe4-4810-443c-85bd-d9b34f3aeaaf";

pub fn router() -> Router {
    Router::new().route("/boards", post(create_board))
}

#[tracing::instrument(name = "create_board", skip_all)]
pub async fn create_board() -> impl IntoResponse {
    tracing::debug!("Board creation requested, answering with {}", BOARD_LOCATION);
    (StatusCode::CREATED, [(header::LOCATION, BOARD_LOCATION)])
}

pub async fn serve(config: &ServerConfig) -> Result<()> {
    let addr = config.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| TodoError::ServerError {
            message: format!("failed to bind {}: {}", addr, e),
        })?;
    serve_on(listener).await
}

/// Serves on an already bound listener until the task is dropped.
pub async fn serve_on(listener: TcpListener) -> Result<()> {
    let local_addr = listener.local_addr()?;
    tracing::info!("🌐 Listening on http://{}", local_addr);

    axum::serve(listener, router())
        .await
        .map_err(|e| TodoError::ServerError {
            message: e.to_string(),
        })
}
