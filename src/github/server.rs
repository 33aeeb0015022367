use std::future::Future;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Router;
use tokio::sync::mpsc;
use tower::limit::ConcurrencyLimitLayer;
use tracing::Instrument;

use crate::github::webhook::GitHubWebhook;
use crate::marvin::event::MarvinEvent;
use crate::marvin::{handle_marvin_event, IssueClient, MarvinContext};
use crate::utils::logging::LogError;

/// Shared server state for all axum handlers.
pub struct ServerState {
    event_queue: mpsc::Sender<MarvinEvent>,
}

impl ServerState {
    pub fn new(event_queue: mpsc::Sender<MarvinEvent>) -> Self {
        Self { event_queue }
    }
}

pub type ServerStateRef = Arc<ServerState>;

pub fn create_app(state: ServerState) -> Router {
    Router::new()
        .route("/github", post(github_webhook_handler))
        .route("/health", get(health_handler))
        .layer(ConcurrencyLimitLayer::new(100))
        .with_state(Arc::new(state))
}

async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "")
}

/// Axum handler that receives a webhook and sends it to a webhook channel.
pub async fn github_webhook_handler(
    State(state): State<ServerStateRef>,
    GitHubWebhook(event): GitHubWebhook,
) -> impl IntoResponse {
    match state.event_queue.send(event).await {
        Ok(_) => (StatusCode::OK, ""),
        Err(error) => {
            tracing::error!("Could not send webhook event: {error:?}");
            (StatusCode::INTERNAL_SERVER_ERROR, "")
        }
    }
}

/// Creates a future with a marvin process that continuously receives webhook
/// events and reacts to them.
///
/// The single consumer also serializes event handling, so two comments on the
/// same issue can never race on its label set.
pub fn create_marvin_process<Client: IssueClient + 'static>(
    ctx: MarvinContext<Client>,
) -> (mpsc::Sender<MarvinEvent>, impl Future<Output = ()>) {
    let (tx, mut rx) = mpsc::channel::<MarvinEvent>(1024);

    let service = async move {
        let ctx = Arc::new(ctx);
        while let Some(event) = rx.recv().await {
            let span = tracing::info_span!("Event");
            tracing::debug!("Received event: {event:#?}");
            if let Err(error) = handle_marvin_event(event, Arc::clone(&ctx))
                .instrument(span.clone())
                .await
            {
                span.log_error(error);
            }
        }
    };
    (tx, service)
}
