use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;

use marvin::config::MarvinConfig;
use marvin::github::api::{create_github_client, GithubIssueClient};
use marvin::github::server::{create_app, create_marvin_process, ServerState};
use marvin::marvin::MarvinContext;
use marvin::utils::logging;

#[derive(clap::Parser)]
struct Opts {
    /// Personal access token used to talk to the GitHub API.
    #[arg(long, env = "ACCESS_TOKEN")]
    access_token: String,

    /// Issues have to carry this label to opt into status management.
    #[arg(long, env = "MARKER_LABEL", default_value = "marvin")]
    marker_label: String,

    /// Port on which the webhook server listens.
    #[arg(long, env = "PORT", default_value_t = 8080)]
    port: u16,
}

async fn server(state: ServerState, port: u16) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Cannot listen on {addr}"))?;
    tracing::info!("Listening on {addr}");

    axum::serve(listener, create_app(state)).await?;
    Ok(())
}

fn try_main(opts: Opts) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Cannot build tokio runtime")?;

    let config = MarvinConfig {
        marker_label: opts.marker_label,
    };

    runtime.block_on(async move {
        let client = create_github_client(opts.access_token.into())?;
        let client = GithubIssueClient::load(client).await?;

        let (tx, marvin_process) = create_marvin_process(MarvinContext::new(client, config));
        let server_process = server(ServerState::new(tx), opts.port);

        tokio::select! {
            () = marvin_process => {
                tracing::warn!("Marvin process has ended");
                Ok(())
            },
            res = server_process => {
                tracing::warn!("Server has ended: {res:?}");
                res
            }
        }
    })
}

fn main() {
    logging::setup_logging();

    let opts = Opts::parse();
    if let Err(error) = try_main(opts) {
        eprintln!("Error: {error:?}");
        std::process::exit(1);
    }
}
