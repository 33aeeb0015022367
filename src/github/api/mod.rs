use anyhow::Context;
use octocrab::Octocrab;
use secrecy::{ExposeSecret, SecretString};

pub mod client;

pub use client::GithubIssueClient;

/// Creates an octocrab client authenticated with a personal access token.
/// The token is passed in explicitly; there is no ambient credential state.
pub fn create_github_client(access_token: SecretString) -> anyhow::Result<Octocrab> {
    Octocrab::builder()
        .personal_token(access_token.expose_secret().clone())
        .build()
        .context("Could not create octocrab client")
}
