//! Serve command: run the MCP server on stdio.

use clap::Args;
use legible_core::config::Config;
use rmcp::ServiceExt;
use tracing::{info, instrument};

use crate::server::ProjectServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {}

/// Start the MCP server and block until the client disconnects.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(
    _args: ServeArgs,
    max_input_bytes: Option<usize>,
    config: Config,
) -> anyhow::Result<()> {
    let word_list = config.word_list_path();
    info!(?max_input_bytes, word_list = %word_list, "starting MCP server on stdio");

    let service = ProjectServer::new(max_input_bytes, word_list)
        .serve(rmcp::transport::stdio())
        .await?;
    service.waiting().await?;

    info!("MCP server stopped");
    Ok(())
}
