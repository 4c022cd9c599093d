pub mod cli;
pub mod context;
pub mod error;
pub mod llm;
pub mod models;
pub mod server;

use cli::Args;
use llm::gemini::GeminiChatClient;
use log::info;
use server::Server;
use std::error::Error;
use std::sync::Arc;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("--- Core Configuration ---");
    info!("Gateway Address: {}", args.gateway_addr);
    info!("Chat Model: {}", args.chat_model);
    info!("Chat Base URL: {}", args.chat_base_url);
    info!("Upstream Timeout: {}s", args.upstream_timeout_secs);
    info!("Upstream Max Attempts: {}", args.upstream_max_attempts);
    info!("Static Server Enabled: {}", args.enable_static);
    if args.enable_static {
        info!("TLS Address: {}", args.tls_addr);
        info!("Static Root: {}", args.static_root);
    }
    info!("-------------------------");

    let client = Arc::new(GeminiChatClient::new(
        args.chat_api_key.clone(),
        args.chat_model.clone(),
        args.chat_base_url.clone(),
    )?);
    let server = Server::new(args, client);
    server.run().await
}
