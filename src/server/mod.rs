pub mod api;
pub mod static_files;

use crate::cli::Args;
use crate::llm::{CallPolicy, ChatClient};
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

pub struct Server {
    args: Args,
    client: Arc<dyn ChatClient>,
}

impl Server {
    pub fn new(args: Args, client: Arc<dyn ChatClient>) -> Self {
        Self { args, client }
    }

    /// Starts the TLS static listener (when enabled) and then runs the chat
    /// gateway. Any startup failure aborts the process before the gateway
    /// accepts traffic.
    pub async fn run(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        if self.args.enable_static {
            static_files::start_static_server(&self.args).await?;
        }

        let policy = CallPolicy {
            timeout: Duration::from_secs(self.args.upstream_timeout_secs),
            max_attempts: self.args.upstream_max_attempts,
            ..CallPolicy::default()
        };

        api::start_gateway(&self.args.gateway_addr, self.client.clone(), policy).await
    }
}
