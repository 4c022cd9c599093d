use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    // --- Chat LLM Provider Args ---
    /// API key for the upstream chat completion API. Required; there is
    /// deliberately no default so the process refuses to start without one.
    #[arg(long, env = "CHAT_API_KEY")]
    pub chat_api_key: String,

    /// Base URL of the OpenAI-compatible chat completion endpoint.
    #[arg(
        long,
        env = "CHAT_BASE_URL",
        default_value = "https://generativelanguage.googleapis.com/v1beta/openai/"
    )]
    pub chat_base_url: String,

    /// Model name for chat completion.
    #[arg(long, env = "CHAT_MODEL", default_value = "gemini-2.0-flash")]
    pub chat_model: String,

    /// Hard timeout in seconds for a single upstream call attempt.
    #[arg(long, env = "UPSTREAM_TIMEOUT_SECS", default_value = "30")]
    pub upstream_timeout_secs: u64,

    /// Maximum attempts per upstream call (first try plus retries).
    /// Only transient failures (network, timeout, 5xx) are retried.
    #[arg(long, env = "UPSTREAM_MAX_ATTEMPTS", default_value = "3")]
    pub upstream_max_attempts: u32,

    // --- Gateway Server Args ---
    /// Host address and port for the chat gateway to listen on.
    #[arg(long, env = "GATEWAY_ADDR", default_value = "127.0.0.1:3000")]
    pub gateway_addr: String,

    // --- TLS Static Server Args ---
    /// Serve the static document root over TLS on a second listener.
    #[arg(long, env = "ENABLE_STATIC", default_value = "false")]
    pub enable_static: bool,

    /// Path to the TLS certificate file (PEM format). Required when the
    /// static server is enabled.
    #[arg(long, env = "TLS_CERT_PATH")]
    pub tls_cert_path: Option<String>,

    /// Path to the TLS private key file (PEM format). Required when the
    /// static server is enabled.
    #[arg(long, env = "TLS_KEY_PATH")]
    pub tls_key_path: Option<String>,

    /// Host address and port for the TLS static server.
    #[arg(long, env = "TLS_ADDR", default_value = "127.0.0.1:8443")]
    pub tls_addr: String,

    /// Directory served by the TLS static server.
    #[arg(long, env = "STATIC_ROOT", default_value = "out")]
    pub static_root: String,
}
