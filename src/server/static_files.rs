use crate::cli::Args;
use crate::error::ConfigError;
use axum::Router;
use axum_server::tls_rustls::RustlsConfig;
use log::{error, info};
use std::error::Error;
use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use tower_http::services::ServeDir;

/// Reads the certificate and key and checks the document root. Every
/// failure here must prevent the listener from starting.
fn load_tls_material(args: &Args) -> Result<(Vec<u8>, Vec<u8>), ConfigError> {
    let cert_path = args
        .tls_cert_path
        .as_deref()
        .ok_or(ConfigError::MissingCertificate)?;
    let key_path = args
        .tls_key_path
        .as_deref()
        .ok_or(ConfigError::MissingKey)?;

    let cert = fs::read(cert_path).map_err(|source| ConfigError::CertificateUnreadable {
        path: cert_path.to_string(),
        source,
    })?;
    let key = fs::read(key_path).map_err(|source| ConfigError::KeyUnreadable {
        path: key_path.to_string(),
        source,
    })?;

    if !Path::new(&args.static_root).is_dir() {
        return Err(ConfigError::DocumentRootMissing(args.static_root.clone()));
    }

    Ok((cert, key))
}

/// Serves the configured document root over TLS. Certificate, key, document
/// root, and the port bind are all validated before the serve task spawns,
/// so a broken configuration fails process startup instead of degrading.
pub async fn start_static_server(args: &Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    let (cert, key) = load_tls_material(args)?;
    let tls_config = RustlsConfig::from_pem(cert, key).await?;

    let addr = args.tls_addr.parse::<SocketAddr>()?;
    let listener = std::net::TcpListener::bind(addr)?;

    info!(
        "Starting TLS static server on: https://{} serving '{}'",
        addr, args.static_root
    );

    // ServeDir gives 404 for unknown paths and no directory listing.
    let app = Router::new().fallback_service(ServeDir::new(&args.static_root));

    tokio::spawn(async move {
        let result = axum_server::from_tcp_rustls(listener, tls_config)
            .serve(app.into_make_service())
            .await;

        if let Err(e) = result {
            error!("TLS static server error: {}", e);
        }
    });

    Ok(())
}
