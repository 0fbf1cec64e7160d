use std::net::SocketAddr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrontendError {
    #[error("Failed to communicate to backend | Error: {0}")]
    Network(#[source] reqwest::Error),
    #[error("failed to build backend HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("failed to bind web form listener on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("web form server error: {0}")]
    Serve(#[from] std::io::Error),
}
