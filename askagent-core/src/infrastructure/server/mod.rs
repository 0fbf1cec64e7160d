//! Backend HTTP server

mod docs;
pub mod dto;
mod error;
mod router;
mod routes;
mod state;

pub use docs::ApiDoc;
pub use error::ServerError;
pub use router::{router, serve};
pub(crate) use router::shutdown_signal;
pub use state::ServerState;
