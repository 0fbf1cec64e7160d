pub mod application;
pub mod config;
pub mod constants;
pub mod domain;
pub mod frontend;
pub mod infrastructure;

pub use application::{agent, tooling};
pub use config::AppConfig;
pub use domain::types;
pub use infrastructure::{model, search, server};
