mod config;
#[allow(clippy::module_inception)]
mod server;
mod state;

pub use config::ServerConfig;
pub use server::run_server;
pub use state::{ServerState, SharedChain};
