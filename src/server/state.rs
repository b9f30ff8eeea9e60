use axum::extract::FromRef;
use std::sync::Arc;

use crate::delegate::AnalystChain;

use super::ServerConfig;

pub type SharedChain = Arc<AnalystChain>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub chain: SharedChain,
}

impl ServerState {
    pub fn new(config: ServerConfig, chain: AnalystChain) -> ServerState {
        ServerState {
            config,
            chain: Arc::new(chain),
        }
    }
}

impl FromRef<ServerState> for SharedChain {
    fn from_ref(input: &ServerState) -> Self {
        input.chain.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
