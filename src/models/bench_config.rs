use serde::{Deserialize, Serialize};
use crate::models::endpoint_spec::EndpointSpec;
use crate::models::server_config::ServerConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchConfig {
    pub server: ServerConfig,
    pub endpoints: Vec<EndpointSpec>,
}
