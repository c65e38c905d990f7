use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchIpRequest {
    pub ips: Vec<String>,
}
