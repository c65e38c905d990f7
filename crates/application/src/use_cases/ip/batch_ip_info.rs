use futures::future::join_all;
use inforecon_domain::{normalize_ip, IpInfo};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, instrument};

use super::GetIpInfoUseCase;

/// Resolves a list of IPs through the single-IP orchestrator.
///
/// Output has the input's length and order. Elements are independent: a
/// failure only shows up in that element's `error`. Inputs that normalize
/// to the same key are resolved once.
pub struct BatchIpInfoUseCase {
    single: Arc<GetIpInfoUseCase>,
}

impl BatchIpInfoUseCase {
    pub fn new(single: Arc<GetIpInfoUseCase>) -> Self {
        Self { single }
    }

    #[instrument(skip(self, ips), fields(count = ips.len()))]
    pub async fn execute(&self, ips: &[String]) -> Vec<IpInfo> {
        let mut unique: Vec<String> = Vec::new();
        let mut slot_of: HashMap<String, usize> = HashMap::new();
        let positions: Vec<usize> = ips
            .iter()
            .map(|ip| {
                let key = normalize_ip(ip);
                *slot_of.entry(key.clone()).or_insert_with(|| {
                    unique.push(key);
                    unique.len() - 1
                })
            })
            .collect();

        debug!(
            requested = ips.len(),
            unique = unique.len(),
            "Resolving IP batch"
        );

        let resolved: Vec<IpInfo> = join_all(unique.iter().map(|ip| self.single.execute(ip)))
            .await
            .into_iter()
            .map(|r| r.into_inner())
            .collect();

        positions
            .into_iter()
            .map(|slot| resolved[slot].clone())
            .collect()
    }
}
