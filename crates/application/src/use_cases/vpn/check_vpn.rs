use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::ports::IpReputationProvider;

/// Flags clients connecting through a proxy, VPN or datacenter.
///
/// Fails open: a lookup error yields "not suspicious" and is only logged.
pub struct CheckVpnUseCase {
    provider: Arc<dyn IpReputationProvider>,
}

impl CheckVpnUseCase {
    pub fn new(provider: Arc<dyn IpReputationProvider>) -> Self {
        Self { provider }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, ip: &str) -> bool {
        match self.provider.lookup_security(ip).await {
            Ok(security) => {
                let suspicious = security.is_suspicious();
                debug!(
                    is_proxy = security.is_proxy,
                    is_datacenter = security.is_datacenter,
                    is_vpn = security.is_vpn,
                    suspicious,
                    "IP reputation checked"
                );
                suspicious
            }
            Err(e) => {
                warn!(error = %e, "IP check failed, allowing client");
                false
            }
        }
    }
}
