use ipnetwork::IpNetwork;
use std::net::IpAddr;
use std::sync::LazyLock;

/// Address space that is never sent to external lookup services.
static PRIVATE_NETWORKS: LazyLock<Vec<IpNetwork>> = LazyLock::new(|| {
    [
        // RFC 1918
        "10.0.0.0/8",
        "172.16.0.0/12",
        "192.168.0.0/16",
        // Loopback, link-local, "this network"
        "127.0.0.0/8",
        "169.254.0.0/16",
        "0.0.0.0/8",
        // IPv6 loopback, unspecified, unique-local, link-local
        "::1/128",
        "::/128",
        "fc00::/7",
        "fe80::/10",
    ]
    .iter()
    .filter_map(|cidr| cidr.parse().ok())
    .collect()
});

pub struct PrivateRangeFilter;

impl PrivateRangeFilter {
    pub fn is_private(ip: &IpAddr) -> bool {
        let ip = match ip {
            IpAddr::V6(v6) => v6
                .to_ipv4_mapped()
                .map(IpAddr::V4)
                .unwrap_or(IpAddr::V6(*v6)),
            v4 => *v4,
        };

        PRIVATE_NETWORKS.iter().any(|network| network.contains(ip))
    }
}
