use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use super::{Config, DEFAULT_PORT};

#[test]
fn test_config_default_listens_on_all_interfaces() {
    let config = Config::default();
    assert_eq!(config.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.port, 3001);
    assert!(config.static_dir.is_none());
}

#[test]
fn test_config_addr_combines_host_and_port() {
    let config = Config {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 8080,
        static_dir: None,
    };
    assert_eq!(config.addr(), SocketAddr::from(([127, 0, 0, 1], 8080)));
}
