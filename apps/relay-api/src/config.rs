use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Relay configuration, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the server binds to. The default `0.0.0.0` makes the relay
    /// reachable on the local network.
    pub host: IpAddr,
    /// Port the server binds to.
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults suitable for local use.
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("HOST")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED)),
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8765),
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
