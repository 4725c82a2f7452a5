//! Server configuration (command-line arguments).

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;

/// Tournament REST API server
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "tourney-server", version, about)]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    /// Default log level (overridden by RUST_LOG)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl ServerConfig {
    /// Socket address to bind
    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
