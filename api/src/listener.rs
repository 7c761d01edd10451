//! Listening socket with port fallback
//!
//! The configured port is tried first, then the following ones, until a bind
//! succeeds or the attempts run out. Only "address in use" moves on to the
//! next port; any other bind error is returned as is.

use std::io;
use std::net::TcpListener;

use bt_shared::ServerConfig;

/// Bind the first free port among [`ServerConfig::candidate_ports`]
pub fn bind_with_fallback(server: &ServerConfig) -> io::Result<TcpListener> {
    for port in server.candidate_ports() {
        match TcpListener::bind((server.host.as_str(), port)) {
            Ok(listener) => return Ok(listener),
            Err(e) if e.kind() == io::ErrorKind::AddrInUse => {
                tracing::warn!(port, "Port in use, trying the next one");
            }
            Err(e) => return Err(e),
        }
    }

    let last = server
        .candidate_ports()
        .last()
        .unwrap_or(server.port);
    Err(io::Error::new(
        io::ErrorKind::AddrInUse,
        format!("Unable to bind to any port in range {}..={}", server.port, last),
    ))
}
