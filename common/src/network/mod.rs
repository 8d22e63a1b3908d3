//! Best-effort discovery of the IPv4 address phones on the same network can
//! use to reach this machine.
//!
//! Each strategy is a plain function returning `Some(address)` on success.
//! [`resolve_with`] walks them in order and settles on the first hit, falling
//! back to `127.0.0.1`. Nothing here returns an error: discovery failures are
//! never fatal to the caller, they only degrade the URL shown to the user.
//!
//! The result is not cached. Both the server pages and the QR generator call
//! [`local_ipv4`] whenever they need an address, so a laptop that changes
//! networks picks up its new address on the next render.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::net::{IpAddr, Ipv4Addr, ToSocketAddrs, UdpSocket};

/// A single address-discovery method.
pub type Strategy = fn() -> Option<Ipv4Addr>;

/// Discovery methods in preference order.
pub const STRATEGIES: &[Strategy] = &[route_probe, hostname_lookup];

/// Public resolver used to pick the outbound interface. No packet is sent.
const PROBE_TARGET: (Ipv4Addr, u16) = (Ipv4Addr::new(8, 8, 8, 8), 80);

/// RFC 3986 unreserved characters stay readable in generated scan URLs.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Resolves the LAN address of this machine using [`STRATEGIES`].
pub fn local_ipv4() -> Ipv4Addr {
    resolve_with(STRATEGIES)
}

/// Returns the first address produced by `strategies`, or loopback.
pub fn resolve_with(strategies: &[Strategy]) -> Ipv4Addr {
    strategies
        .iter()
        .find_map(|strategy| strategy())
        .unwrap_or(Ipv4Addr::LOCALHOST)
}

/// Asks the routing table which local address would be used to reach the
/// internet. Connecting a datagram socket only selects a route.
pub fn route_probe() -> Option<Ipv4Addr> {
    let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0)).ok()?;
    socket.connect(PROBE_TARGET).ok()?;
    match socket.local_addr().ok()?.ip() {
        IpAddr::V4(ip) => usable(ip),
        IpAddr::V6(_) => None,
    }
}

/// Resolves the machine's own hostname through the system resolver.
pub fn hostname_lookup() -> Option<Ipv4Addr> {
    let name = hostname::get().ok()?.into_string().ok()?;
    (name.as_str(), 0)
        .to_socket_addrs()
        .ok()?
        .find_map(|addr| match addr.ip() {
            IpAddr::V4(ip) => usable(ip),
            IpAddr::V6(_) => None,
        })
}

fn usable(ip: Ipv4Addr) -> Option<Ipv4Addr> {
    (!ip.is_loopback() && !ip.is_unspecified()).then_some(ip)
}

/// Base URL of the ingestion service, e.g. `http://192.168.1.20:9500`.
pub fn service_url(ip: Ipv4Addr, port: u16) -> String {
    format!("http://{}:{}", ip, port)
}

/// URL a QR code encodes for `identifier`.
pub fn scan_url(ip: Ipv4Addr, port: u16, identifier: &str) -> String {
    format!(
        "{}/scan?qr_code={}",
        service_url(ip, port),
        utf8_percent_encode(identifier, QUERY_VALUE)
    )
}
