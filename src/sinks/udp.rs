// statsd-udp - A minimal Statsd client for Rust
//
// Copyright 2026 The statsd-udp Authors
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, ToSocketAddrs, UdpSocket};

use log::debug;

use crate::sinks::core::MetricSink;
use crate::types::{ErrorKind, MetricError, MetricResult};

/// Attempt to convert anything implementing the `ToSocketAddrs` trait
/// into a concrete `SocketAddr` instance, returning a `ResolutionError`
/// if the address could not be parsed or resolved.
// Public portion of the API (the sink constructors) is pass by value so
// there's no point in changing this to be pass by reference yet.
#[allow(clippy::needless_pass_by_value)]
fn get_addr<A: ToSocketAddrs>(addr: A) -> MetricResult<SocketAddr> {
    let mut addrs = addr
        .to_socket_addrs()
        .map_err(|e| MetricError::from((ErrorKind::ResolutionError, e)))?;

    match addrs.next() {
        Some(addr) => Ok(addr),
        None => Err(MetricError::from((
            ErrorKind::ResolutionError,
            "No socket addresses yielded",
        ))),
    }
}

/// Ephemeral local address in the same family as the remote address.
fn local_addr_for(remote: &SocketAddr) -> SocketAddr {
    match remote {
        SocketAddr::V4(_) => SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0)),
        SocketAddr::V6(_) => SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0)),
    }
}

/// Implementation of a `MetricSink` that emits metrics over UDP.
///
/// The address of the Statsd server is resolved once, when the sink is
/// created, and every metric is sent to that address. The socket is not
/// connected to the server; each datagram carries its own destination.
///
/// Each metric is sent to the Statsd server when the `.emit()` method is
/// called, in the thread of the caller. Nothing is buffered or retried.
#[derive(Debug)]
pub struct UdpMetricSink {
    addr: SocketAddr,
    socket: UdpSocket,
}

impl UdpMetricSink {
    /// Construct a new `UdpMetricSink` with its own socket.
    ///
    /// The address of the server is resolved first and then a socket is
    /// bound to an ephemeral port on all local interfaces.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use statsd_udp::{UdpMetricSink, DEFAULT_PORT};
    ///
    /// let sink = UdpMetricSink::bind(("metrics.example.com", DEFAULT_PORT)).unwrap();
    /// ```
    ///
    /// # Failures
    ///
    /// This method may fail if:
    ///
    /// * It is unable to resolve the hostname of the metric server, or the
    ///   address can't be parsed (`ErrorKind::ResolutionError`). No socket
    ///   is opened in this case.
    /// * The local socket can't be bound (`ErrorKind::SocketError`).
    pub fn bind<A>(to_addr: A) -> MetricResult<UdpMetricSink>
    where
        A: ToSocketAddrs,
    {
        let addr = get_addr(to_addr)?;
        let socket = UdpSocket::bind(local_addr_for(&addr))
            .map_err(|e| MetricError::from((ErrorKind::SocketError, e)))?;

        debug!(
            "opened udp metric sink from {:?} to {}",
            socket.local_addr().ok(),
            addr
        );

        Ok(UdpMetricSink { addr, socket })
    }

    /// Construct a new `UdpMetricSink` instance from an existing socket.
    ///
    /// The address should be the address of the remote metric server to
    /// emit metrics to over UDP. The socket should already be bound to a
    /// local address with any desired configuration applied (blocking vs
    /// non-blocking, timeouts, etc.).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use std::net::UdpSocket;
    /// use statsd_udp::{UdpMetricSink, DEFAULT_PORT};
    ///
    /// let socket = UdpSocket::bind("0.0.0.0:0").unwrap();
    /// socket.set_nonblocking(true).unwrap();
    /// let host = ("metrics.example.com", DEFAULT_PORT);
    /// let sink = UdpMetricSink::from(host, socket);
    /// ```
    ///
    /// # Failures
    ///
    /// This method may fail if:
    ///
    /// * It is unable to resolve the hostname of the metric server.
    /// * The host address is otherwise unable to be parsed
    pub fn from<A>(to_addr: A, socket: UdpSocket) -> MetricResult<UdpMetricSink>
    where
        A: ToSocketAddrs,
    {
        let addr = get_addr(to_addr)?;
        Ok(UdpMetricSink { addr, socket })
    }

    /// Address of the Statsd server metrics are sent to.
    pub fn peer_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Local address the socket is bound to.
    pub fn local_addr(&self) -> MetricResult<SocketAddr> {
        self.socket
            .local_addr()
            .map_err(|e| MetricError::from((ErrorKind::SocketError, e)))
    }
}

impl MetricSink for UdpMetricSink {
    fn emit(&self, metric: &[u8]) -> MetricResult<usize> {
        // The OS serializes concurrent writes to a datagram socket
        match self.socket.send_to(metric, self.addr) {
            Ok(0) => Err(MetricError::from((ErrorKind::TransportError, "Wrote no bytes"))),
            Ok(n) => Ok(n),
            Err(e) => Err(MetricError::from((ErrorKind::TransportError, e))),
        }
    }

    fn close(self: Box<Self>) -> MetricResult<()> {
        debug!("closing udp metric sink to {}", self.addr);
        Ok(())
    }
}
