// statsd-udp - A minimal Statsd client for Rust
//
// Copyright 2026 The statsd-udp Authors
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A minimal Statsd client for Rust.
//!
//! Every metric is formatted into a single Statsd line and sent as its own
//! UDP datagram, in the thread of the caller. There is no buffering, no
//! batching, and no retrying: a call either writes one packet or returns
//! the error from the socket.
//!
//! ## Features
//!
//! * Counters, gauges (absolute and relative), and timings, plus a raw
//!   method for any other metric type your server understands.
//! * Client side sampling with the rate written to the line so the server
//!   can correct for it.
//! * An optional prefix applied to every metric key.
//! * Alternate transports via the `MetricSink` trait.
//!
//! ## Usage
//!
//! ### Simple Use
//!
//! Create a client that writes to some imaginary metrics server over UDP and
//! send a few metrics.
//!
//! ```rust,no_run
//! use statsd_udp::prelude::*;
//! use statsd_udp::{StatsdClient, DEFAULT_PORT};
//!
//! // Note that you'll probably want to actually handle any errors creating
//! // the client when you use it for real in your application. We're just
//! // using .unwrap() here since this is an example!
//! let host = ("metrics.example.com", DEFAULT_PORT);
//! let client = StatsdClient::from_udp_host(host, "my.metrics").unwrap();
//!
//! // Emit metrics!
//! client.inc("some.counter", 1, 1.0).unwrap();
//! client.timing("some.methodCall", 42, 1.0).unwrap();
//! client.gauge("some.thing", 7, 1.0).unwrap();
//! client.gauge_delta("some.thing", -2, 1.0).unwrap();
//!
//! // Only send about one in ten of these
//! client.inc("some.busy.counter", 1, 0.1).unwrap();
//!
//! client.close().unwrap();
//! ```
//!
//! The lines sent for the calls above look like this.
//!
//! ``` text
//! my.metrics.some.counter:1|c
//! my.metrics.some.methodCall:42|ms
//! my.metrics.some.thing:7|g
//! my.metrics.some.thing:-2|g
//! my.metrics.some.busy.counter:1|c|@0.1
//! ```
//!
//! ### Custom Metric Sinks
//!
//! The `StatsdClient` uses implementations of the `MetricSink` trait to
//! send metrics to a metric server. If you want to do something not
//! covered by an existing sink, implement it yourself.
//!
//! ```rust
//! use statsd_udp::prelude::*;
//! use statsd_udp::{MetricResult, MetricSink, StatsdClient};
//!
//! pub struct MyMetricSink;
//!
//! impl MetricSink for MyMetricSink {
//!     fn emit(&self, metric: &[u8]) -> MetricResult<usize> {
//!         // Your custom metric sink implementation goes here!
//!         Ok(metric.len())
//!     }
//! }
//!
//! let client = StatsdClient::from_sink("my.prefix", MyMetricSink);
//!
//! client.inc("my.counter.thing", 42, 1.0).unwrap();
//! client.timing("my.method.time", 25, 1.0).unwrap();
//! ```
//!
//! ### Custom UDP Socket
//!
//! If you need to customize the socket, for example to put it in
//! non-blocking mode, bind it yourself and hand it to `UdpMetricSink`.
//!
//! ```rust,no_run
//! use std::net::UdpSocket;
//! use statsd_udp::prelude::*;
//! use statsd_udp::{StatsdClient, UdpMetricSink, DEFAULT_PORT};
//!
//! let socket = UdpSocket::bind("0.0.0.0:0").unwrap();
//! socket.set_nonblocking(true).unwrap();
//!
//! let host = ("metrics.example.com", DEFAULT_PORT);
//! let sink = UdpMetricSink::from(host, socket).unwrap();
//! let client = StatsdClient::from_sink("my.prefix", sink);
//!
//! client.inc("my.counter.thing", 29, 1.0).unwrap();
//! ```

#![forbid(unsafe_code)]

pub const DEFAULT_PORT: u16 = 8125;

pub use self::builder::{Sampler, ThreadRngSampler};

pub use self::client::{Counted, Gauged, MetricBackend, Statter, StatsdClient, StatsdClientBuilder, Timed};

pub use self::sinks::{LoggingMetricSink, MetricSink, NopMetricSink, SpyMetricSink, UdpMetricSink};

pub use self::types::{ErrorKind, MetricError, MetricResult};

mod builder;
mod client;
pub mod prelude;
mod sinks;
mod types;
