// statsd-udp - A minimal Statsd client for Rust
//
// Copyright 2026 The statsd-udp Authors
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::types::MetricResult;

/// Trait for the transports that carry Statsd lines somewhere.
///
/// Each call to `emit` receives one complete line, without a trailing
/// newline, and should deliver it as a single datagram. Examples of each
/// kind of line produced by the client are given below.
///
/// ## Counter
///
/// ``` text
/// some.counter:123|c
/// ```
///
/// ## Timer
///
/// ``` text
/// some.timer:456|ms
/// some.timer:12.50|ms
/// ```
///
/// ## Gauge
///
/// ``` text
/// some.gauge:5|g
/// some.gauge:+5|g
/// ```
///
/// ## Sampled
///
/// ``` text
/// some.counter:1|c|@0.5
/// ```
///
/// Implementations are not required to do any locking of their own. Sinks
/// are shared between every thread using a client and are expected to rely
/// on the thread safety of whatever they write to.
pub trait MetricSink {
    /// Send a single line and return the number of bytes written.
    ///
    /// Implementations should attempt the write exactly once and return any
    /// failure to the caller.
    fn emit(&self, metric: &[u8]) -> MetricResult<usize>;

    /// Release whatever resources the sink holds.
    ///
    /// The sink is consumed so it can't be used, or closed, again. The
    /// default implementation just drops it.
    fn close(self: Box<Self>) -> MetricResult<()> {
        Ok(())
    }
}

/// Implementation of a `MetricSink` that discards all metrics.
///
/// Useful for disabling metric collection or unit tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NopMetricSink;

impl MetricSink for NopMetricSink {
    fn emit(&self, _metric: &[u8]) -> MetricResult<usize> {
        Ok(0)
    }
}
