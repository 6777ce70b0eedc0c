// statsd-udp - A minimal Statsd client for Rust
//
// Copyright 2026 The statsd-udp Authors
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::sinks::core::MetricSink;
use crate::types::{ErrorKind, MetricError, MetricResult};
use crossbeam_channel::{bounded, unbounded, Receiver, Sender, TrySendError};

/// `MetricSink` implementation that writes all metrics to the `Sender` half of
/// a channel while callers are given ownership of the `Receiver` half.
///
/// This is not a general purpose sink, rather it's a sink meant for verifying
/// metrics written during the course of tests. By default, the channel used is
/// unbounded. The channel size can be limited using the `with_capacity` method.
///
/// Each metric is sent to the channel as one message when the `.emit()` method
/// is called, in the thread of the caller. Closing the sink drops the `Sender`
/// so the `Receiver` observes the channel being disconnected once every
/// metric sent before the close has been received.
///
/// # Example
///
/// ```
/// use statsd_udp::prelude::*;
/// use statsd_udp::{SpyMetricSink, StatsdClient};
///
/// let (rx, sink) = SpyMetricSink::new();
/// let client = StatsdClient::from_sink("my.prefix", sink);
///
/// client.inc("some.counter", 1, 1.0).unwrap();
/// assert_eq!(b"my.prefix.some.counter:1|c".to_vec(), rx.recv().unwrap());
/// ```
#[derive(Debug)]
pub struct SpyMetricSink {
    sender: Sender<Vec<u8>>,
}

impl SpyMetricSink {
    pub fn new() -> (Receiver<Vec<u8>>, Self) {
        Self::with_queue_capacity(None)
    }

    pub fn with_capacity(queue: usize) -> (Receiver<Vec<u8>>, Self) {
        Self::with_queue_capacity(Some(queue))
    }

    fn with_queue_capacity(queue: Option<usize>) -> (Receiver<Vec<u8>>, Self) {
        let (tx, rx) = if let Some(sz) = queue { bounded(sz) } else { unbounded() };
        let sink = SpyMetricSink { sender: tx };
        (rx, sink)
    }
}

impl MetricSink for SpyMetricSink {
    fn emit(&self, metric: &[u8]) -> MetricResult<usize> {
        match self.sender.try_send(metric.to_vec()) {
            Err(TrySendError::Disconnected(_)) => {
                Err(MetricError::from((ErrorKind::TransportError, "channel disconnected")))
            }
            Err(TrySendError::Full(_)) => Err(MetricError::from((ErrorKind::TransportError, "channel full"))),
            Ok(_) => Ok(metric.len()),
        }
    }
}
