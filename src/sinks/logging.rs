// statsd-udp - A minimal Statsd client for Rust
//
// Copyright 2026 The statsd-udp Authors
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use log::{log, Level};

use crate::sinks::core::MetricSink;
use crate::types::MetricResult;

const LOG_TARGET: &str = "metrics";

/// Implementation of a `MetricSink` that emits metrics using the `log!` macro.
///
/// Metrics are emitted using the `Level` provided at construction with a target
/// of `metrics`. Note that the number of bytes written returned by `emit` does not
/// reflect if the provided log level is high enough to be active.
#[derive(Debug, Clone, Copy)]
pub struct LoggingMetricSink {
    level: Level,
}

impl LoggingMetricSink {
    pub fn new(level: Level) -> LoggingMetricSink {
        LoggingMetricSink { level }
    }
}

impl Default for LoggingMetricSink {
    fn default() -> Self {
        LoggingMetricSink::new(Level::Info)
    }
}

impl MetricSink for LoggingMetricSink {
    fn emit(&self, metric: &[u8]) -> MetricResult<usize> {
        log!(target: LOG_TARGET, self.level, "{}", String::from_utf8_lossy(metric));
        Ok(metric.len())
    }
}
