// statsd-udp - A minimal Statsd client for Rust
//
// Copyright 2026 The statsd-udp Authors
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;
use std::time::Duration;

mod sample_rate;
mod sampler;

pub(crate) use self::sample_rate::SampleRate;
pub(crate) use self::sampler::{decide, Sampling};
pub use self::sampler::{Sampler, ThreadRngSampler};

/// Type of metric that knows how to display itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MetricType {
    Counter,
    Gauge,
    Timer,
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            MetricType::Counter => "c".fmt(f),
            MetricType::Gauge => "g".fmt(f),
            MetricType::Timer => "ms".fmt(f),
        }
    }
}

/// Holder for primitive metric values that knows how to display itself
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum MetricValue {
    Signed(i64),
    // Always written with a sign so servers treat it as a relative change
    Delta(i64),
    Millis(f64),
}

impl MetricValue {
    pub(crate) fn from_duration(d: Duration) -> MetricValue {
        MetricValue::Millis(d.as_nanos() as f64 / 1_000_000.0)
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            MetricValue::Signed(v) => v.fmt(f),
            MetricValue::Delta(v) => write!(f, "{:+}", v),
            MetricValue::Millis(v) => write!(f, "{:.2}", v),
        }
    }
}

/// Format the value portion of a line, `<value>|<type>`.
pub(crate) fn raw_value(value: MetricValue, metric_type: MetricType) -> String {
    format!("{}|{}", value, metric_type)
}

/// Assembles a complete Statsd line from its parts.
///
/// The result has the form `[<prefix>.]<key>:<value>[|@<rate>]` where the
/// value has already been formatted with its type suffix.
#[derive(Debug)]
pub(crate) struct MetricFormatter<'a> {
    prefix: &'a str,
    key: &'a str,
    value: &'a str,
    sample_rate: Option<SampleRate>,
}

impl<'a> MetricFormatter<'a> {
    pub(crate) fn new(prefix: &'a str, key: &'a str, value: &'a str) -> Self {
        MetricFormatter {
            prefix,
            key,
            value,
            sample_rate: None,
        }
    }

    pub(crate) fn with_sample_rate(&mut self, rate: SampleRate) {
        self.sample_rate = Some(rate);
    }

    fn size_hint(&self) -> usize {
        let prefix = if self.prefix.is_empty() { 0 } else { self.prefix.len() + 1 };
        let rate = self.sample_rate.as_ref().map(|r| r.as_str().len() + 1).unwrap_or(0);
        prefix + self.key.len() + 1 + self.value.len() + rate
    }

    pub(crate) fn format(&self) -> String {
        let mut out = String::with_capacity(self.size_hint());

        if !self.prefix.is_empty() {
            out.push_str(self.prefix);
            out.push('.');
        }

        out.push_str(self.key);
        out.push(':');
        out.push_str(self.value);

        if let Some(rate) = &self.sample_rate {
            out.push('|');
            out.push_str(rate.as_str());
        }

        out
    }
}
