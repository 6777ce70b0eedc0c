// statsd-udp - A minimal Statsd client for Rust
//
// Copyright 2026 The statsd-udp Authors
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt::Write;

/// Represents the rate a metric was sampled at, written to the wire as
/// `@<rate>` so the server can scale the value back up.
///
/// The rate is written with six decimal places and trailing zeros removed,
/// keeping at least one digit after the decimal point.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SampleRate {
    outbuf: String,
}

impl SampleRate {
    pub(crate) fn new(value: f32) -> Self {
        let mut outbuf = String::with_capacity(12);
        // Writing to a String cannot fail
        let _ = write!(&mut outbuf, "@{:.6}", value);
        Self::trim(&mut outbuf);

        SampleRate { outbuf }
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.outbuf
    }

    fn trim(outbuf: &mut String) {
        while outbuf.ends_with('0') && !outbuf.ends_with(".0") {
            outbuf.pop();
        }
    }
}
