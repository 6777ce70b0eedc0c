// statsd-udp - A minimal Statsd client for Rust
//
// Copyright 2026 The statsd-udp Authors
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Export commonly used parts of this library for easy glob imports
//!
//! # Example
//!
//! ```
//! use statsd_udp::prelude::*;
//! ```

pub use crate::client::{Counted, Gauged, MetricBackend, Statter, Timed};
