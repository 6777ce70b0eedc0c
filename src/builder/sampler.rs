// statsd-udp - A minimal Statsd client for Rust
//
// Copyright 2026 The statsd-udp Authors
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use super::sample_rate::SampleRate;
use rand::Rng;

/// Source of the random draws used to decide if a sampled metric is sent.
///
/// Implementations must return a value uniformly distributed in `[0, 1)`.
/// The default used by `StatsdClient` is `ThreadRngSampler`. Alternate
/// implementations are mostly useful for making tests deterministic.
///
/// # Example
///
/// ```
/// use statsd_udp::{NopMetricSink, Sampler, StatsdClient};
///
/// struct AlwaysLow;
///
/// impl Sampler for AlwaysLow {
///     fn draw(&self) -> f32 {
///         0.0
///     }
/// }
///
/// let client = StatsdClient::builder("my.prefix", NopMetricSink)
///     .with_sampler(AlwaysLow)
///     .build();
/// ```
pub trait Sampler {
    fn draw(&self) -> f32;
}

/// `Sampler` backed by the thread local random number generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSampler;

impl Sampler for ThreadRngSampler {
    fn draw(&self) -> f32 {
        rand::thread_rng().gen::<f32>()
    }
}

/// Outcome of applying a sample rate to a single metric.
#[derive(Debug, PartialEq)]
pub(crate) enum Sampling {
    /// Rate of 1.0 or more, always sent without annotation.
    Unsampled,
    /// Picked for sending, annotated with the rate it was picked at.
    Selected(SampleRate),
    /// Not picked, nothing is sent.
    Dropped,
}

pub(crate) fn decide<S>(sampler: &S, rate: f32) -> Sampling
where
    S: Sampler + ?Sized,
{
    // A NaN rate is sent as-is
    if rate >= 1.0 || rate.is_nan() {
        return Sampling::Unsampled;
    }

    if sampler.draw() < rate {
        Sampling::Selected(SampleRate::new(rate))
    } else {
        Sampling::Dropped
    }
}
