// statsd-udp - A minimal Statsd client for Rust
//
// Copyright 2026 The statsd-udp Authors
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::builder::{decide, raw_value, MetricFormatter, MetricType, MetricValue, Sampler, Sampling, ThreadRngSampler};
use crate::sinks::{MetricSink, UdpMetricSink};
use crate::types::MetricResult;
use log::trace;
use std::fmt;
use std::net::ToSocketAddrs;
use std::panic::RefUnwindSafe;
use std::time::Duration;

/// Trait for sending a preformatted metric value.
///
/// This is the path every other kind of metric goes through. The value must
/// already include its type suffix (e.g. `42|c` or `3|s`). The implementation
/// is responsible for sampling, prefixing the key, and writing the line to
/// a transport.
///
/// The `rate` is the probability, between 0.0 and 1.0, that the metric is
/// actually sent. Rates of 1.0 or more always send. Lower rates send with
/// that probability and annotate the line with `|@<rate>` so the server can
/// correct for the dropped events. A metric that isn't picked is dropped
/// silently and `Ok(())` is returned.
pub trait MetricBackend {
    /// Send a metric with an already formatted value and type
    fn raw(&self, key: &str, value: &str, rate: f32) -> MetricResult<()>;
}

/// Trait for incrementing and decrementing counters.
///
/// Counters are simple values incremented or decremented by a client. The
/// rates at which these events occur or average values will be determined
/// by the server receiving them. Examples of counter uses include number
/// of logins to a system or requests received.
///
/// See the [Statsd spec](https://github.com/b/statsd_spec) for more
/// information.
pub trait Counted: MetricBackend {
    /// Increment the counter by the given amount
    fn inc(&self, key: &str, value: i64, rate: f32) -> MetricResult<()> {
        self.raw(key, &raw_value(MetricValue::Signed(value), MetricType::Counter), rate)
    }

    /// Decrement the counter by the given amount
    fn dec(&self, key: &str, value: i64, rate: f32) -> MetricResult<()> {
        self.inc(key, value.wrapping_neg(), rate)
    }
}

/// Trait for recording gauge values.
///
/// Gauge values are an instantaneous measurement of a value determined
/// by the client. They do not change unless changed by the client. Examples
/// include things like load average or how many connections are active.
///
/// Gauges can either be set to an absolute value with `gauge` or adjusted
/// relative to their current value with `gauge_delta`. Deltas are always
/// written with an explicit sign.
pub trait Gauged: MetricBackend {
    /// Set the gauge to the given value
    fn gauge(&self, key: &str, value: i64, rate: f32) -> MetricResult<()> {
        self.raw(key, &raw_value(MetricValue::Signed(value), MetricType::Gauge), rate)
    }

    /// Adjust the gauge by the given (positive or negative) amount
    fn gauge_delta(&self, key: &str, value: i64, rate: f32) -> MetricResult<()> {
        self.raw(key, &raw_value(MetricValue::Delta(value), MetricType::Gauge), rate)
    }
}

/// Trait for recording timings in milliseconds.
///
/// Timings are a number of milliseconds between a start and end time.
/// Examples include time taken to render a web page or time taken for a
/// database call to return.
pub trait Timed: MetricBackend {
    /// Record a timing given as a whole number of milliseconds
    fn timing(&self, key: &str, millis: i64, rate: f32) -> MetricResult<()> {
        self.raw(key, &raw_value(MetricValue::Signed(millis), MetricType::Timer), rate)
    }

    /// Record a timing from a `Duration`, written as milliseconds with
    /// two decimal places (e.g. `12.50|ms`).
    fn timing_duration(&self, key: &str, duration: Duration, rate: f32) -> MetricResult<()> {
        self.raw(key, &raw_value(MetricValue::from_duration(duration), MetricType::Timer), rate)
    }
}

/// Trait that encompasses all other traits for sending metrics along with
/// managing the prefix and lifetime of a client.
///
/// If you wish to use `StatsdClient` with a generic type or place a
/// `StatsdClient` instance behind a pointer (such as a `Box`) this will
/// allow you to reference all the implemented methods for recording metrics,
/// while using a single trait. An example of this is shown below.
///
/// ```
/// use statsd_udp::prelude::*;
/// use statsd_udp::{StatsdClient, NopMetricSink};
///
/// let client: Box<dyn Statter> = Box::new(StatsdClient::from_sink("prefix", NopMetricSink));
///
/// client.inc("some.counter", 1, 1.0).unwrap();
/// client.timing("some.timer", 42, 1.0).unwrap();
/// client.gauge("some.gauge", 8, 1.0).unwrap();
/// ```
pub trait Statter: Counted + Gauged + Timed {
    /// Replace the prefix used for all metrics sent after this call
    fn set_prefix(&mut self, prefix: &str);

    /// Close the underlying transport, consuming the client
    fn close(self) -> MetricResult<()>
    where
        Self: Sized;
}

/// Builder for creating and customizing `StatsdClient` instances.
///
/// Instances of the builder should be created by calling the `::builder()`
/// method on the `StatsdClient` struct.
///
/// # Example
///
/// ```
/// use statsd_udp::prelude::*;
/// use statsd_udp::{StatsdClient, NopMetricSink, ThreadRngSampler};
///
/// let client = StatsdClient::builder("prefix", NopMetricSink)
///     .with_sampler(ThreadRngSampler)
///     .build();
///
/// client.inc("something", 123, 0.5).unwrap();
/// ```
pub struct StatsdClientBuilder {
    prefix: String,
    sink: Box<dyn MetricSink + Sync + Send + RefUnwindSafe>,
    sampler: Box<dyn Sampler + Sync + Send + RefUnwindSafe>,
}

impl StatsdClientBuilder {
    // Set the required fields and defaults for optional fields
    fn new<T>(prefix: &str, sink: T) -> Self
    where
        T: MetricSink + Sync + Send + RefUnwindSafe + 'static,
    {
        StatsdClientBuilder {
            // required
            prefix: prefix.to_string(),
            sink: Box::new(sink),

            // optional with defaults
            sampler: Box::new(ThreadRngSampler),
        }
    }

    /// Set the source of random draws used for sample rates below 1.0.
    ///
    /// By default `ThreadRngSampler` is used. Supplying a seeded sampler
    /// makes which metrics get sent repeatable.
    pub fn with_sampler<S>(mut self, sampler: S) -> Self
    where
        S: Sampler + Sync + Send + RefUnwindSafe + 'static,
    {
        self.sampler = Box::new(sampler);
        self
    }

    /// Construct a new `StatsdClient` instance based on current settings.
    pub fn build(self) -> StatsdClient {
        StatsdClient::from_builder(self)
    }
}

/// Client for Statsd that implements various traits to record metrics.
///
/// # Traits
///
/// The client is the main entry point for users of this library. It supports
/// several traits for recording metrics of different types.
///
/// * `Counted` for emitting counters.
/// * `Timed` for emitting timings.
/// * `Gauged` for emitting gauge values and deltas.
/// * `MetricBackend` for emitting preformatted values.
/// * `Statter` for a combination of all of the above.
///
/// # Sinks
///
/// The client writes every metric to an implementation of `MetricSink`. Most
/// users want the `UdpMetricSink`, which `from_udp_host` creates for you.
/// Every metric that isn't dropped by sampling results in exactly one call
/// to the sink, in the thread of the caller.
///
/// # Threading
///
/// All the methods for sending metrics take `&self` and the client is `Send`
/// and `Sync`, so it can be wrapped in an `Arc` and shared between threads.
/// No locking is done by the client itself. Changing the prefix requires
/// `&mut self` so it can't happen while other threads are sending.
///
/// # Absent Clients
///
/// `Option<StatsdClient>` implements the same traits. When it is `None`,
/// every method succeeds without doing anything. This lets code hold a
/// client that may not have been configured without checking it before
/// every call.
///
/// ```
/// use statsd_udp::prelude::*;
/// use statsd_udp::StatsdClient;
///
/// let client: Option<StatsdClient> = None;
/// client.inc("some.counter", 1, 1.0).unwrap();
/// client.close().unwrap();
/// ```
pub struct StatsdClient {
    prefix: String,
    sink: Box<dyn MetricSink + Sync + Send + RefUnwindSafe>,
    sampler: Box<dyn Sampler + Sync + Send + RefUnwindSafe>,
}

impl StatsdClient {
    /// Create a new client that sends metrics over UDP to the given address.
    ///
    /// The address of the server is resolved once and a local socket is
    /// bound to an ephemeral port. The prefix may be empty, in which case
    /// the bare keys are used.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use statsd_udp::prelude::*;
    /// use statsd_udp::{StatsdClient, DEFAULT_PORT};
    ///
    /// let client = StatsdClient::from_udp_host(("metrics.example.com", DEFAULT_PORT), "my.app").unwrap();
    /// client.inc("requests", 1, 1.0).unwrap();
    /// ```
    ///
    /// # Failures
    ///
    /// This method may fail if:
    ///
    /// * It is unable to resolve or parse the address of the metric server.
    /// * It is unable to bind the local socket.
    pub fn from_udp_host<A>(host: A, prefix: &str) -> MetricResult<Self>
    where
        A: ToSocketAddrs,
    {
        let sink = UdpMetricSink::bind(host)?;
        Ok(StatsdClient::from_sink(prefix, sink))
    }

    /// Create a new client instance that will use the given prefix for
    /// all metrics emitted to the given `MetricSink` implementation.
    ///
    /// # No-op Example
    ///
    /// ```
    /// use statsd_udp::{StatsdClient, NopMetricSink};
    ///
    /// let prefix = "my.stats";
    /// let client = StatsdClient::from_sink(prefix, NopMetricSink);
    /// ```
    pub fn from_sink<T>(prefix: &str, sink: T) -> Self
    where
        T: MetricSink + Sync + Send + RefUnwindSafe + 'static,
    {
        Self::builder(prefix, sink).build()
    }

    /// Create a new builder with the provided prefix and metric sink.
    ///
    /// A prefix and a metric sink are required to create a new client
    /// instance. All other optional customizations can be set by calling
    /// methods on the returned builder. Any customizations that aren't
    /// set by the caller will use defaults.
    ///
    /// Note, though a metric prefix is required, you may pass an empty
    /// string as a prefix. In this case, the metrics emitted will use only
    /// the bare keys supplied when you call the various methods to emit
    /// metrics.
    pub fn builder<T>(prefix: &str, sink: T) -> StatsdClientBuilder
    where
        T: MetricSink + Sync + Send + RefUnwindSafe + 'static,
    {
        StatsdClientBuilder::new(prefix, sink)
    }

    /// Prefix currently applied to every metric key
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    // Create a new StatsdClient by consuming the builder
    fn from_builder(builder: StatsdClientBuilder) -> Self {
        StatsdClient {
            prefix: builder.prefix,
            sink: builder.sink,
            sampler: builder.sampler,
        }
    }
}

impl MetricBackend for StatsdClient {
    fn raw(&self, key: &str, value: &str, rate: f32) -> MetricResult<()> {
        let mut fmt = MetricFormatter::new(&self.prefix, key, value);

        match decide(self.sampler.as_ref(), rate) {
            Sampling::Unsampled => {}
            Sampling::Selected(sample_rate) => fmt.with_sample_rate(sample_rate),
            Sampling::Dropped => {
                trace!("dropped sampled metric {} at rate {}", key, rate);
                return Ok(());
            }
        }

        self.sink.emit(fmt.format().as_bytes())?;
        Ok(())
    }
}

impl Counted for StatsdClient {}

impl Gauged for StatsdClient {}

impl Timed for StatsdClient {}

impl Statter for StatsdClient {
    fn set_prefix(&mut self, prefix: &str) {
        self.prefix = prefix.to_string();
    }

    fn close(self) -> MetricResult<()> {
        self.sink.close()
    }
}

impl fmt::Debug for StatsdClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StatsdClient {{ prefix: {:?}, sink: ..., sampler: ... }}", self.prefix)
    }
}

impl<T> MetricBackend for Option<T>
where
    T: MetricBackend,
{
    fn raw(&self, key: &str, value: &str, rate: f32) -> MetricResult<()> {
        match self {
            Some(client) => client.raw(key, value, rate),
            None => Ok(()),
        }
    }
}

impl<T> Counted for Option<T> where T: Counted {}

impl<T> Gauged for Option<T> where T: Gauged {}

impl<T> Timed for Option<T> where T: Timed {}

impl<T> Statter for Option<T>
where
    T: Statter,
{
    fn set_prefix(&mut self, prefix: &str) {
        if let Some(client) = self {
            client.set_prefix(prefix);
        }
    }

    fn close(self) -> MetricResult<()> {
        match self {
            Some(client) => client.close(),
            None => Ok(()),
        }
    }
}
