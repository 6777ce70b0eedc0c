use criterion::{criterion_group, criterion_main, Criterion};
use statsd_udp::prelude::*;
use statsd_udp::{NopMetricSink, StatsdClient, DEFAULT_PORT};
use std::time::Duration;

fn new_nop_client() -> StatsdClient {
    StatsdClient::from_sink("client.bench", NopMetricSink)
}

fn new_udp_client() -> StatsdClient {
    let host = ("127.0.0.1", DEFAULT_PORT);
    StatsdClient::from_udp_host(host, "client.bench").unwrap()
}

fn benchmark_statsdclient_nop(c: &mut Criterion) {
    let client = new_nop_client();

    c.bench_function("statsdclient_nop_counter", |b| {
        b.iter(|| client.inc("some.counter", 4, 1.0))
    });

    c.bench_function("statsdclient_nop_gauge_delta", |b| {
        b.iter(|| client.gauge_delta("some.gauge", -4, 1.0))
    });

    c.bench_function("statsdclient_nop_timing_duration", |b| {
        b.iter(|| client.timing_duration("some.timer", Duration::from_micros(12_500), 1.0))
    });

    c.bench_function("statsdclient_nop_counter_sampled", |b| {
        b.iter(|| client.inc("some.counter", 4, 0.5))
    });
}

fn benchmark_statsdclient_udp(c: &mut Criterion) {
    let client = new_udp_client();

    c.bench_function("statsdclient_udp_counter", |b| {
        b.iter(|| client.inc("some.counter", 4, 1.0))
    });
}

criterion_group!(benches, benchmark_statsdclient_nop, benchmark_statsdclient_udp);

criterion_main!(benches);
