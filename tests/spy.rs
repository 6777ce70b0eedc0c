use statsd_udp::prelude::*;
use statsd_udp::{SpyMetricSink, StatsdClient};
use crossbeam_channel::TryRecvError;

mod utils;
use utils::{run_arc_threaded_test, METRICS_PER_ITERATION, NUM_ITERATIONS, NUM_THREADS};

#[test]
fn test_statsd_client_spy_sink_single_threaded() {
    let (rx, sink) = SpyMetricSink::new();
    let client = StatsdClient::from_sink("statsd", sink);
    run_arc_threaded_test(client, 1, 1);

    assert_eq!(METRICS_PER_ITERATION as usize, rx.try_iter().count());
}

#[test]
fn test_statsd_client_spy_sink_many_threaded() {
    let (rx, sink) = SpyMetricSink::new();
    let client = StatsdClient::from_sink("statsd", sink);
    run_arc_threaded_test(client, NUM_THREADS, NUM_ITERATIONS);

    let expected = NUM_THREADS * NUM_ITERATIONS * METRICS_PER_ITERATION;
    let lines: Vec<_> = rx.try_iter().map(|m| String::from_utf8(m).unwrap()).collect();

    assert_eq!(expected as usize, lines.len());
    assert!(lines.iter().all(|l| l.starts_with("statsd.some.")));
}

#[test]
fn test_statsd_client_close_releases_sink() {
    let (rx, sink) = SpyMetricSink::new();
    let client = StatsdClient::from_sink("statsd", sink);

    client.inc("some.counter", 1, 1.0).unwrap();
    client.close().unwrap();

    assert_eq!(b"statsd.some.counter:1|c".to_vec(), rx.recv().unwrap());
    assert_eq!(Err(TryRecvError::Disconnected), rx.try_recv());
}

#[test]
fn test_absent_client_sends_nothing() {
    let (rx, sink) = SpyMetricSink::new();
    let present = Some(StatsdClient::from_sink("statsd", sink));
    let absent: Option<StatsdClient> = None;

    absent.inc("some.counter", 1, 1.0).unwrap();
    absent.gauge("some.gauge", 1, 1.0).unwrap();
    absent.timing("some.timer", 1, 1.0).unwrap();
    absent.close().unwrap();

    assert_eq!(Err(TryRecvError::Empty), rx.try_recv());
    drop(present);
}
