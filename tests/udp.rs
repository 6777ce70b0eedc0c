use statsd_udp::prelude::*;
use statsd_udp::{ErrorKind, StatsdClient, UdpMetricSink, DEFAULT_PORT};
use std::net::UdpSocket;
use std::time::Duration;

mod utils;
use utils::{new_server, recv_line, run_arc_threaded_test, NUM_ITERATIONS, NUM_THREADS};

const TARGET_HOST: (&str, u16) = ("127.0.0.1", DEFAULT_PORT);

#[test]
fn test_statsd_client_from_udp_host_bad_address() {
    let res = StatsdClient::from_udp_host("not-a-host-and-port", "prefix");
    assert_eq!(ErrorKind::ResolutionError, res.unwrap_err().kind());
}

#[test]
fn test_statsd_client_udp_round_trip() {
    let (server, addr) = new_server();
    let client = StatsdClient::from_udp_host(addr, "app").unwrap();

    client.inc("hits", 5, 1.0).unwrap();
    client.dec("hits", 5, 1.0).unwrap();
    client.gauge("level", -3, 1.0).unwrap();
    client.gauge_delta("level", 3, 1.0).unwrap();
    client.timing("latency", 250, 1.0).unwrap();
    client
        .timing_duration("latency", Duration::from_micros(12_500), 1.0)
        .unwrap();
    client.raw("uniques", "42|s", 1.0).unwrap();

    assert_eq!("app.hits:5|c", recv_line(&server));
    assert_eq!("app.hits:-5|c", recv_line(&server));
    assert_eq!("app.level:-3|g", recv_line(&server));
    assert_eq!("app.level:+3|g", recv_line(&server));
    assert_eq!("app.latency:250|ms", recv_line(&server));
    assert_eq!("app.latency:12.50|ms", recv_line(&server));
    assert_eq!("app.uniques:42|s", recv_line(&server));

    client.close().unwrap();
}

#[test]
fn test_statsd_client_udp_one_datagram_per_metric() {
    let (server, addr) = new_server();
    let client = StatsdClient::from_udp_host(addr, "").unwrap();

    for i in 0..10 {
        client.inc("some.counter", i, 1.0).unwrap();
    }

    for i in 0..10 {
        assert_eq!(format!("some.counter:{}|c", i), recv_line(&server));
    }
}

#[test]
fn test_statsd_client_udp_set_prefix() {
    let (server, addr) = new_server();
    let mut client = StatsdClient::from_udp_host(addr, "").unwrap();

    client.inc("hits", 1, 1.0).unwrap();
    client.set_prefix("app");
    client.inc("hits", 1, 1.0).unwrap();

    assert_eq!("hits:1|c", recv_line(&server));
    assert_eq!("app.hits:1|c", recv_line(&server));
}

#[test]
fn test_statsd_client_udp_custom_socket() {
    let (server, addr) = new_server();
    let socket = UdpSocket::bind("127.0.0.1:0").unwrap();
    let sink = UdpMetricSink::from(addr, socket).unwrap();
    let client = StatsdClient::from_sink("custom", sink);

    client.gauge("some.gauge", 9, 1.0).unwrap();
    assert_eq!("custom.some.gauge:9|g", recv_line(&server));
}

#[test]
fn test_statsd_client_udp_sink_single_threaded() {
    let client = StatsdClient::from_udp_host(TARGET_HOST, "statsd").unwrap();
    run_arc_threaded_test(client, 1, 1);
}

#[ignore]
#[test]
fn test_statsd_client_udp_sink_many_threaded() {
    let client = StatsdClient::from_udp_host(TARGET_HOST, "statsd").unwrap();
    run_arc_threaded_test(client, NUM_THREADS, NUM_ITERATIONS);
}
