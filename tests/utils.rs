use statsd_udp::prelude::*;
use statsd_udp::StatsdClient;
use std::net::{SocketAddr, UdpSocket};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[allow(dead_code)]
pub const NUM_THREADS: u64 = 10;

#[allow(dead_code)]
pub const NUM_ITERATIONS: u64 = 100;

/// Number of metrics sent per iteration by `run_arc_threaded_test`
#[allow(dead_code)]
pub const METRICS_PER_ITERATION: u64 = 6;

#[allow(dead_code)]
pub fn run_arc_threaded_test(client: StatsdClient, num_threads: u64, iterations: u64) {
    let shared_client = Arc::new(client);

    let threads: Vec<_> = (0..num_threads)
        .map(|_| {
            let local_client = Arc::clone(&shared_client);

            thread::spawn(move || {
                for i in 0..iterations {
                    let v = i as i64;
                    local_client.inc("some.counter", v, 1.0).unwrap();
                    local_client.dec("some.counter", v, 1.0).unwrap();
                    local_client.gauge("some.gauge", v, 1.0).unwrap();
                    local_client.gauge_delta("some.gauge", v, 1.0).unwrap();
                    local_client.timing("some.timer", v, 1.0).unwrap();
                    local_client
                        .timing_duration("some.timer", Duration::from_millis(i), 1.0)
                        .unwrap();
                }
            })
        })
        .collect();

    for t in threads {
        t.join().unwrap();
    }
}

/// Bind a local socket to act as the Statsd server
#[allow(dead_code)]
pub fn new_server() -> (UdpSocket, SocketAddr) {
    let server = UdpSocket::bind("127.0.0.1:0").unwrap();
    server.set_read_timeout(Some(Duration::from_secs(5))).unwrap();
    let addr = server.local_addr().unwrap();
    (server, addr)
}

/// Receive a single datagram from the server socket as a string
#[allow(dead_code)]
pub fn recv_line(server: &UdpSocket) -> String {
    let mut buf = [0u8; 1024];
    let (n, _) = server.recv_from(&mut buf).unwrap();
    String::from_utf8(buf[..n].to_vec()).unwrap()
}
