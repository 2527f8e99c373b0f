//! End-to-end runs of the binary against a throwaway local HTTP server.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::process::{Command, Output};
use std::str;
use std::thread;

/// Serves exactly one request with the given status line and body, returning
/// the URL to fetch.
fn serve_once(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
    });

    format!("http://127.0.0.1:{port}/valid_hosts.txt")
}

fn run_with_source(url: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_stun-providers"))
        .arg("--source")
        .arg(url)
        .env_remove("RUST_LOG")
        .env_remove("HTTP_PROXY")
        .env_remove("http_proxy")
        .env_remove("ALL_PROXY")
        .env_remove("all_proxy")
        .output()
        .expect("Failed to execute binary")
}

fn stdout(output: &Output) -> &str {
    str::from_utf8(&output.stdout).unwrap()
}

#[test]
fn prints_groups_smallest_first() {
    let url = serve_once(
        "200 OK",
        "a.big.net:3478\nsolo.one.org:3478\nb.big.net:19302\nhost:3478\nother:3478\nc.big.net:3478\n",
    );
    let output = run_with_source(&url);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "{'one.org': ['solo.one.org:3478'], '': ['host:3478', 'other:3478'], \
         'big.net': ['a.big.net:3478', 'b.big.net:19302', 'c.big.net:3478']}\n"
    );
}

#[test]
fn carriage_returns_are_kept_in_entries() {
    let url = serve_once("200 OK", "a.x.org:1\r\nb.x.org:2\r\n");
    let output = run_with_source(&url);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "{'x.org': ['a.x.org:1\\r', 'b.x.org:2']}\n");
}

#[test]
fn empty_list_prints_empty_mapping() {
    let url = serve_once("200 OK", "\n");
    let output = run_with_source(&url);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "{}\n");
}

#[test]
fn http_error_is_printed_and_exit_is_success() {
    let url = serve_once("404 Not Found", "");
    let output = run_with_source(&url);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "Error fetching data: 404\n");
}

#[test]
fn malformed_line_is_printed_and_exit_is_success() {
    let url = serve_once("200 OK", "badline\nhost.example.com:1\n");
    let output = run_with_source(&url);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "not enough values to unpack (expected 2, got 1)\n"
    );
}

#[test]
fn connection_failure_is_printed_and_exit_is_success() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let output = run_with_source(&format!("http://127.0.0.1:{port}/valid_hosts.txt"));

    assert!(output.status.success());
    let out = stdout(&output);
    assert_eq!(out.lines().count(), 1, "expected one line, got: {out:?}");
    assert!(!out.starts_with('{'));
}

#[test]
fn invalid_source_is_a_usage_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_stun-providers"))
        .args(["--source", "not a url"])
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
