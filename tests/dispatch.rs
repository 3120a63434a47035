//! Dispatcher tests against a local one-shot HTTP fixture.
//!
//! Each test spins up a `TcpListener` that answers exactly one request with
//! a canned response and hands back the request head it read, so tests can
//! assert on outgoing headers without touching the live service.

use itunes_api::{ItunesClient, ItunesError};
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

/// Serve one canned HTTP response, returning the base URL and a handle that
/// joins to the raw request head.
fn one_shot(status_line: &str, body: &str) -> (String, thread::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {status_line}\r\n\
         Content-Type: text/html\r\n\
         Content-Length: {}\r\n\
         Connection: close\r\n\r\n{body}",
        body.len(),
    );
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = stream.read(&mut buf).unwrap();
            request.extend_from_slice(&buf[..n]);
            if n == 0 || request.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }
        stream.write_all(response.as_bytes()).unwrap();
        String::from_utf8_lossy(&request).into_owned()
    });
    (format!("http://{addr}/"), handle)
}

#[test]
fn fetch_json_parses_body() {
    let (url, server) = one_shot(
        "200 OK",
        r#"{"resultCount":1,"results":[{"artistName":"Wilco"}]}"#,
    );
    let client = ItunesClient::new().unwrap();
    let resp = client.fetch_json(&url).unwrap();
    server.join().unwrap();

    assert_eq!(resp.status, 200);
    assert_eq!(resp.body["resultCount"], 1);
    assert_eq!(resp.body["results"][0]["artistName"], "Wilco");
}

#[test]
fn fetch_json_rejects_malformed_body() {
    let (url, server) = one_shot("200 OK", "<html>not json</html>");
    let client = ItunesClient::new().unwrap();
    let err = client.fetch_json(&url).unwrap_err();
    server.join().unwrap();

    assert!(matches!(err, ItunesError::Json(_)));
}

#[test]
fn storefront_sends_headers_and_returns_raw_body() {
    let (url, server) = one_shot("200 OK", "<html><body>artist page</body></html>");
    let client = ItunesClient::new().unwrap();
    let resp = client.fetch_storefront(&url).unwrap();
    let request = server.join().unwrap();

    assert_eq!(resp.status, 200);
    assert_eq!(resp.body, "<html><body>artist page</body></html>");
    let head = request.to_ascii_lowercase();
    assert!(head.contains("x-apple-store-front: 143441-1,5"));
    assert!(request.contains("iTunes Store Toolkit"));
}

#[test]
fn exists_is_true_for_200() {
    let (url, server) = one_shot("200 OK", "");
    let client = ItunesClient::new().unwrap();
    assert!(client.exists(&url).unwrap());
    server.join().unwrap();
}

#[test]
fn exists_is_false_for_404_without_error() {
    let (url, server) = one_shot("404 Not Found", "");
    let client = ItunesClient::new().unwrap();
    assert!(!client.exists(&url).unwrap());
    server.join().unwrap();
}

#[test]
fn transport_failure_is_an_error_not_false() {
    // Bind then drop so nothing is listening on the port.
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ItunesClient::new().unwrap();
    let err = client.exists(&format!("http://{addr}/")).unwrap_err();
    assert!(matches!(err, ItunesError::Http(_)));
}

#[test]
fn responses_expose_headers() {
    let (url, server) = one_shot("200 OK", "{}");
    let client = ItunesClient::new().unwrap();
    let resp = client.fetch_json(&url).unwrap();
    server.join().unwrap();

    assert!(
        resp.headers
            .iter()
            .any(|(name, value)| name == "content-type" && value == "text/html")
    );
}
