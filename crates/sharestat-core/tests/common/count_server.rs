//! Minimal HTTP/1.1 server standing in for the counting endpoint.
//!
//! Serves a single configured body to every GET and records the request
//! targets so tests can assert what was asked for.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone, Copy)]
pub struct CountServerOptions {
    /// Status code to respond with (the body is served either way).
    pub status: u16,
}

impl Default for CountServerOptions {
    fn default() -> Self {
        Self { status: 200 }
    }
}

/// Handle to a running stub endpoint. The server runs until the process
/// exits.
pub struct CountServer {
    base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl CountServer {
    /// Base URL without a trailing slash (e.g. "http://127.0.0.1:12345").
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request targets received so far (e.g. "/urls/count.json?url=a.com").
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Starts a server responding 200 with `body` to every GET.
pub fn start(body: &str) -> CountServer {
    start_with_options(body, CountServerOptions::default())
}

/// Like `start` but allows customizing the response status.
pub fn start_with_options(body: &str, opts: CountServerOptions) -> CountServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body.to_string());
    let requests = Arc::new(Mutex::new(Vec::new()));
    let requests_srv = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            let requests = Arc::clone(&requests_srv);
            thread::spawn(move || handle(stream, &body, opts, &requests));
        }
    });
    CountServer {
        base_url: format!("http://127.0.0.1:{}", port),
        requests,
    }
}

/// Returns a base URL nothing listens on, for provoking transport errors.
pub fn refused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

fn handle(
    mut stream: std::net::TcpStream,
    body: &str,
    opts: CountServerOptions,
    requests: &Mutex<Vec<String>>,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let (method, target) = parse_request(request);
    requests.lock().unwrap().push(target.to_string());
    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\n\r\n");
        return;
    }
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n",
        opts.status,
        reason(opts.status),
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(body.as_bytes());
}

/// Returns (method, request target) from the request line.
fn parse_request(request: &str) -> (&str, &str) {
    let line = request.lines().next().unwrap_or("");
    let mut parts = line.split_whitespace();
    let method = parts.next().unwrap_or("");
    let target = parts.next().unwrap_or("");
    (method, target)
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "",
    }
}
