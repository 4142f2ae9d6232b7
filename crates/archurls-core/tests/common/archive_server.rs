//! Minimal HTTP/1.1 server standing in for archive index APIs in integration tests.
//!
//! Routes match on the request path (query ignored). Every request head is
//! recorded so tests can assert on the query string and headers sent.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone)]
pub struct Route {
    pub path: &'static str,
    pub status: u16,
    pub body: String,
}

impl Route {
    pub fn ok(path: &'static str, body: impl Into<String>) -> Self {
        Self {
            path,
            status: 200,
            body: body.into(),
        }
    }

    pub fn status(path: &'static str, status: u16) -> Self {
        Self {
            path,
            status,
            body: String::new(),
        }
    }
}

pub struct ArchiveServer {
    /// Base URL with trailing slash, e.g. "http://127.0.0.1:12345/".
    pub base: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl ArchiveServer {
    /// Request heads received so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Starts a server in a background thread. It runs until the process exits.
pub fn start(routes: Vec<Route>) -> ArchiveServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes = Arc::new(routes);
    let requests = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            let log = Arc::clone(&log);
            thread::spawn(move || handle(stream, &routes, &log));
        }
    });
    ArchiveServer {
        base: format!("http://127.0.0.1:{}/", port),
        requests,
    }
}

fn handle(mut stream: TcpStream, routes: &[Route], log: &Mutex<Vec<String>>) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let Some(head) = read_head(&mut stream) else {
        return;
    };
    let target = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();
    log.lock().unwrap().push(head);

    let path = target.split('?').next().unwrap_or("/");
    let (status, body) = match routes.iter().find(|r| r.path == path) {
        Some(route) => (route.status, route.body.as_str()),
        None => (404, ""),
    };
    let response = format!(
        "HTTP/1.1 {} X\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

/// Read until the blank line ending the request head.
fn read_head(stream: &mut TcpStream) -> Option<String> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut chunk).ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    String::from_utf8(buf).ok()
}
