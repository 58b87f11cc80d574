//! Local HTTP endpoint for exercising the real HTTP source and the CLI.
//!
//! Serves the same canned response to every request on a background
//! thread, and records request lines so tests can check what was sent.

use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone)]
struct CannedResponse {
    status: u16,
    reason: &'static str,
    body: String,
}

/// A background HTTP/1.1 server bound to an ephemeral localhost port.
///
/// # Example
/// ```no_run
/// use postdeck_testing::TestServer;
///
/// let server = TestServer::json(r#"[{"id":1,"userId":1,"title":"A","body":"a"}]"#).unwrap();
/// let url = server.url("/posts");
/// ```
pub struct TestServer {
    port: u16,
    requests: Arc<Mutex<Vec<String>>>,
}

impl TestServer {
    /// Serve `body` with `200 OK` and a JSON content type.
    pub fn json(body: impl Into<String>) -> std::io::Result<Self> {
        Self::start(CannedResponse {
            status: 200,
            reason: "OK",
            body: body.into(),
        })
    }

    /// Serve an error status with a short plain body.
    pub fn status(status: u16, reason: &'static str) -> std::io::Result<Self> {
        Self::start(CannedResponse {
            status,
            reason,
            body: reason.to_string(),
        })
    }

    fn start(response: CannedResponse) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let port = listener.local_addr()?.port();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let log = requests.clone();
        thread::Builder::new()
            .name("postdeck-test-server".to_string())
            .spawn(move || {
                for stream in listener.incoming() {
                    let Ok(stream) = stream else { break };
                    let _ = serve(stream, &response, &log);
                }
            })?;

        Ok(Self { port, requests })
    }

    /// Full URL for a path on this server.
    pub fn url(&self, path: &str) -> String {
        format!("http://127.0.0.1:{}{}", self.port, path)
    }

    /// Request lines received so far (e.g. `GET /posts HTTP/1.1`).
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    /// A URL on a port that nothing is listening on.
    pub fn unreachable_url() -> std::io::Result<String> {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let port = listener.local_addr()?.port();
        drop(listener);
        Ok(format!("http://127.0.0.1:{}/posts", port))
    }
}

fn serve(
    stream: TcpStream,
    response: &CannedResponse,
    log: &Mutex<Vec<String>>,
) -> std::io::Result<()> {
    let mut reader = BufReader::new(stream.try_clone()?);

    let mut request_line = String::new();
    reader.read_line(&mut request_line)?;
    if let Ok(mut log) = log.lock() {
        log.push(request_line.trim_end().to_string());
    }

    // Drain headers; GET requests carry no body
    loop {
        let mut line = String::new();
        let n = reader.read_line(&mut line)?;
        if n == 0 || line == "\r\n" || line == "\n" {
            break;
        }
    }

    let content_type = if response.status == 200 {
        "application/json"
    } else {
        "text/plain"
    };

    let mut stream = stream;
    write!(
        stream,
        "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        response.status,
        response.reason,
        content_type,
        response.body.len(),
        response.body
    )?;
    stream.flush()
}
