use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

use crate::error::SheetResult;

const MAX_HEADER_LINES: usize = 100;
/// Upper bound on the request line plus headers.
pub(super) const MAX_REQUEST_BYTES: u64 = 8 * 1024;
/// Time a client gets to deliver its request head.
pub(super) const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Request line of an incoming HTTP/1.x request; headers are drained and
/// discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct RequestLine {
    pub method: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Response {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl Response {
    pub fn ok(content_type: &'static str, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            content_type,
            body: body.into(),
        }
    }

    fn plain(status: u16, body: &'static str) -> Self {
        Self {
            status,
            content_type: "text/plain; charset=utf-8",
            body: body.as_bytes().to_vec(),
        }
    }

    pub fn not_found() -> Self {
        Self::plain(404, "not found\n")
    }

    pub fn method_not_allowed() -> Self {
        Self::plain(405, "method not allowed\n")
    }

    pub fn bad_request() -> Self {
        Self::plain(400, "bad request\n")
    }

    pub fn request_timeout() -> Self {
        Self::plain(408, "request timeout\n")
    }

    pub fn uri_too_long() -> Self {
        Self::plain(414, "request line too long\n")
    }

    pub fn header_too_large() -> Self {
        Self::plain(431, "request headers too large\n")
    }

    fn reason(&self) -> &'static str {
        match self.status {
            200 => "OK",
            400 => "Bad Request",
            404 => "Not Found",
            405 => "Method Not Allowed",
            408 => "Request Timeout",
            414 => "URI Too Long",
            431 => "Request Header Fields Too Large",
            _ => "Internal Server Error",
        }
    }

    pub async fn write_to(&self, stream: &mut TcpStream) -> SheetResult<()> {
        let mut head = format!(
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n",
            self.status,
            self.reason(),
            self.content_type,
            self.body.len()
        );
        if self.status == 405 {
            head.push_str("Allow: GET\r\n");
        }
        head.push_str("\r\n");

        stream.write_all(head.as_bytes()).await?;
        stream.write_all(&self.body).await?;
        stream.flush().await?;
        Ok(())
    }
}

/// Outcome of reading one request off a connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Incoming {
    Request(RequestLine),
    Rejected(Response),
}

/// Reads the request line and skips the header block.
///
/// At most `MAX_REQUEST_BYTES` are consumed. A request line or header that
/// does not end within that budget is rejected with 414 or 431; any other
/// malformed or truncated request is rejected with 400.
pub(super) async fn read_request<S>(stream: S) -> SheetResult<Incoming>
where
    S: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(stream.take(MAX_REQUEST_BYTES));
    let mut line = Vec::new();
    reader.read_until(b'\n', &mut line).await?;
    if !line.ends_with(b"\n") {
        let response = if reader.get_ref().limit() == 0 {
            Response::uri_too_long()
        } else {
            Response::bad_request()
        };
        return Ok(Incoming::Rejected(response));
    }

    let line = String::from_utf8_lossy(&line);
    let mut parts = line.split_whitespace();
    let (Some(method), Some(target), Some(version)) = (parts.next(), parts.next(), parts.next())
    else {
        return Ok(Incoming::Rejected(Response::bad_request()));
    };
    if !version.starts_with("HTTP/1.") {
        return Ok(Incoming::Rejected(Response::bad_request()));
    }
    let request = RequestLine {
        method: method.to_owned(),
        path: target.split(['?', '#']).next().unwrap_or("/").to_owned(),
    };

    let mut header = Vec::new();
    for _ in 0..MAX_HEADER_LINES {
        header.clear();
        let read = reader.read_until(b'\n', &mut header).await?;
        if read == 0 || header == b"\r\n" || header == b"\n" {
            return Ok(Incoming::Request(request));
        }
        if !header.ends_with(b"\n") {
            return Ok(Incoming::Rejected(if reader.get_ref().limit() == 0 {
                Response::header_too_large()
            } else {
                Response::bad_request()
            }));
        }
    }
    Ok(Incoming::Rejected(Response::header_too_large()))
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn read(raw: &[u8]) -> Incoming {
        read_request(raw).await.expect("in-memory read")
    }

    fn status(incoming: &Incoming) -> u16 {
        match incoming {
            Incoming::Request(_) => 0,
            Incoming::Rejected(response) => response.status,
        }
    }

    #[tokio::test]
    async fn parses_request_line_and_strips_query() {
        let incoming = read(b"GET /page.json?v=1#top HTTP/1.1\r\nHost: x\r\n\r\n").await;
        assert_eq!(
            incoming,
            Incoming::Request(RequestLine {
                method: "GET".to_owned(),
                path: "/page.json".to_owned(),
            })
        );
    }

    #[tokio::test]
    async fn malformed_or_truncated_requests_are_bad_requests() {
        assert_eq!(status(&read(b"").await), 400);
        assert_eq!(status(&read(b"GET /").await), 400);
        assert_eq!(status(&read(b"GET /\r\n\r\n").await), 400);
        assert_eq!(status(&read(b"GET / SPDY/3\r\n\r\n").await), 400);
        assert_eq!(status(&read(b"GET / HTTP/1.1\r\nHost: x").await), 400);
    }

    #[tokio::test]
    async fn oversized_request_line_is_rejected_without_reading_past_the_cap() {
        let mut raw = b"GET /".to_vec();
        raw.extend(std::iter::repeat_n(b'a', 4 * MAX_REQUEST_BYTES as usize));
        raw.extend_from_slice(b" HTTP/1.1\r\n\r\n");
        assert_eq!(status(&read(&raw).await), 414);
    }

    #[tokio::test]
    async fn oversized_or_endless_headers_are_rejected() {
        let mut raw = b"GET / HTTP/1.1\r\nX-Big: ".to_vec();
        raw.extend(std::iter::repeat_n(b'b', MAX_REQUEST_BYTES as usize));
        raw.extend_from_slice(b"\r\n\r\n");
        assert_eq!(status(&read(&raw).await), 431);

        let mut many = b"GET / HTTP/1.1\r\n".to_vec();
        for _ in 0..=MAX_HEADER_LINES {
            many.extend_from_slice(b"X: y\r\n");
        }
        many.extend_from_slice(b"\r\n");
        assert_eq!(status(&read(&many).await), 431);
    }
}
