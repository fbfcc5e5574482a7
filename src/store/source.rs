use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use super::FetchError;
use crate::records::{Record, seed};

/// Default backend route serving the advocate list.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/advocates";

/// Somewhere advocate records can be read from.
pub trait RecordSource: Send + Sync {
    /// Perform one read. Implementations do not retry.
    fn fetch(&self) -> Result<Vec<Record>, FetchError>;

    /// Short human-readable origin, shown in the UI and logs.
    fn describe(&self) -> String;
}

#[derive(Deserialize)]
struct Envelope {
    data: Vec<Record>,
}

/// Decode a `{ "data": [...] }` payload. Any other shape is an error.
pub fn decode_payload(bytes: &[u8]) -> Result<Vec<Record>, FetchError> {
    let envelope: Envelope = serde_json::from_slice(bytes)?;
    Ok(envelope.data)
}

/// Reads the advocate list with a single GET request.
#[derive(Debug, Clone)]
pub struct HttpSource {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl HttpSource {
    /// Build a source for `endpoint`. Without a timeout the request waits for
    /// the server to answer or fail.
    pub fn new(
        endpoint: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, FetchError> {
        // `None` disables reqwest's built-in 30s default.
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("advocates/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl RecordSource for HttpSource {
    fn fetch(&self) -> Result<Vec<Record>, FetchError> {
        debug!(endpoint = %self.endpoint, "requesting advocate list");
        let request_error = |source| FetchError::Request {
            endpoint: self.endpoint.clone(),
            source,
        };

        let response = self
            .client
            .get(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().map_err(request_error)?;
        let records = decode_payload(&body)?;
        debug!(count = records.len(), "decoded advocate list");
        Ok(records)
    }

    fn describe(&self) -> String {
        self.endpoint.clone()
    }
}

/// Reads the same `{ data: [...] }` envelope from a local JSON file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for FileSource {
    fn fetch(&self) -> Result<Vec<Record>, FetchError> {
        let bytes = fs::read(&self.path).map_err(|source| FetchError::Io {
            path: self.path.clone(),
            source,
        })?;
        decode_payload(&bytes)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Serves the built-in mock advocates.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedSource;

impl RecordSource for SeedSource {
    fn fetch(&self) -> Result<Vec<Record>, FetchError> {
        Ok(seed::advocates())
    }

    fn describe(&self) -> String {
        "built-in seed data".to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    use super::*;

    /// Serve exactly one HTTP response on a loopback port and return its URL.
    fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("addr");
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept");
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|window| window == b"\r\n\r\n") {
                let read = stream.read(&mut buf).expect("read");
                if read == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..read]);
            }
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).expect("write");
        });
        format!("http://{addr}/api/advocates")
    }

    #[test]
    fn decode_accepts_data_envelope() {
        let records = decode_payload(br#"{"data":[{"firstName":"Jane","yearsOfExperience":4}]}"#)
            .expect("decode");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].first_name, "Jane");
    }

    #[test]
    fn decode_rejects_other_shapes() {
        let payloads: [&[u8]; 4] = [
            br#"[{"firstName":"Jane"}]"#,
            br#"{"advocates":[]}"#,
            br#"{"data":{"firstName":"Jane"}}"#,
            b"not json",
        ];
        for payload in payloads {
            assert!(
                matches!(decode_payload(payload), Err(FetchError::Payload(_))),
                "payload {:?} should be rejected",
                String::from_utf8_lossy(payload)
            );
        }
    }

    #[test]
    fn http_source_reads_advocates() {
        let url = serve_once(
            "200 OK",
            r#"{"data":[{"id":1,"firstName":"Jane","lastName":"Doe","city":"Austin","degree":"MD","specialties":["Cardiology"],"yearsOfExperience":10,"phoneNumber":5551234567}]}"#,
        );
        let source = HttpSource::new(url, Some(Duration::from_secs(5))).expect("client");
        let records = source.fetch().expect("fetch");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, Some(1));
        assert_eq!(records[0].city, "Austin");
    }

    #[test]
    fn http_source_reports_non_success_status() {
        let url = serve_once("500 Internal Server Error", "{}");
        let source = HttpSource::new(url, Some(Duration::from_secs(5))).expect("client");
        match source.fetch() {
            Err(FetchError::Status { status, .. }) => assert_eq!(status, 500),
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[test]
    fn http_source_rejects_malformed_body() {
        let url = serve_once("200 OK", r#"{"rows":[]}"#);
        let source = HttpSource::new(url, Some(Duration::from_secs(5))).expect("client");
        assert!(matches!(source.fetch(), Err(FetchError::Payload(_))));
    }

    #[test]
    fn http_source_reports_connection_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("addr");
        drop(listener);
        let source = HttpSource::new(format!("http://{addr}/"), Some(Duration::from_secs(5)))
            .expect("client");
        assert!(matches!(source.fetch(), Err(FetchError::Request { .. })));
    }

    #[test]
    fn file_source_reads_envelope() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{"data":[{{"firstName":"Ada","city":"Boston"}}]}}"#).expect("write");
        let source = FileSource::new(file.path());
        let records = source.fetch().expect("fetch");
        assert_eq!(records[0].city, "Boston");
    }

    #[test]
    fn file_source_reports_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let source = FileSource::new(dir.path().join("absent.json"));
        assert!(matches!(source.fetch(), Err(FetchError::Io { .. })));
    }

    #[test]
    fn seed_source_returns_seed_data() {
        let records = SeedSource.fetch().expect("seed");
        assert_eq!(records, seed::advocates());
    }
}
