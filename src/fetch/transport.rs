//! Network transport seam.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::error::{DatasetError, Result};

/// Progress sink invoked with `(bytes_written, bytes_expected)`.
///
/// `bytes_expected` is `None` when the remote end does not announce a size.
pub type ProgressSink<'a> = &'a mut dyn FnMut(u64, Option<u64>);

/// Performs the byte transfer for a single remote resource.
///
/// Implementations write the complete payload to `dest` and report progress
/// zero or more times before returning. They do not retry and expose no
/// cancellation; a started transfer runs to completion or failure.
pub trait Transport: Send + Sync {
    /// Transfer `uri` to the local file `dest`.
    ///
    /// # Errors
    ///
    /// A network error when the transfer fails or is interrupted; a storage
    /// error when `dest` cannot be written.
    fn download(&self, uri: &str, dest: &Path, on_progress: ProgressSink<'_>) -> Result<()>;
}

const USER_AGENT: &str = concat!("acopiar/", env!("CARGO_PKG_VERSION"));
const CHUNK_SIZE: usize = 64 * 1024;

/// HTTP(S) GET transport over a blocking client.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Create the transport with its HTTP client.
    ///
    /// # Errors
    ///
    /// Returns a network error when the client cannot be initialized.
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| DatasetError::Network {
                uri: String::new(),
                message: format!("failed to initialize HTTP client: {e}"),
            })?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn download(&self, uri: &str, dest: &Path, on_progress: ProgressSink<'_>) -> Result<()> {
        let response = self
            .client
            .get(uri)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|e| DatasetError::network(uri, format!("GET {uri} failed: {e}")))?;

        let expected = response.content_length();
        let mut reader = response;
        let mut file = File::create(dest).map_err(|e| DatasetError::storage(dest, e))?;
        let mut buf = vec![0u8; CHUNK_SIZE];
        let mut written: u64 = 0;

        loop {
            let n = reader
                .read(&mut buf)
                .map_err(|e| DatasetError::network(uri, format!("transfer of {uri} interrupted: {e}")))?;
            if n == 0 {
                break;
            }
            file.write_all(&buf[..n]).map_err(|e| DatasetError::storage(dest, e))?;
            written += n as u64;
            on_progress(written, expected);
        }

        Ok(())
    }
}
