use async_trait::async_trait;
use bytes::Bytes;
use futures::channel::mpsc;
use recordboard_application::ports::EventSource;
use recordboard_domain::{DomainError, InboundEvent};
use std::io::{self, Read};
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio_util::io::StreamReader;
use tracing::{debug, trace};

use super::frame::decode_frame;

const READ_CHUNK: usize = 8 * 1024;

/// Byte stream fed by a dedicated reader thread.
pub type ThreadReader = StreamReader<mpsc::UnboundedReceiver<io::Result<Bytes>>, Bytes>;

/// Reads newline-delimited text frames and decodes each into an event.
///
/// Blank lines and non-event packets are skipped. A frame that fails to
/// decode (including one that is not UTF-8) is reported with its line number;
/// the next call continues with the following line.
pub struct JsonLinesEventSource<R> {
    reader: R,
    line: Vec<u8>,
    line_number: u64,
}

impl<R> JsonLinesEventSource<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: Vec::new(),
            line_number: 0,
        }
    }

    /// Number of lines consumed so far.
    pub fn line_number(&self) -> u64 {
        self.line_number
    }
}

impl JsonLinesEventSource<ThreadReader> {
    /// Reads frames from stdin.
    ///
    /// Stdin is read on its own thread rather than tokio's blocking pool, so
    /// a pending read never holds up runtime shutdown.
    pub fn stdin() -> Result<Self, DomainError> {
        Self::from_blocking_reader("stdin-reader", io::stdin())
    }

    /// Reads frames from a blocking reader drained on a named thread.
    ///
    /// The thread stops at end of input, on a read error (which is forwarded
    /// as the next item), or once the source has been dropped.
    pub fn from_blocking_reader<T>(thread_name: &str, mut reader: T) -> Result<Self, DomainError>
    where
        T: Read + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded();

        std::thread::Builder::new()
            .name(thread_name.to_string())
            .spawn(move || {
                let mut buf = vec![0u8; READ_CHUNK];
                loop {
                    let item = match reader.read(&mut buf) {
                        Ok(0) => break,
                        Ok(n) => Ok(Bytes::copy_from_slice(&buf[..n])),
                        Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                        Err(e) => Err(e),
                    };
                    let failed = item.is_err();
                    if tx.unbounded_send(item).is_err() || failed {
                        break;
                    }
                }
                debug!("Blocking reader finished");
            })
            .map_err(|e| DomainError::IoError(format!("failed to spawn {}: {}", thread_name, e)))?;

        Ok(Self::new(StreamReader::new(rx)))
    }
}

impl JsonLinesEventSource<BufReader<File>> {
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let file = File::open(path)
            .await
            .map_err(|e| DomainError::IoError(format!("{}: {}", path.display(), e)))?;
        Ok(Self::new(BufReader::new(file)))
    }
}

#[async_trait]
impl<R> EventSource for JsonLinesEventSource<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    async fn next_event(&mut self) -> Result<Option<InboundEvent>, DomainError> {
        loop {
            self.line.clear();
            let read = self
                .reader
                .read_until(b'\n', &mut self.line)
                .await
                .map_err(|e| DomainError::IoError(e.to_string()))?;
            if read == 0 {
                return Ok(None);
            }
            self.line_number += 1;

            let text = std::str::from_utf8(&self.line).map_err(|e| {
                DomainError::InvalidFrame(format!("line {}: not UTF-8: {}", self.line_number, e))
            })?;

            match decode_frame(text) {
                Ok(Some(event)) => return Ok(Some(event)),
                Ok(None) => trace!(line = self.line_number, "Skipping non-event frame"),
                Err(e) => {
                    return Err(DomainError::InvalidFrame(format!(
                        "line {}: {}",
                        self.line_number, e
                    )))
                }
            }
        }
    }
}
