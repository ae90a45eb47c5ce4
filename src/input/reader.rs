//! Reading mouse reports from a terminal stream.
//!
//! A chunk that fails to decode is logged and dropped; reading continues with
//! the next chunk. Malformed chunks are never retried.

use crate::error::Result;
use crate::event::{LogLevel, emit_log};
use crate::input::decoder::Decoder;
use crate::input::options::ReaderOptions;
use crate::terminal::MouseEvent;
use std::io::{self, Read};
use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};

/// Decodes mouse events from a byte stream, one read chunk at a time.
///
/// Each chunk must hold whole reports; a report split across two reads is
/// dropped.
#[derive(Debug)]
pub struct InputReader<R> {
    reader: R,
    decoder: Decoder,
    buf: Vec<u8>,
}

impl<R: Read> InputReader<R> {
    /// Create a reader with default decoder and reader options.
    pub fn new(reader: R) -> Self {
        Self::with_options(reader, Decoder::default(), ReaderOptions::default())
    }

    /// Create a reader with a custom decoder and reader options.
    pub fn with_options(reader: R, decoder: Decoder, options: ReaderOptions) -> Self {
        Self {
            reader,
            decoder,
            buf: vec![0; options.chunk_size.max(1)],
        }
    }

    /// Get the decoder.
    #[must_use]
    pub fn decoder(&self) -> &Decoder {
        &self.decoder
    }

    /// Read one chunk and decode it.
    ///
    /// Returns `Ok(None)` at end of stream. A chunk that does not decode
    /// yields an empty batch.
    pub fn read_events(&mut self) -> Result<Option<Vec<MouseEvent>>> {
        let n = match self.reader.read(&mut self.buf) {
            Ok(0) => return Ok(None),
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => return Ok(Some(Vec::new())),
            Err(e) => return Err(e.into()),
        };

        match self.decoder.decode(&self.buf[..n]) {
            Ok(events) => {
                emit_log(
                    LogLevel::Debug,
                    &format!("decoded {} mouse event(s) from {n} bytes", events.len()),
                );
                Ok(Some(events))
            }
            Err(err) => {
                emit_log(
                    LogLevel::Warn,
                    &format!("dropping {n}-byte input chunk: {err}"),
                );
                Ok(Some(Vec::new()))
            }
        }
    }

    /// Unwrap the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read + Send + 'static> InputReader<R> {
    /// Run the read loop on a dedicated thread.
    ///
    /// Events are forwarded in the order they were decoded. The thread stops
    /// at end of stream, on an I/O error (returned from the join handle), or
    /// once the receiver is dropped.
    pub fn spawn(mut self) -> io::Result<(Receiver<MouseEvent>, JoinHandle<Result<()>>)> {
        let (tx, rx) = mpsc::channel();

        let handle = thread::Builder::new()
            .name("termouse-input".to_string())
            .spawn(move || {
                while let Some(events) = self.read_events()? {
                    for event in events {
                        if tx.send(event).is_err() {
                            return Ok(());
                        }
                    }
                }
                emit_log(LogLevel::Debug, "input stream closed");
                Ok(())
            })?;

        Ok((rx, handle))
    }
}
