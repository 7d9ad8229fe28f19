//! Piped standard input
//!
//! [`read_pipe`] gulps everything on stdin up to end-of-stream and returns it
//! as a `String`. Beware: without a timeout it blocks until the writer
//! closes the pipe.
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use toolglue_core::pipe;
//!
//! let input = pipe::read_pipe(Some(Duration::from_secs(1)))?;
//! # Ok::<(), toolglue_core::Error>(())
//! ```
//!
//! With a timeout the read happens on a background thread that hands its
//! result over a one-slot channel. If the timer wins, the thread is left to
//! finish on its own: stdin has no cooperative cancellation, so it keeps the
//! stream until the writer closes it or the process exits. A timeout means
//! "no data this call", not "stdin is free to read again".
//!
//! Nothing here prints, logs, or exits.

use crate::error::{Error, Result};
use std::io::{self, BufRead, BufReader, IsTerminal, Read};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

/// Decodes UTF-8 one character at a time from a buffered reader.
struct CharDecoder<R> {
    reader: R,
}

impl<R: BufRead> CharDecoder<R> {
    fn new(reader: R) -> Self {
        Self { reader }
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.reader.fill_buf() {
                Ok([]) => return Ok(None),
                Ok(buf) => {
                    let byte = buf[0];
                    self.reader.consume(1);
                    return Ok(Some(byte));
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
    }

    /// `Ok(None)` is a clean end-of-stream between characters.
    fn next_char(&mut self) -> io::Result<Option<char>> {
        let Some(lead) = self.read_byte()? else {
            return Ok(None);
        };

        let width = match lead {
            0x00..=0x7F => return Ok(Some(char::from(lead))),
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => return Err(invalid_utf8(&[lead])),
        };

        let mut bytes = [lead, 0, 0, 0];
        for slot in bytes.iter_mut().take(width).skip(1) {
            *slot = self.read_byte()?.ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "stream ended inside a UTF-8 sequence",
                )
            })?;
        }

        let encoded = &bytes[..width];
        std::str::from_utf8(encoded)
            .ok()
            .and_then(|s| s.chars().next())
            .map(Some)
            .ok_or_else(|| invalid_utf8(encoded))
    }
}

fn invalid_utf8(bytes: &[u8]) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidData,
        format!("invalid UTF-8 sequence {bytes:02x?}"),
    )
}

/// Read `reader` to end-of-stream, decoding UTF-8 as it goes.
///
/// Any error other than a clean end-of-stream aborts the read; characters
/// decoded so far are discarded.
pub fn gulp<R: BufRead>(reader: R) -> Result<String> {
    let mut decoder = CharDecoder::new(reader);
    let mut output = String::new();

    while let Some(c) = decoder.next_char().map_err(Error::ReadFailure)? {
        output.push(c);
    }

    Ok(output)
}

/// Like [`gulp`], but give up after `timeout`.
///
/// The read runs on its own thread. Whichever of "read finished" and
/// "timeout elapsed" happens first decides the result; on timeout the
/// thread is abandoned, not cancelled.
pub fn gulp_with_timeout<R>(reader: R, timeout: Duration) -> Result<String>
where
    R: Read + Send + 'static,
{
    let (tx, rx) = mpsc::sync_channel(1);

    thread::Builder::new()
        .name("toolglue-pipe-reader".to_string())
        .spawn(move || {
            // The receiver is gone if the caller already timed out.
            let _ = tx.send(gulp(BufReader::new(reader)));
        })?;

    match rx.recv_timeout(timeout) {
        Ok(result) => result,
        Err(RecvTimeoutError::Timeout) => Err(Error::TimeoutExceeded(timeout)),
        Err(RecvTimeoutError::Disconnected) => Err(Error::ReadFailure(io::Error::other(
            "pipe reader stopped without delivering a result",
        ))),
    }
}

/// Read and return piped stdin as a string.
///
/// `None` blocks until end-of-stream. `Some(timeout)` returns
/// [`Error::TimeoutExceeded`] if stdin has not closed in time.
pub fn read_pipe(timeout: Option<Duration>) -> Result<String> {
    match timeout {
        None => gulp(io::stdin().lock()),
        Some(timeout) => gulp_with_timeout(io::stdin(), timeout),
    }
}

/// What can be learned about stdin without reading from it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StdinProbe {
    /// Attached to an interactive terminal
    pub is_terminal: bool,
    /// Size reported by the OS for the stdin handle
    pub buffered_len: u64,
}

impl StdinProbe {
    /// Inspect this process's stdin
    pub fn stdin() -> Result<Self> {
        let stdin = io::stdin();
        Ok(Self {
            is_terminal: stdin.is_terminal(),
            buffered_len: stdin_len(&stdin)?,
        })
    }

    /// A blocking read should not be attempted
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.is_terminal || self.buffered_len == 0
    }
}

#[cfg(unix)]
fn stdin_len(stdin: &io::Stdin) -> io::Result<u64> {
    use std::os::fd::AsFd;

    let fd = stdin.as_fd().try_clone_to_owned()?;
    Ok(std::fs::File::from(fd).metadata()?.len())
}

#[cfg(windows)]
fn stdin_len(stdin: &io::Stdin) -> io::Result<u64> {
    use std::os::windows::io::AsHandle;

    let handle = stdin.as_handle().try_clone_to_owned()?;
    Ok(std::fs::File::from(handle).metadata()?.len())
}

#[cfg(not(any(unix, windows)))]
fn stdin_len(_stdin: &io::Stdin) -> io::Result<u64> {
    Ok(0)
}

/// Non-blocking check before calling [`read_pipe`].
///
/// `true` means *don't* do a blocking read: stdin is a terminal, reports a
/// zero size, or could not be inspected. `false` means data is probably
/// there. This is a heuristic; pipes and virtual devices may report sizes
/// that do not reflect what is actually buffered.
#[must_use]
pub fn can_read() -> bool {
    StdinProbe::stdin().map_or(true, |probe| probe.is_degenerate())
}
