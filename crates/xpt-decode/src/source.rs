//! Forward-only byte cursor with bounded lookahead.

use std::io::{self, BufReader, Read};

const CHUNK_LEN: usize = 8 * 1024;

/// Wraps a reader so callers can check that a whole section is present
/// before consuming any of it.
pub(crate) struct RecordSource<R: Read> {
    reader: BufReader<R>,
    pending: Vec<u8>,
    offset: u64,
}

impl<R: Read> RecordSource<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            pending: Vec::new(),
            offset: 0,
        }
    }

    /// Byte offset of the next unconsumed byte.
    pub(crate) fn offset(&self) -> u64 {
        self.offset
    }

    /// Buffer up to `len` bytes without consuming them.
    ///
    /// The returned slice is shorter than `len` only at end of stream.
    pub(crate) fn peek(&mut self, len: usize) -> io::Result<&[u8]> {
        let mut chunk = [0u8; CHUNK_LEN];
        while self.pending.len() < len {
            let want = (len - self.pending.len()).min(CHUNK_LEN);
            match self.reader.read(&mut chunk[..want]) {
                Ok(0) => break,
                Ok(read) => self.pending.extend_from_slice(&chunk[..read]),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
        let available = self.pending.len().min(len);
        Ok(&self.pending[..available])
    }

    /// Consume up to `len` bytes. A shorter result means end of stream.
    pub(crate) fn take(&mut self, len: usize) -> io::Result<Vec<u8>> {
        let available = self.peek(len)?.len();
        let rest = self.pending.split_off(available);
        self.offset += available as u64;
        Ok(std::mem::replace(&mut self.pending, rest))
    }
}
