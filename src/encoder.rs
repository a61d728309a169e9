//! Streaming chunked encoder.

use std::io::{Read, Write};

use byteorder::{BigEndian, ByteOrder};
use log::debug;

use crate::error::CbeError;
use crate::header;
use crate::{MAX_CHUNK_LEN, MIN_CHUNK_LEN};

const DEFAULT_CHUNK_LEN: usize = MIN_CHUNK_LEN;

/// Encodes a series of blobs to an output stream.
///
/// Holds one chunk in an owned buffer: four bytes of header scratch
/// followed by the chunk payload. The buffer is reused across blobs.
pub struct Encoder<W: Write> {
    inner: W,
    buf: Vec<u8>,
}

impl<W: Write> Encoder<W> {
    pub fn new(writer: W) -> Self {
        Encoder {
            inner: writer,
            buf: vec![0; 4 + DEFAULT_CHUNK_LEN],
        }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    /// Chunk payload size used for streaming writes.
    pub fn chunk_len(&self) -> usize {
        self.buf.len() - 4
    }

    /// Set the chunk payload size used for streaming writes.
    ///
    /// Larger chunks cost slightly less header overhead per payload byte
    /// but need a larger buffer. The buffer only reallocates when it has
    /// to grow. Sizes outside [`MIN_CHUNK_LEN`]..=[`MAX_CHUNK_LEN`] are
    /// rejected with [`CbeError::ChunkLen`].
    pub fn set_chunk_len(&mut self, chunk_len: usize) -> Result<(), CbeError> {
        if !(MIN_CHUNK_LEN..=MAX_CHUNK_LEN).contains(&chunk_len) {
            return Err(CbeError::ChunkLen(chunk_len));
        }
        self.buf.resize(4 + chunk_len, 0);
        Ok(())
    }

    /// Encode one blob by reading `reader` until end of input.
    ///
    /// The source may be arbitrarily long, even infinite; only one
    /// chunk-size buffer is held in memory at a time. While the source
    /// keeps producing full chunks they are emitted as partial chunks,
    /// the first short read ends the blob with exactly one final chunk.
    ///
    /// Returns the number of payload bytes consumed from `reader`.
    pub fn write_blob<R: Read>(&mut self, reader: &mut R) -> Result<u64, CbeError> {
        let chunk_len = self.buf.len() - 4;
        let mut total = 0u64;

        loop {
            let (hdr, payload) = self.buf.split_at_mut(4);
            let (len, eof) = read_full(reader, payload)?;

            let partial = len == chunk_len && !eof;
            let h = header::write(hdr, &payload[..len], partial);
            debug!(
                "{} chunk, {} payload bytes",
                if partial { "partial" } else { "final" },
                len
            );

            self.inner.write_all(&self.buf[h..4 + len])?;
            total += len as u64;
            if !partial {
                return Ok(total);
            }
        }
    }

    /// Encode a byte slice as one blob.
    pub fn write_bytes(&mut self, data: &[u8]) -> Result<(), CbeError> {
        let mut reader = data;
        self.write_blob(&mut reader)?;
        Ok(())
    }

    /// Encode a UTF-8 string as one blob.
    pub fn write_str(&mut self, s: &str) -> Result<(), CbeError> {
        self.write_bytes(s.as_bytes())
    }

    /// Encode a u64 as a minimal big-endian unsigned integer blob.
    ///
    /// Leading zero bytes are stripped, zero encodes as the empty blob.
    pub fn write_u64(&mut self, v: u64) -> Result<(), CbeError> {
        let mut b8 = [0u8; 8];
        BigEndian::write_u64(&mut b8, v);
        let ofs = b8.iter().position(|&b| b != 0).unwrap_or(8);
        self.write_bytes(&b8[ofs..])
    }

    /// Encode an i64 as a zigzag-mapped unsigned integer blob.
    pub fn write_i64(&mut self, v: i64) -> Result<(), CbeError> {
        let u = if v >= 0 {
            (v as u64) << 1
        } else {
            ((!v as u64) << 1) | 1
        };
        self.write_u64(u)
    }
}

/// Read until `buf` is full or the reader reports end of input.
///
/// Returns the number of bytes read and whether end of input was seen.
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<(usize, bool)> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..])? {
            0 => return Ok((filled, true)),
            n => filled += n,
        }
    }
    Ok((filled, false))
}

#[cfg(test)]
mod test_read_full {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn short_source() {
        let mut src = Cursor::new(vec![1, 2]);
        let mut buf = [0u8; 4];
        assert_eq!(read_full(&mut src, &mut buf).unwrap(), (2, true));
        assert_eq!(&buf, &[1, 2, 0, 0]);
    }

    #[test]
    fn long_source() {
        let mut src = Cursor::new(vec![1, 2, 3, 4]);
        let mut buf = [0u8; 2];
        assert_eq!(read_full(&mut src, &mut buf).unwrap(), (2, false));
        assert_eq!(&buf, &[1, 2]);
    }

    #[test]
    fn exact_source() {
        let mut src = Cursor::new(vec![1, 2, 3, 4]);
        let mut buf = [0u8; 4];
        assert_eq!(read_full(&mut src, &mut buf).unwrap(), (4, false));
        assert_eq!(&buf, &[1, 2, 3, 4]);
        assert_eq!(read_full(&mut src, &mut buf).unwrap(), (0, true));
    }
}
