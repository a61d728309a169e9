//! Streaming chunked decoder.

use std::io::{self, copy, BufReader, ErrorKind, Read, Write};

use byteorder::{BigEndian, ByteOrder, ReadBytesExt};
use log::debug;

use crate::error::CbeError;

/// Decodes a series of blobs from an input stream.
///
/// The input is buffered internally. One byte of look-ahead state covers
/// the header forms whose payload lives inside the header bytes.
pub struct Decoder<R: Read> {
    inner: BufReader<R>,
    pending: Option<u8>,
}

impl<R: Read> Decoder<R> {
    pub fn new(reader: R) -> Self {
        Decoder {
            inner: BufReader::new(reader),
            pending: None,
        }
    }

    pub fn into_inner(self) -> R {
        self.inner.into_inner()
    }

    fn read_byte(&mut self) -> Result<u8, CbeError> {
        self.inner.read_u8().map_err(io_eof)
    }

    /// Read the next chunk header.
    ///
    /// Returns the payload length and whether more chunks follow. For the
    /// header forms that carry their payload byte inside the header, that
    /// byte is parked in `pending` for the payload copy to pick up.
    fn read_header(&mut self) -> Result<(usize, bool), CbeError> {
        debug_assert!(self.pending.is_none());

        let b0 = self.read_byte()?;
        if b0 < 0x80 {
            self.pending = Some(b0); // the header byte is the payload
            return Ok((1, false));
        }
        if b0 != 0x81 {
            if b0 < 0xC0 {
                return Ok(((b0 - 0x80) as usize, false));
            }
            let b1 = self.read_byte()?;
            return Ok((64 + (((b0 & 0x3F) as usize) << 8) + b1 as usize, false));
        }

        let b1 = self.read_byte()?;
        if b1 >= 0x80 {
            self.pending = Some(b1); // 1-byte payload held in the second byte
            return Ok((1, false));
        }

        let b2 = self.read_byte()?;
        let b3 = self.read_byte()?;
        let len = 16_448 + (((b1 & 0x3F) as usize) << 16) + ((b2 as usize) << 8) + b3 as usize;
        Ok((len, b1 & 0x40 != 0))
    }

    /// Lazily read the content of the next blob.
    ///
    /// The returned reader yields the blob's payload bytes and reports end
    /// of input once the final chunk is exhausted, pulling chunk headers
    /// on demand. Dropping it before that leaves the decoder in the middle
    /// of the blob.
    // TODO: a skip() on BlobReader would let a caller abandon a blob and
    // still reuse the decoder for the next one.
    pub fn blob_reader(&mut self) -> BlobReader<'_, R> {
        BlobReader {
            dec: self,
            rest: 0,
            done: false,
        }
    }

    /// Decode the next complete blob, writing its content to `writer`.
    ///
    /// Streams chunk by chunk, so the blob may be arbitrarily long.
    /// Returns the number of content bytes written.
    pub fn read_blob<W: Write>(&mut self, writer: &mut W) -> Result<u64, CbeError> {
        let total = copy(&mut self.blob_reader(), writer).map_err(io_eof)?;
        Ok(total)
    }

    /// Decode the next blob into a byte vector.
    pub fn read_bytes(&mut self) -> Result<Vec<u8>, CbeError> {
        let mut buf = Vec::new();
        self.read_blob(&mut buf)?;
        Ok(buf)
    }

    /// Decode the next blob as a UTF-8 string.
    pub fn read_string(&mut self) -> Result<String, CbeError> {
        Ok(String::from_utf8(self.read_bytes()?)?)
    }

    /// Decode the next blob as a minimal big-endian unsigned integer.
    ///
    /// Returns [`CbeError::IntegerOverflow`] if the blob holds more than
    /// 8 bytes.
    pub fn read_u64(&mut self) -> Result<u64, CbeError> {
        let bytes = self.read_bytes()?;
        if bytes.len() > 8 {
            return Err(CbeError::IntegerOverflow);
        }
        let mut b8 = [0u8; 8];
        b8[8 - bytes.len()..].copy_from_slice(&bytes);
        Ok(BigEndian::read_u64(&b8))
    }

    /// Decode the next blob as a zigzag-mapped signed integer.
    pub fn read_i64(&mut self) -> Result<i64, CbeError> {
        let u = self.read_u64()?;
        if u & 1 == 0 {
            Ok((u >> 1) as i64)
        } else {
            Ok(-1 - ((u >> 1) as i64))
        }
    }
}

/// Reads the content of one blob out of a [`Decoder`].
///
/// Returned by [`Decoder::blob_reader`].
pub struct BlobReader<'a, R: Read> {
    dec: &'a mut Decoder<R>,
    rest: usize,
    done: bool,
}

impl<R: Read> Read for BlobReader<'_, R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        while self.rest == 0 {
            if self.done {
                return Ok(0);
            }
            let (len, partial) = self.dec.read_header().map_err(cbe_io)?;
            debug!(
                "{} chunk, {} payload bytes",
                if partial { "partial" } else { "final" },
                len
            );
            self.rest = len;
            self.done = !partial;
        }

        if buf.is_empty() {
            return Ok(0);
        }
        if let Some(b) = self.dec.pending.take() {
            buf[0] = b;
            self.rest -= 1;
            return Ok(1);
        }

        let want = buf.len().min(self.rest);
        match self.dec.inner.read(&mut buf[..want])? {
            0 => Err(io::Error::new(
                ErrorKind::UnexpectedEof,
                CbeError::EndOfInput,
            )),
            n => {
                self.rest -= n;
                Ok(n)
            }
        }
    }
}

// Truncation shows up the same way from both decoders.
fn io_eof(e: io::Error) -> CbeError {
    if e.kind() == ErrorKind::UnexpectedEof {
        CbeError::EndOfInput
    } else {
        CbeError::IO(e)
    }
}

fn cbe_io(e: CbeError) -> io::Error {
    match e {
        CbeError::IO(e) => e,
        CbeError::EndOfInput => io::Error::new(ErrorKind::UnexpectedEof, CbeError::EndOfInput),
        e => io::Error::new(ErrorKind::InvalidData, e),
    }
}
