//! Contiguous in-memory encode and decode.

use std::borrow::Cow;

use crate::encoder::Encoder;
use crate::error::CbeError;
use crate::header;
use crate::MAX_CHUNK_LEN;

/// Append the blob encoding of `src` onto `dst`.
pub fn encode(dst: &mut Vec<u8>, src: &[u8]) {
    if src.len() <= header::MAX_CHUNK_PAYLOAD {
        let mut hdr = [0u8; 4];
        let h = header::write(&mut hdr, src, false);
        dst.extend_from_slice(&hdr[h..]);
        dst.extend_from_slice(src);
        return;
    }

    // Too big for one chunk, push it through the streaming encoder with
    // maximum-size chunks since everything is in memory anyway.
    let mut reader = src;
    let mut encoder = Encoder::new(dst);
    encoder
        .set_chunk_len(MAX_CHUNK_LEN)
        .expect("chunk length is within bounds");
    encoder
        .write_blob(&mut reader)
        .expect("writing to a Vec does not fail");
}

/// Decode one blob from the start of `buf`.
///
/// Returns the blob content and the unconsumed remainder of `buf`. When
/// the blob was encoded in a single chunk the content borrows from `buf`
/// and nothing is copied; a multi-chunk blob concatenates its payloads
/// into owned storage.
///
/// Returns [`CbeError::EndOfInput`] if `buf` does not hold a complete
/// blob.
pub fn decode(buf: &[u8]) -> Result<(Cow<'_, [u8]>, &[u8]), CbeError> {
    let mut rest = buf;
    let mut content: Option<Vec<u8>> = None;

    loop {
        let hdr = header::parse(rest).ok_or(CbeError::EndOfInput)?;
        let (ofs, len) = (hdr.payload_ofs(), hdr.payload_len());
        if rest.len() < ofs + len {
            return Err(CbeError::EndOfInput);
        }
        let payload = &rest[ofs..ofs + len];
        rest = &rest[ofs + len..];

        if hdr.is_partial() {
            content
                .get_or_insert_with(Vec::new)
                .extend_from_slice(payload);
            continue;
        }

        return match content {
            None => Ok((Cow::Borrowed(payload), rest)),
            Some(mut acc) => {
                acc.extend_from_slice(payload);
                Ok((Cow::Owned(acc), rest))
            }
        };
    }
}
