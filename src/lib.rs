//! Composable Binary Encoding (CBE)
//!
//! CBE embeds one arbitrary-length byte string (a *blob*) inside a larger
//! byte stream so that a decoder can find the end of the embedded string
//! without scanning its content. The blob's bytes appear on the wire
//! verbatim and in order, split into one or more length-prefixed *chunks*.
//!
//! The plain [`encode`] and [`decode`] functions operate on contiguous
//! in-memory byte slices. The [`Encoder`] and [`Decoder`] types stream
//! blobs chunk by chunk and support arbitrary-length byte strings,
//! including infinite ones.
//!
//! # Chunks
//!
//! A blob is encoded as zero or more *partial* chunks followed by exactly
//! one *final* chunk. Every chunk is a 1 to 4 byte header followed by its
//! payload. A blob shorter than 16448 bytes always fits in a single final
//! chunk, and such small blobs have exactly one valid encoding.
//!
//! | Type    | Name    | Description |
//! | ------: | ------- | ----------- |
//! | u8..u32 | header  | Payload length and the partial/final tag, big-endian length subfields |
//! | [u8; N] | payload | N raw blob bytes, no escaping or transformation |
//!
//! # Header forms
//!
//! The first header byte selects the form. One-byte payloads below 0x80
//! need no header at all: the value byte is its own encoding.
//!
//! | First byte  | Second byte | Total header | Payload length | Role |
//! | ----------- | ----------- | -----------: | -------------- | ---- |
//! | `00`-`7F`   |             |      0 bytes | 1 (the byte itself) | final |
//! | `80`        |             |       1 byte | 0              | final |
//! | `82`-`BF`   |             |       1 byte | 2..63 (low 6 bits) | final |
//! | `81`        | `80`-`FF`   |      2 bytes | 1 (the second byte) | final |
//! | `C0`-`FF`   | any         |      2 bytes | 64 + 14-bit field | final |
//! | `81`        | `00`-`3F`   |      4 bytes | 16448 + 22-bit field | final |
//! | `81`        | `40`-`7F`   |      4 bytes | 16448 + 22-bit field | partial |
//!
//! Encoders must emit the shortest form that fits, so the length offsets
//! (64 for the 2-byte form, 16448 for the 4-byte forms) are baked into the
//! length subfields and a small blob cannot be inflated into a wider
//! header.
//!
//! # Streaming
//!
//! The streaming [`Encoder`] buffers one chunk at a time. While the
//! source keeps filling the buffer completely it emits partial chunks,
//! so the total length never needs to be known in advance; the first
//! short read ends the blob with a final chunk. Chunk payload sizes are
//! configurable between [`MIN_CHUNK_LEN`] and [`MAX_CHUNK_LEN`].
//!
//! The streaming [`Decoder`] reads headers and copies payloads to a
//! sink, stitching partial chunks back together. It holds at most one
//! chunk header plus its buffered reader in memory, so an arbitrarily
//! long blob decodes in constant space.
//!
//! There is no resynchronisation: a decoder must start at a blob
//! boundary. Blob content is opaque, there is no checksum, compression,
//! or type tagging.

mod decoder;
mod encoder;
mod error;
mod header;
mod slice;

#[cfg(test)]
mod testvec;

pub use crate::decoder::{BlobReader, Decoder};
pub use crate::encoder::Encoder;
pub use crate::error::CbeError;
pub use crate::slice::{decode, encode};

/// Smallest chunk payload size for streaming operation.
///
/// This is also the smallest payload a partial-chunk header can describe,
/// so any configured chunk size can be emitted as a legal partial chunk.
pub const MIN_CHUNK_LEN: usize = 16_448;

/// Largest chunk payload size for streaming operation.
pub const MAX_CHUNK_LEN: usize = 2_113_535;
