//! DNS wire format codec (RFC 1035 §4).
//!
//! The decoder is the security-sensitive part of this crate: it runs on
//! bytes from the network, so every read is bounds-checked and
//! compressed-name pointer chases are strictly bounded.

pub mod decoder;
pub mod encoder;
pub mod name;

pub use decoder::{decode_response, is_truncated};
pub use encoder::encode_query;

use dnscheck_domain::LookupError;

/// Bounds-checked reader over a received message.
pub(crate) struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn seek(&mut self, pos: usize) {
        self.pos = pos;
    }

    pub fn read_u8(&mut self) -> Result<u8, LookupError> {
        let byte = *self
            .buf
            .get(self.pos)
            .ok_or_else(|| truncated("unexpected end of message"))?;
        self.pos += 1;
        Ok(byte)
    }

    pub fn read_u16(&mut self) -> Result<u16, LookupError> {
        let bytes = self.read_bytes(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_u32(&mut self) -> Result<u32, LookupError> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8], LookupError> {
        let end = self
            .pos
            .checked_add(count)
            .filter(|end| *end <= self.buf.len())
            .ok_or_else(|| truncated("unexpected end of message"))?;
        let slice = &self.buf[self.pos..end];
        self.pos = end;
        Ok(slice)
    }
}

pub(crate) fn truncated(context: &str) -> LookupError {
    LookupError::MalformedResponse(context.to_string())
}
