//! Fixed-size wire codec for [`Coordinate2D`]
//!
//! A coordinate travels as two signed 32-bit integers in network (big-endian)
//! byte order, `x` first, with no padding, tag or version.

use super::math::Coordinate2D;

/// Encoded size of a coordinate in bytes
pub const COORDINATE_WIRE_SIZE: usize = 8;

/// Coordinate decoding errors
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    /// Fewer bytes than a coordinate needs
    #[error("coordinate needs {needed} bytes but only {available} are available")]
    Truncated {
        /// Bytes required
        needed: usize,
        /// Bytes present
        available: usize,
    },

    /// Bytes left over after a standalone coordinate
    #[error("{extra} unexpected trailing bytes after coordinate")]
    TrailingBytes {
        /// Number of unread bytes
        extra: usize,
    },
}

impl Coordinate2D {
    /// Encode as 8 big-endian bytes, `x` then `y`
    pub fn to_bytes(self) -> [u8; COORDINATE_WIRE_SIZE] {
        let mut out = [0u8; COORDINATE_WIRE_SIZE];
        out[..4].copy_from_slice(&self.x.to_be_bytes());
        out[4..].copy_from_slice(&self.y.to_be_bytes());
        out
    }

    /// Exact inverse of [`Coordinate2D::to_bytes`]
    pub fn from_bytes(bytes: [u8; COORDINATE_WIRE_SIZE]) -> Self {
        let [x0, x1, x2, x3, y0, y1, y2, y3] = bytes;
        Self::new(
            i32::from_be_bytes([x0, x1, x2, x3]),
            i32::from_be_bytes([y0, y1, y2, y3]),
        )
    }

    /// Append the encoded coordinate to `out`
    pub fn write_to(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_bytes());
    }

    /// Read one coordinate from the front of `buf`, advancing it by exactly
    /// 8 bytes. `buf` is left untouched on error.
    pub fn read_from(buf: &mut &[u8]) -> Result<Self, WireError> {
        if buf.len() < COORDINATE_WIRE_SIZE {
            return Err(WireError::Truncated {
                needed: COORDINATE_WIRE_SIZE,
                available: buf.len(),
            });
        }

        let (head, rest) = buf.split_at(COORDINATE_WIRE_SIZE);
        let mut bytes = [0u8; COORDINATE_WIRE_SIZE];
        bytes.copy_from_slice(head);
        *buf = rest;
        Ok(Self::from_bytes(bytes))
    }

    /// Decode a buffer holding exactly one coordinate
    pub fn decode(bytes: &[u8]) -> Result<Self, WireError> {
        let mut cursor = bytes;
        let coordinate = Self::read_from(&mut cursor)?;
        if !cursor.is_empty() {
            return Err(WireError::TrailingBytes { extra: cursor.len() });
        }
        Ok(coordinate)
    }
}
