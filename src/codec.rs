//! Binary codec for the BLAL container layout.
//!
//! | Offset | Size    | Field   | Notes                                  |
//! |--------|---------|---------|----------------------------------------|
//! | 0      | 4       | Magic   | ASCII `BLAL`                           |
//! | 4      | 2       | BOM     | `FE FF` = big, `FF FE` = little        |
//! | 6      | 2       | Version | always little-endian, must be 1        |
//! | 8      | 4       | Count   | byte order per BOM                     |
//! | 12     | 4×Count | Hashes  | each 4 bytes, byte order per BOM       |
//!
//! The BOM governs every multi-byte field except the version, which is
//! little-endian in both variants of the format.

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::container::{BlalContainer, VERSION};
use crate::error::FormatError;

pub const MAGIC: &[u8; 4] = b"BLAL";
pub const BOM_BE: [u8; 2] = [0xFE, 0xFF];
pub const BOM_LE: [u8; 2] = [0xFF, 0xFE];
pub const HEADER_LEN: usize = 12;

impl BlalContainer {
    /// Decode a whole `.blal` buffer.  Validates magic, BOM, version and
    /// length before any hash is read; the hash order in the file is kept
    /// as-is.
    pub fn from_bytes(data: &[u8]) -> Result<Self, FormatError> {
        if data.len() < HEADER_LEN {
            return Err(FormatError::Truncated { needed: HEADER_LEN, have: data.len() });
        }
        if &data[..4] != MAGIC {
            return Err(FormatError::BadMagic);
        }
        let big_endian = match [data[4], data[5]] {
            BOM_BE => true,
            BOM_LE => false,
            [a, b] => return Err(FormatError::BadBom(a, b)),
        };
        let version = LittleEndian::read_u16(&data[6..8]);
        if version != VERSION {
            return Err(FormatError::UnsupportedVersion(version));
        }
        let count = read_u32(big_endian, &data[8..12]) as usize;
        let needed = HEADER_LEN.saturating_add(count.saturating_mul(4));
        if data.len() < needed {
            return Err(FormatError::Truncated { needed, have: data.len() });
        }
        let hashes = data[HEADER_LEN..needed]
            .chunks_exact(4)
            .map(|chunk| read_u32(big_endian, chunk))
            .collect();
        Ok(Self::with_hashes(version, big_endian, hashes))
    }

    /// Serialize back to the byte layout above, in the container's current
    /// sequence order.  Cannot fail: the element type already bounds every
    /// hash to 4 bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_LEN + self.len() * 4);
        out.extend_from_slice(MAGIC);
        out.extend_from_slice(if self.big_endian { &BOM_BE } else { &BOM_LE });
        let mut version = [0u8; 2];
        LittleEndian::write_u16(&mut version, self.version);
        out.extend_from_slice(&version);
        write_u32(self.big_endian, &mut out, self.len() as u32);
        for &hash in self.hashes() {
            write_u32(self.big_endian, &mut out, hash);
        }
        out
    }
}

fn read_u32(big_endian: bool, buf: &[u8]) -> u32 {
    if big_endian {
        BigEndian::read_u32(buf)
    } else {
        LittleEndian::read_u32(buf)
    }
}

fn write_u32(big_endian: bool, out: &mut Vec<u8>, value: u32) {
    let mut buf = [0u8; 4];
    if big_endian {
        BigEndian::write_u32(&mut buf, value);
    } else {
        LittleEndian::write_u32(&mut buf, value);
    }
    out.extend_from_slice(&buf);
}
