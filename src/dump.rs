//! Text bridge: the mapping form handed to a structured-text serializer.
//!
//! [`BlalDump`] is what a `.yml` dump deserializes into.  It deliberately
//! carries no endianness: the byte order has to be supplied again when
//! converting back to binary.

use serde::{Deserialize, Serialize};

use crate::container::{strip_hex_prefix, BlalContainer};
use crate::error::FormatError;

/// Mapping form of a container: `version` plus the `Hashes` sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlalDump {
    pub version: u16,
    #[serde(rename = "Hashes")]
    pub hashes: Vec<HashEntry>,
}

/// A single `Hashes` entry: a plain integer, or a string holding a decimal
/// or hexadecimal number.  Hand-edited dumps mix `420` and `"0x1A4"` in the
/// same list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HashEntry {
    Int(i64),
    Text(String),
}

impl HashEntry {
    /// Decimal first, hexadecimal on retry, then a 4-byte range check.
    fn resolve(&self) -> Result<u32, FormatError> {
        let wide = match self {
            HashEntry::Int(value) => *value,
            HashEntry::Text(text) => parse_scalar(text)?,
        };
        u32::try_from(wide).map_err(|_| FormatError::ValueTooLarge(wide))
    }
}

fn parse_scalar(text: &str) -> Result<i64, FormatError> {
    let trimmed = text.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return Ok(value);
    }
    i64::from_str_radix(strip_hex_prefix(trimmed), 16)
        .map_err(|_| FormatError::Parse(text.to_owned()))
}

impl BlalContainer {
    /// Rebuild a container from its mapping form.  `big_endian` comes from
    /// the caller; the mapping does not record it.  Entry order is kept
    /// verbatim — a previously sorted dump stays sorted, an unsorted one is
    /// taken as given.  The version is stored as-is; only binary decode
    /// restricts it.
    pub fn from_dump(dump: &BlalDump, big_endian: bool) -> Result<Self, FormatError> {
        let mut hashes = Vec::with_capacity(dump.hashes.len());
        for entry in &dump.hashes {
            hashes.push(entry.resolve()?);
        }
        Ok(Self::with_hashes(dump.version, big_endian, hashes))
    }

    /// Mapping form of this container, hashes as plain integers in the
    /// current sequence order.
    pub fn to_dump(&self) -> BlalDump {
        BlalDump {
            version: self.version,
            hashes: self.hashes().iter().map(|&h| HashEntry::Int(i64::from(h))).collect(),
        }
    }
}
