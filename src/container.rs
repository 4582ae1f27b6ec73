use crate::error::FormatError;

/// The only container version this tool understands on binary decode.
pub const VERSION: u16 = 1;

/// In-memory form of a BLAL hash list.
///
/// `hashes` is kept private so the range invariant (every value fits in
/// 4 bytes, guaranteed here by the element type) and the ordering rule
/// cannot be bypassed.  Decoding — from bytes or from a dump — preserves
/// the source order verbatim; only [`BlalContainer::add_hash`] re-sorts.
/// The serialized count is always derived from the sequence length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlalContainer {
    pub version: u16,
    pub big_endian: bool,
    hashes: Vec<u32>,
}

impl BlalContainer {
    /// Empty version-1 list with the given target byte order.
    pub fn new(big_endian: bool) -> Self {
        Self { version: VERSION, big_endian, hashes: Vec::new() }
    }

    /// Construction path shared by the two decoders.  Takes the hash
    /// sequence as-is, without sorting.
    pub(crate) fn with_hashes(version: u16, big_endian: bool, hashes: Vec<u32>) -> Self {
        Self { version, big_endian, hashes }
    }

    pub fn hashes(&self) -> &[u32] {
        &self.hashes
    }

    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }

    /// Insert a hash and re-sort the list ascending.  Duplicates are kept
    /// (the sort is stable).  Values above `0xFFFF_FFFF` are rejected
    /// before the list is modified.
    pub fn add_hash(&mut self, value: u64) -> Result<(), FormatError> {
        let value =
            u32::try_from(value).map_err(|_| FormatError::ValueTooLarge(value as i64))?;
        self.hashes.push(value);
        self.hashes.sort();
        Ok(())
    }

    /// Insert a hash given in hexadecimal text form, with or without a
    /// `0x` prefix.
    pub fn add_hash_hex(&mut self, text: &str) -> Result<(), FormatError> {
        let digits = strip_hex_prefix(text.trim());
        let value = u64::from_str_radix(digits, 16)
            .map_err(|_| FormatError::Parse(text.to_owned()))?;
        self.add_hash(value)
    }

    /// Remove and return the hash at `index` in the current order.
    pub fn remove_at(&mut self, index: usize) -> Result<u32, FormatError> {
        if index >= self.hashes.len() {
            return Err(FormatError::IndexOutOfRange { index, len: self.hashes.len() });
        }
        Ok(self.hashes.remove(index))
    }
}

pub(crate) fn strip_hex_prefix(text: &str) -> &str {
    text.strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text)
}
