use thiserror::Error;

/// Failure taxonomy shared by the binary codec, the text bridge, and the
/// list mutators.  Every error is reported before the container is touched;
/// a failing operation leaves the instance as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("unknown BLAL magic")]
    BadMagic,
    #[error("invalid byte-order mark: {0:02X} {1:02X}")]
    BadBom(u8, u8),
    #[error("unsupported BLAL version: {0}")]
    UnsupportedVersion(u16),
    #[error("truncated buffer: need {needed} bytes, have {have}")]
    Truncated { needed: usize, have: usize },
    #[error("{0} data size is larger than 4 bytes")]
    ValueTooLarge(i64),
    #[error("remove index out of range: {index} (length is {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("cannot parse {0:?} as a decimal or hexadecimal hash")]
    Parse(String),
}
