use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Mode(#[from] ModeError),

    #[error(transparent)]
    Padding(#[from] BadPad),
}

/// Misuse of a block cipher mode.
///
/// These are contract violations by the caller (wrong IV size, unaligned
/// buffers), never a property of untrusted data. They are reported before
/// any output is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModeError {
    #[error("IV/nonce length {actual} does not match block size {block_size}")]
    IvLength { block_size: usize, actual: usize },

    #[error("buffer length {len} is not a multiple of block size {block_size}")]
    Unaligned { block_size: usize, len: usize },

    #[error("block size {0} cannot hold a 64-bit counter")]
    CounterWidth(usize),

    #[error("block size {0} cannot be padded with single-byte pad lengths")]
    PadWidth(usize),

    #[error("cipher reports a zero block size")]
    ZeroBlockSize,
}

/// The trailing bytes of a buffer do not form valid padding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BadPad {
    #[error("bad padding: pad length {claimed} is invalid for a {len} byte buffer")]
    InvalidLength { claimed: u8, len: usize },

    #[error("bad padding: the final {claimed} bytes are not all {claimed}")]
    Mismatch { claimed: u8, unstripped: Vec<u8> },
}

impl BadPad {
    /// The data as it was before the failed strip, when the claimed pad
    /// length was in range.
    pub fn unstripped(&self) -> Option<&[u8]> {
        match self {
            Self::InvalidLength { .. } => None,
            Self::Mismatch { unstripped, .. } => Some(unstripped.as_slice()),
        }
    }
}
