//! Error type for the cipher boundary.

use thiserror::Error;

/// Errors surfaced by the slice-accepting entry points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A key or block buffer did not have the required length.
    #[error("invalid length for {context}: needed {needed}, got {got}")]
    InvalidLength {
        /// Which buffer was rejected.
        context: &'static str,
        /// Required length in bytes.
        needed: usize,
        /// Length that was supplied.
        got: usize,
    },
}

/// Result alias for the cipher boundary.
pub type Result<T> = core::result::Result<T, Error>;

/// Copies `bytes` into a fixed array, rejecting any other length.
pub(crate) fn exact<const N: usize>(context: &'static str, bytes: &[u8]) -> Result<[u8; N]> {
    bytes.try_into().map_err(|_| Error::InvalidLength {
        context,
        needed: N,
        got: bytes.len(),
    })
}
