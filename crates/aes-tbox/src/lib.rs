//! T-box acceleration for AES-128.
//!
//! Four 256-entry word tables fold SubBytes and MixColumns of one byte into a
//! single lookup. The tables are generated once per process and shared
//! read-only; [`TBoxCipher`] uses them for rounds 1 to 9 and falls back to the
//! plain transforms from `aes-core` for the final round.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod cipher;
mod tables;

pub use crate::cipher::TBoxCipher;
pub use crate::tables::{generate_tables, tables, TBoxes, Table, TABLE_ENTRIES};
