//! Word-oriented AES-128 encryption built from first principles.
//!
//! The state is held as four column words with byte 0 of each column in the
//! low-order bits. This crate provides:
//! - GF(2^8) doubling (`xtime`) and the four round transforms.
//! - The AES-128 key schedule.
//! - Single-block encryption, with an observable variant for instrumentation.
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod key;
mod round;
mod sbox;

pub use crate::block::{
    block_from_state, pack_word, rotate_bytes_left, state_from_block, unpack_word, word_byte,
    Block, State, Word,
};
pub use crate::cipher::{
    encrypt, encrypt_block, encrypt_observed, encrypt_with_round_keys, expand_key, RoundObserver,
    Step,
};
pub use crate::error::{Error, Result};
pub use crate::key::{Aes128Key, RoundKeys, ROUNDS};
pub use crate::round::{
    add_round_key, mix_column, mix_columns, shift_rows, sub_bytes, sub_word, xtime,
};
pub use crate::sbox::{sbox, ROUND_CONSTANTS, SBOX};
