//! AES-128 key schedule and block encryption.

use crate::block::{block_from_state, pack_word, state_from_block, word_byte, Block, State, Word};
use crate::error::{exact, Result};
use crate::key::{Aes128Key, RoundKeys, ROUNDS};
use crate::round::{add_round_key, mix_columns, shift_rows, sub_bytes, sub_word};
use crate::sbox::ROUND_CONSTANTS;

/// One transform applied by the round engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    /// Byte substitution through the S-box.
    SubBytes,
    /// Cyclic row rotation.
    ShiftRows,
    /// Column mixing over GF(2^8).
    MixColumns,
    /// XOR with a round key.
    AddRoundKey,
}

/// Receives every step of an encryption together with the resulting state.
pub trait RoundObserver {
    /// Called after `step` of `round` has been applied.
    fn observe(&mut self, round: usize, step: Step, state: &State);
}

impl RoundObserver for () {
    #[inline(always)]
    fn observe(&mut self, _round: usize, _step: Step, _state: &State) {}
}

// [b0, b1, b2, b3] -> [b1, b2, b3, b0]
#[inline]
fn rot_word(word: Word) -> Word {
    word.rotate_right(8)
}

/// Expands a 128-bit key into 11 round keys.
pub fn expand_key(key: &Aes128Key) -> RoundKeys {
    let mut groups = [[0u32; 4]; ROUNDS + 1];
    groups[0] = key.words();

    for round in 1..=ROUNDS {
        let prev = groups[round - 1];
        let temp = sub_word(rot_word(prev[3]));
        let temp = pack_word(
            word_byte(temp, 0) ^ ROUND_CONSTANTS[round],
            word_byte(temp, 1),
            word_byte(temp, 2),
            word_byte(temp, 3),
        );

        let mut next = [0u32; 4];
        next[0] = temp ^ prev[0];
        for col in 1..4 {
            next[col] = next[col - 1] ^ prev[col];
        }
        groups[round] = next;
    }

    RoundKeys(groups)
}

/// Encrypts a single block, reporting each step to `observer`.
pub fn encrypt_observed<O: RoundObserver + ?Sized>(
    block: &Block,
    round_keys: &RoundKeys,
    observer: &mut O,
) -> Block {
    let mut state = state_from_block(block);

    add_round_key(&mut state, round_keys.get(0));
    observer.observe(0, Step::AddRoundKey, &state);

    for round in 1..=ROUNDS {
        sub_bytes(&mut state);
        observer.observe(round, Step::SubBytes, &state);
        shift_rows(&mut state);
        observer.observe(round, Step::ShiftRows, &state);
        if round != ROUNDS {
            mix_columns(&mut state);
            observer.observe(round, Step::MixColumns, &state);
        }
        add_round_key(&mut state, round_keys.get(round));
        observer.observe(round, Step::AddRoundKey, &state);
    }

    block_from_state(&state)
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
#[inline]
pub fn encrypt_with_round_keys(block: &Block, round_keys: &RoundKeys) -> Block {
    encrypt_observed(block, round_keys, &mut ())
}

/// Encrypts a single block under `key`, expanding the schedule for this call only.
pub fn encrypt_block(key: &Aes128Key, block: &Block) -> Block {
    encrypt_with_round_keys(block, &expand_key(key))
}

/// Encrypts a block given as raw slices.
///
/// Both `key` and `plaintext` must be exactly 16 bytes; anything else is rejected
/// with [`Error::InvalidLength`](crate::Error::InvalidLength).
pub fn encrypt(key: &[u8], plaintext: &[u8]) -> Result<Block> {
    let key = Aes128Key::from(exact::<16>("key", key)?);
    let block = exact::<16>("plaintext", plaintext)?;
    Ok(encrypt_block(&key, &block))
}
