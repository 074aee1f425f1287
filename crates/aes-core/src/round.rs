//! AES round transformations on column-word state.

use crate::block::{pack_word, word_byte, State, Word};
use crate::sbox::sbox;

/// Multiplies `byte` by 2 in GF(2^8) modulo x^8 + x^4 + x^3 + x + 1.
#[inline]
pub const fn xtime(byte: u8) -> u8 {
    let shifted = (byte as u16) << 1;
    if shifted > 0xff {
        (shifted as u8) ^ 0x1b
    } else {
        shifted as u8
    }
}

/// Substitutes each byte of a word through the S-box.
#[inline]
pub const fn sub_word(word: Word) -> Word {
    pack_word(
        sbox(word_byte(word, 0)),
        sbox(word_byte(word, 1)),
        sbox(word_byte(word, 2)),
        sbox(word_byte(word, 3)),
    )
}

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut State) {
    for word in state.iter_mut() {
        *word = sub_word(*word);
    }
}

/// Performs ShiftRows in place: row `r` of output column `c` comes from input
/// column `c + r` (mod 4).
#[inline]
pub fn shift_rows(state: &mut State) {
    let tmp = *state;
    for (c, word) in state.iter_mut().enumerate() {
        *word = pack_word(
            word_byte(tmp[c], 0),
            word_byte(tmp[(c + 1) % 4], 1),
            word_byte(tmp[(c + 2) % 4], 2),
            word_byte(tmp[(c + 3) % 4], 3),
        );
    }
}

/// Multiplies one column by the circulant matrix with first row `02 03 01 01`.
#[inline]
pub const fn mix_column(column: Word) -> Word {
    let a0 = word_byte(column, 0);
    let a1 = word_byte(column, 1);
    let a2 = word_byte(column, 2);
    let a3 = word_byte(column, 3);
    pack_word(
        xtime(a0) ^ (xtime(a1) ^ a1) ^ a2 ^ a3,
        a0 ^ xtime(a1) ^ (xtime(a2) ^ a2) ^ a3,
        a0 ^ a1 ^ xtime(a2) ^ (xtime(a3) ^ a3),
        (xtime(a0) ^ a0) ^ a1 ^ a2 ^ xtime(a3),
    )
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut State) {
    for word in state.iter_mut() {
        *word = mix_column(*word);
    }
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut State, round_key: &[Word; 4]) {
    for (word, key) in state.iter_mut().zip(round_key.iter()) {
        *word ^= *key;
    }
}
