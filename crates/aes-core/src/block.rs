//! Block, word and state representation helpers.
//!
//! A [`Word`] packs four bytes with byte 0 in the low-order bits. The packing is
//! spelled out with shifts so it never depends on the host's endianness.

/// AES block of 16 bytes.
pub type Block = [u8; 16];

/// Four bytes packed little-endian within a `u32`.
pub type Word = u32;

/// Working state: four column words, `state[c]` holds column `c` with row `r`
/// in byte position `r`.
pub type State = [Word; 4];

/// Packs four bytes into a word, `b0` in the lowest byte position.
#[inline]
pub const fn pack_word(b0: u8, b1: u8, b2: u8, b3: u8) -> Word {
    (b0 as Word) | (b1 as Word) << 8 | (b2 as Word) << 16 | (b3 as Word) << 24
}

/// Extracts the byte at position `pos` (0..=3) of a word.
#[inline]
pub const fn word_byte(word: Word, pos: usize) -> u8 {
    ((word >> (pos * 8)) & 0xff) as u8
}

/// Splits a word back into its four bytes, lowest position first.
#[inline]
pub const fn unpack_word(word: Word) -> [u8; 4] {
    [
        word_byte(word, 0),
        word_byte(word, 1),
        word_byte(word, 2),
        word_byte(word, 3),
    ]
}

/// Rotates a word left by `positions` byte positions (byte `i` moves to `i + positions`).
#[inline]
pub const fn rotate_bytes_left(word: Word, positions: u32) -> Word {
    word.rotate_left(8 * (positions % 4))
}

/// Loads a 16-byte block into column-major state.
#[inline]
pub fn state_from_block(block: &Block) -> State {
    core::array::from_fn(|c| {
        let i = c * 4;
        pack_word(block[i], block[i + 1], block[i + 2], block[i + 3])
    })
}

/// Unpacks column-major state into a 16-byte block.
#[inline]
pub fn block_from_state(state: &State) -> Block {
    let mut block = [0u8; 16];
    for (chunk, word) in block.chunks_exact_mut(4).zip(state.iter()) {
        chunk.copy_from_slice(&unpack_word(*word));
    }
    block
}
