//! Table-driven AES-128 encryption.

use aes_core::{
    add_round_key, block_from_state, expand_key, shift_rows, state_from_block, sub_bytes,
    word_byte, Aes128Key, Block, RoundKeys, State, ROUNDS,
};

use crate::tables::{tables, TBoxes};

/// AES-128 encryptor that computes rounds 1..=9 with T-box lookups.
///
/// The round keys are expanded once in [`TBoxCipher::new`] and reused for every
/// block.
#[derive(Clone, Debug)]
pub struct TBoxCipher {
    round_keys: RoundKeys,
    tables: &'static TBoxes,
}

impl TBoxCipher {
    /// Expands `key` and binds the process-wide tables.
    pub fn new(key: &Aes128Key) -> Self {
        Self::with_round_keys(expand_key(key))
    }

    /// Builds a cipher from an already expanded schedule.
    pub fn with_round_keys(round_keys: RoundKeys) -> Self {
        Self {
            round_keys,
            tables: tables(),
        }
    }

    /// Returns the expanded schedule.
    pub fn round_keys(&self) -> &RoundKeys {
        &self.round_keys
    }

    /// Encrypts a single block.
    pub fn encrypt_block(&self, block: &Block) -> Block {
        let mut state = state_from_block(block);
        add_round_key(&mut state, self.round_keys.get(0));

        for round in 1..ROUNDS {
            state = self.table_round(&state, round);
        }

        sub_bytes(&mut state);
        shift_rows(&mut state);
        add_round_key(&mut state, self.round_keys.get(ROUNDS));

        block_from_state(&state)
    }

    /// SubBytes, ShiftRows, MixColumns and AddRoundKey fused into lookups.
    #[inline]
    fn table_round(&self, state: &State, round: usize) -> State {
        let t = self.tables;
        let rk = self.round_keys.get(round);
        core::array::from_fn(|c| {
            t.t0[word_byte(state[c], 0) as usize]
                ^ t.t3[word_byte(state[(c + 1) % 4], 1) as usize]
                ^ t.t2[word_byte(state[(c + 2) % 4], 2) as usize]
                ^ t.t1[word_byte(state[(c + 3) % 4], 3) as usize]
                ^ rk[c]
        })
    }
}
